//! MinIO/S3-compatible media storage client
//!
//! Stores report images in an S3-compatible bucket and hands back the
//! public URL plus the upload timestamp.
//!
//! Uses rust-s3 crate for lightweight S3 operations.

use chrono::{DateTime, Utc};
use s3::creds::Credentials;
use s3::{Bucket, BucketConfiguration, Region};
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::config::MediaStorageConfig;
use crate::core::error::AppError;

/// Result of a successful image upload
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// Publicly accessible URL of the stored image
    pub url: String,
    /// Upload completion time; reports carry this as their `created_at`
    pub created_at: DateTime<Utc>,
}

/// MinIO/S3-compatible media storage client
pub struct MediaStorageClient {
    bucket: Box<Bucket>,
    region: Region,
    credentials: Credentials,
    public_endpoint: String,
    upload_timeout: Duration,
}

impl MediaStorageClient {
    /// Create a client from configuration.
    ///
    /// No network call happens here; call [`Self::ensure_bucket_exists`]
    /// once at startup.
    pub fn new(config: MediaStorageConfig) -> Result<Self, AppError> {
        let credentials = Credentials::new(
            Some(&config.access_key),
            Some(&config.secret_key),
            None,
            None,
            None,
        )
        .map_err(|e| AppError::Internal(format!("Failed to create storage credentials: {}", e)))?;

        let region = Region::Custom {
            region: config.region.clone(),
            endpoint: config.endpoint.clone(),
        };

        let mut bucket = Bucket::new(&config.bucket, region.clone(), credentials.clone())
            .map_err(|e| AppError::Internal(format!("Failed to create storage bucket: {}", e)))?;

        // Path-style URLs for MinIO (http://endpoint/bucket instead of http://bucket.endpoint)
        bucket.set_path_style();

        Ok(Self {
            bucket,
            region,
            credentials,
            public_endpoint: config.public_endpoint,
            upload_timeout: Duration::from_secs(config.upload_timeout_secs),
        })
    }

    /// Ensure the bucket exists, create if not
    pub async fn ensure_bucket_exists(&self) -> Result<(), AppError> {
        match self.create_bucket().await {
            Ok(_) => {
                info!("Bucket '{}' created successfully", self.bucket.name());
                Ok(())
            }
            Err(e) => {
                let error_str = e.to_string();
                // Bucket already exists - this is fine
                if error_str.contains("BucketAlreadyOwnedByYou")
                    || error_str.contains("BucketAlreadyExists")
                    || error_str.contains("already own it")
                {
                    debug!("Bucket '{}' already exists", self.bucket.name());
                    Ok(())
                } else {
                    warn!(
                        "Could not create bucket '{}': {}. Assuming it exists.",
                        self.bucket.name(),
                        e
                    );
                    Ok(())
                }
            }
        }
    }

    async fn create_bucket(&self) -> Result<(), AppError> {
        Bucket::create_with_path_style(
            &self.bucket.name(),
            self.region.clone(),
            self.credentials.clone(),
            BucketConfiguration::default(),
        )
        .await
        .map_err(|e| {
            AppError::Internal(format!(
                "Failed to create bucket '{}': {}",
                self.bucket.name(),
                e
            ))
        })?;

        Ok(())
    }

    /// Upload a report image and return its public URL plus upload time.
    ///
    /// The object key is `reports/{uuid}.{ext}` with the extension derived
    /// from the submitted content type. The call is bounded by the
    /// configured upload timeout, surfaced as a distinct failure.
    pub async fn upload_image(
        &self,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<UploadedImage, AppError> {
        let key = self.generate_key(content_type);

        timeout(
            self.upload_timeout,
            self.bucket
                .put_object_with_content_type(&key, &data, content_type),
        )
        .await
        .map_err(|_| {
            AppError::Timeout(format!(
                "La subida de la imagen no terminó en {} segundos",
                self.upload_timeout.as_secs()
            ))
        })?
        .map_err(|e| AppError::Storage(format!("Error al subir la imagen: {}", e)))?;

        debug!("Uploaded image '{}' to bucket '{}'", key, self.bucket.name());

        Ok(UploadedImage {
            url: self.get_public_url(&key),
            created_at: Utc::now(),
        })
    }

    /// Object key for a new image, extension derived from the content type
    fn generate_key(&self, content_type: &str) -> String {
        format!(
            "reports/{}.{}",
            Uuid::new_v4(),
            extension_for_content_type(content_type)
        )
    }

    /// Direct URL to an object (the bucket serves report images publicly)
    pub fn get_public_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.public_endpoint, self.bucket.name(), key)
    }

    /// Get the bucket name
    pub fn bucket_name(&self) -> String {
        self.bucket.name()
    }
}

/// Map a content type to a file extension, defaulting to "bin"
fn extension_for_content_type(content_type: &str) -> &'static str {
    match content_type {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        _ => "bin",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> MediaStorageClient {
        MediaStorageClient::new(MediaStorageConfig {
            endpoint: "http://localhost:9000".to_string(),
            public_endpoint: "https://media.ecoalert.example".to_string(),
            access_key: "test".to_string(),
            secret_key: "test".to_string(),
            bucket: "ecoalert-reports".to_string(),
            region: "us-east-1".to_string(),
            upload_timeout_secs: 30,
        })
        .expect("client")
    }

    #[test]
    fn public_url_uses_public_endpoint_and_bucket() {
        let client = test_client();
        assert_eq!(
            client.get_public_url("reports/abc.jpg"),
            "https://media.ecoalert.example/ecoalert-reports/reports/abc.jpg"
        );
    }

    #[test]
    fn generated_keys_carry_the_content_type_extension() {
        let client = test_client();
        let key = client.generate_key("image/png");
        assert!(key.starts_with("reports/"));
        assert!(key.ends_with(".png"));
    }

    #[test]
    fn unknown_content_types_fall_back_to_bin() {
        assert_eq!(extension_for_content_type("image/jpeg"), "jpg");
        assert_eq!(extension_for_content_type("application/pdf"), "bin");
        assert_eq!(extension_for_content_type(""), "bin");
    }
}
