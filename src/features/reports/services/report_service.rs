use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::core::error::{AppError, Result};
use crate::features::reports::dtos::{ImagePart, NewReport, ReportResponseDto};
use crate::features::reports::models::Report;
use crate::modules::storage::MediaStorageClient;

/// Orchestrates the upload-then-persist sequence for report intake.
pub struct ReportService {
    pool: PgPool,
    media_client: Arc<MediaStorageClient>,
    query_timeout: Duration,
}

impl ReportService {
    pub fn new(
        pool: PgPool,
        media_client: Arc<MediaStorageClient>,
        query_timeout: Duration,
    ) -> Self {
        Self {
            pool,
            media_client,
            query_timeout,
        }
    }

    /// Create a report: upload the image, then persist the document.
    ///
    /// The insert never starts before the upload completes. If the insert
    /// fails after a successful upload the image stays behind in the
    /// bucket; no compensating delete is issued.
    pub async fn create(&self, report: NewReport, image: ImagePart) -> Result<ReportResponseDto> {
        let uploaded = self
            .media_client
            .upload_image(image.data, &image.content_type)
            .await?;

        let row = timeout(
            self.query_timeout,
            sqlx::query_as::<_, Report>(
                r#"
                INSERT INTO reports (description, full_address, localidad, barrio, contact_email, image_url, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING id, description, full_address, localidad, barrio, contact_email, image_url, created_at
                "#,
            )
            .bind(&report.description)
            .bind(&report.full_address)
            .bind(&report.localidad)
            .bind(&report.barrio)
            .bind(&report.contact_email)
            .bind(&uploaded.url)
            .bind(uploaded.created_at)
            .fetch_one(&self.pool),
        )
        .await
        .map_err(|_| self.store_timeout())??;

        tracing::info!("Report created: id={}, localidad={}", row.id, row.localidad);

        Ok(row.into())
    }

    /// List every stored report in the store's natural order.
    pub async fn list(&self) -> Result<Vec<ReportResponseDto>> {
        let rows = timeout(
            self.query_timeout,
            sqlx::query_as::<_, Report>(
                "SELECT id, description, full_address, localidad, barrio, contact_email, image_url, created_at FROM reports",
            )
            .fetch_all(&self.pool),
        )
        .await
        .map_err(|_| self.store_timeout())??;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn store_timeout(&self) -> AppError {
        AppError::Timeout(format!(
            "El almacén de reportes no respondió en {} segundos",
            self.query_timeout.as_secs()
        ))
    }
}
