//! Storage module for report images
//!
//! Provides a MinIO/S3-compatible client that stores uploaded photos and
//! returns their public URLs.

mod media_client;

pub use media_client::{MediaStorageClient, UploadedImage};
