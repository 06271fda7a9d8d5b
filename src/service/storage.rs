//! Object storage client for photo uploads.
//!
//! Talks to the storage provider's HTTP API with the service-role key. Stored
//! values in the database are bucket-relative paths; public URLs are resolved
//! on the way out.

use reqwest::Client;

use crate::{config::Config, error::AppError};

pub const BUCKET_PROFILE_PHOTOS: &str = "profile-photos";
pub const BUCKET_THEME_PHOTOS: &str = "theme-photos";
pub const BUCKET_GAME_PHOTOS: &str = "game-photos";
pub const BUCKET_MESSAGE_PHOTOS: &str = "message-photos";
pub const BUCKET_PRIVATE_MESSAGE_PHOTOS: &str = "private-message-photos";
pub const BUCKET_CHARACTER_PHOTOS: &str = "character-photos";

pub struct StorageService<'a> {
    http: &'a Client,
    config: &'a Config,
}

impl<'a> StorageService<'a> {
    pub fn new(http: &'a Client, config: &'a Config) -> Self {
        Self { http, config }
    }

    /// Uploads an object, overwriting any previous object at the same path.
    ///
    /// # Arguments
    /// - `bucket` - Target bucket
    /// - `path` - Bucket-relative object path
    /// - `content_type` - MIME type reported by the upload
    /// - `data` - Raw object bytes
    pub async fn upload(
        &self,
        bucket: &str,
        path: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<(), AppError> {
        let url = format!(
            "{}/storage/v1/object/{}/{}",
            self.config.supabase_url, bucket, path
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.supabase_service_role_key)
            .header("apikey", &self.config.supabase_service_role_key)
            .header("x-upsert", "true")
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(data)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::InternalError(format!(
                "Storage upload to {}/{} failed with status {}",
                bucket, path, status
            )));
        }

        Ok(())
    }

    /// Removes an object from a bucket.
    pub async fn delete(&self, bucket: &str, path: &str) -> Result<(), AppError> {
        let url = format!("{}/storage/v1/object/{}", self.config.supabase_url, bucket);

        let response = self
            .http
            .delete(&url)
            .bearer_auth(&self.config.supabase_service_role_key)
            .header("apikey", &self.config.supabase_service_role_key)
            .json(&serde_json::json!({ "prefixes": [path] }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::InternalError(format!(
                "Storage delete of {}/{} failed with status {}",
                bucket, path, status
            )));
        }

        Ok(())
    }

    /// Removes an object, logging instead of failing when the provider
    /// rejects the call. Used where a dangling object is acceptable.
    pub async fn delete_best_effort(&self, bucket: &str, path: &str) {
        if let Err(err) = self.delete(bucket, path).await {
            tracing::warn!("Failed to delete stored object {}/{}: {}", bucket, path, err);
        }
    }

    /// Resolves a stored bucket-relative path to a public URL.
    pub fn public_url(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.config.supabase_url, bucket, path
        )
    }

    /// Resolves an optional stored path, passing `None` through.
    pub fn resolve(&self, bucket: &str, path: Option<&str>) -> Option<String> {
        path.map(|p| self.public_url(bucket, p))
    }
}
