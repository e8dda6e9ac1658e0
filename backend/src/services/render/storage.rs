//! Object storage for rendered videos, spoken in the Supabase storage REST
//! dialect: an authenticated upsert upload and a public object URL.

use super::error::RenderError;
use crate::config::StorageConfig;
use log::info;
use reqwest::Client;

#[derive(Debug, Clone)]
pub struct ObjectStorage {
    config: StorageConfig,
}

impl ObjectStorage {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    pub fn object_url(&self, file_name: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.config.url, self.config.bucket, file_name
        )
    }

    pub fn public_url(&self, file_name: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.config.url, self.config.bucket, file_name
        )
    }

    /// Uploads (overwriting) `bytes` as `file_name` and returns its public URL.
    pub async fn upload(
        &self,
        http: &Client,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, RenderError> {
        let size = bytes.len();
        let response = http
            .post(self.object_url(file_name))
            .bearer_auth(&self.config.service_key)
            .header("apikey", &self.config.service_key)
            .header("x-upsert", "true")
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| RenderError::Upload(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RenderError::Upload(format!("{} {}", status, body)));
        }
        info!("[Render] Uploaded {} ({} bytes) to bucket {}", file_name, size, self.config.bucket);
        Ok(self.public_url(file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_follow_bucket_layout() {
        let storage = ObjectStorage::new(StorageConfig {
            url: "https://project.supabase.co".to_string(),
            service_key: "service".to_string(),
            bucket: "rendered-videos".to_string(),
        });
        assert_eq!(
            storage.object_url("r1.mp4"),
            "https://project.supabase.co/storage/v1/object/rendered-videos/r1.mp4"
        );
        assert_eq!(
            storage.public_url("r1.mp4"),
            "https://project.supabase.co/storage/v1/object/public/rendered-videos/r1.mp4"
        );
    }
}
