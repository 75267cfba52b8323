//! 抽出サービスのHTTPクライアント（reqwest）

use crate::config::Config;
use crate::error::{Error, Result};
use crate::service::ExtractionService;
use crate::types::{DocumentFile, HistoryRecord};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// multipartのパート名
const FILE_PART: &str = "file";

pub struct HttpExtractionClient {
    client: reqwest::Client,
    upload_url: String,
    history_url: String,
}

impl HttpExtractionClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            upload_url: join_url(endpoint, "upload"),
            history_url: join_url(endpoint, "history"),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.endpoint(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    pub fn history_url(&self) -> &str {
        &self.history_url
    }
}

#[async_trait]
impl ExtractionService for HttpExtractionClient {
    async fn upload(&self, file: &DocumentFile) -> Result<Value> {
        debug!(url = %self.upload_url, file = %file.file_name, "POST upload");
        let part = Part::bytes(file.content.clone())
            .file_name(file.file_name.clone())
            .mime_str(file.mime_type())?;
        let form = Form::new().part(FILE_PART, part);

        let resp = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Error::Status(resp.status().as_u16()));
        }
        Ok(resp.json().await?)
    }

    async fn history(&self) -> Result<Vec<HistoryRecord>> {
        debug!(url = %self.history_url, "GET history");
        let resp = self.client.get(&self.history_url).send().await?;
        if !resp.status().is_success() {
            return Err(Error::Status(resp.status().as_u16()));
        }
        Ok(resp.json().await?)
    }
}

/// ベースURLとパスを連結（スラッシュの重複を除く）
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
