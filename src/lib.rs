//! DocScan CLI
//!
//! ドキュメントを抽出サービスへ送り、返ってきた構造化データを表示する

pub mod cli;
pub mod error;
pub mod output;
pub mod upload;

pub use docscan_common as common;

use docscan_common::{render, to_text, Config, HttpExtractionClient};
use std::path::Path;
use std::time::Duration;

/// 抽出サービスのクライアントを作る
///
/// エンドポイントの優先順位: `--endpoint` > `DOCSCAN_ENDPOINT` > 設定ファイル
pub fn build_client(config: &Config, endpoint: Option<&str>) -> error::Result<HttpExtractionClient> {
    let client = match endpoint {
        Some(endpoint) => {
            HttpExtractionClient::new(endpoint, Duration::from_secs(config.timeout_seconds))?
        }
        None => HttpExtractionClient::from_config(config)?,
    };
    Ok(client)
}

/// ローカルのJSONファイルを整形する（設定は読まない）
pub fn render_file(path: &Path) -> error::Result<String> {
    if !path.is_file() {
        return Err(error::DocScanError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    Ok(to_text(&render(&value, None)))
}
