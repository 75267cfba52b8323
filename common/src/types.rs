//! 共有型定義
//!
//! CLIとデスクトップで共有される型:
//! - DocumentFile: アップロード対象のファイル（ファイル名 + バイト列）
//! - HistoryRecord: 処理済みドキュメントの履歴1件

use crate::error::Result;
use crate::render::scalar_text;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// 抽出サービスが受け付ける拡張子（判定はサーバー側が正）
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "png", "jpg", "jpeg"];

/// アップロード対象のドキュメント
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFile {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl DocumentFile {
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content,
        }
    }

    /// パスからファイルを読み込む
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Ok(Self { file_name, content })
    }

    fn extension(&self) -> Option<String> {
        Path::new(&self.file_name)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
    }

    /// multipartパートに付けるMIMEタイプ
    pub fn mime_type(&self) -> &'static str {
        match self.extension().as_deref() {
            Some("pdf") => "application/pdf",
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            _ => "application/octet-stream",
        }
    }

    /// サービスの対応形式か（ヒント用、送信は妨げない）
    pub fn has_supported_extension(&self) -> bool {
        self.extension()
            .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// 処理済みドキュメントの履歴
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub filename: String,

    #[serde(default)]
    pub table_data: serde_json::Value,

    #[serde(default)]
    pub structured_json: serde_json::Value,

    /// サーバーのタイムスタンプ（解釈せずそのまま表示）
    #[serde(default, deserialize_with = "opaque_text")]
    pub created_at: String,
}

/// 型を問わず表示用テキストとして受け取る（null は空文字）
fn opaque_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(scalar_text(&value))
}
