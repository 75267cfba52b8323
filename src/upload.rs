//! アップロードコマンド
//!
//! ファイル選択 → 送信 → 結果取得までをセッション経由で行う

use crate::error::{DocScanError, Result};
use docscan_common::{DocumentFile, ExtractionService, Resolution, UploadSession};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

/// パスからドキュメントを読み込む
pub fn load_document(path: &Path) -> Result<DocumentFile> {
    if !path.is_file() {
        return Err(DocScanError::FileNotFound(path.display().to_string()));
    }
    let file = DocumentFile::from_path(path)?;
    if !file.has_supported_extension() {
        // 判定はサーバー側に任せて送信は続ける
        warn!(file = %file.file_name, "extension may not be supported by the service (pdf/png/jpg/jpeg)");
    }
    Ok(file)
}

/// ファイルパスを対話入力（端末でなければ None）
pub fn prompt_document_path() -> Result<Option<PathBuf>> {
    if !std::io::stdin().is_terminal() {
        return Ok(None);
    }
    let input: String = dialoguer::Input::new()
        .with_prompt("アップロードするファイル")
        .allow_empty(true)
        .interact_text()?;
    let input = input.trim();
    if input.is_empty() {
        Ok(None)
    } else {
        Ok(Some(PathBuf::from(input)))
    }
}

fn spinner(file_name: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(format!("アップロード中... {}", file_name));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// 選択済みファイルを送信し、成功時は抽出結果を返す
///
/// 未選択なら送信せずに `DocScanError::Submit` を返す
pub async fn submit<S>(session: &mut UploadSession, service: &S, show_progress: bool) -> Result<Value>
where
    S: ExtractionService + ?Sized,
{
    let pb = match session.selected_file() {
        Some(file) if show_progress => Some(spinner(&file.file_name)),
        _ => None,
    };

    let resolution = session.submit(service).await;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    match resolution? {
        Resolution::Succeeded => session
            .result()
            .cloned()
            .ok_or_else(|| DocScanError::UploadFailed("result missing".into())),
        Resolution::Failed(message) => Err(DocScanError::UploadFailed(message)),
        Resolution::Discarded => Err(DocScanError::UploadFailed("upload superseded".into())),
    }
}

/// 抽出結果をJSONファイルに保存
pub fn save_result(path: &Path, value: &Value) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)?;
    Ok(())
}
