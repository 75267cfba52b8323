//! アップロードセッション（1回のアップロード試行の状態機械）
//!
//! 状態遷移:
//! - Idle → Selected（ファイル選択）
//! - Selected → Uploading（送信開始）
//! - Uploading → Succeeded / Failed（完了）
//! - 任意の状態 → Selected（再選択、結果とエラーは破棄）
//!
//! 送信は `begin_submit` と `finish` の2段階。UIスレッドは `begin_submit` で
//! 受け取った `PendingUpload` をワーカーに渡し、完了を `finish` で反映する。
//! 同一セッションで同時に飛ぶリクエストは常に1本まで。

use crate::service::ExtractionService;
use crate::types::DocumentFile;
use serde_json::Value;
use thiserror::Error as ThisError;
use tracing::{debug, error, info};

/// アップロード失敗時にユーザーへ出すメッセージ
pub const UPLOAD_FAILED_MESSAGE: &str = "Failed to upload. Is backend running?";

/// セッションの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
    Idle,
    Selected,
    Uploading,
    Succeeded,
    Failed,
}

impl UploadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadStatus::Idle => "idle",
            UploadStatus::Selected => "selected",
            UploadStatus::Uploading => "uploading",
            UploadStatus::Succeeded => "succeeded",
            UploadStatus::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, UploadStatus::Succeeded | UploadStatus::Failed)
    }
}

/// 送信を受け付けなかった理由（同期的な警告として表示する）
#[derive(ThisError, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitWarning {
    #[error("No file selected")]
    NoFileSelected,

    #[error("An upload is already in progress")]
    UploadInProgress,
}

/// 完了の反映結果
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Succeeded,
    /// ユーザー向けメッセージ（ブロッキング通知で表示する）
    Failed(String),
    /// 送信中に再選択されたため破棄した
    Discarded,
}

/// 送信中のリクエスト（ワーカーへ渡す）
#[derive(Debug)]
pub struct PendingUpload {
    attempt: u64,
    pub file: DocumentFile,
}

impl PendingUpload {
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    /// サービス呼び出しの結果を添えて完了扱いにする
    pub fn complete(self, outcome: crate::Result<Value>) -> CompletedUpload {
        CompletedUpload {
            attempt: self.attempt,
            file: self.file,
            outcome,
        }
    }
}

/// 完了したリクエスト（UIスレッドへ戻す）
#[derive(Debug)]
pub struct CompletedUpload {
    attempt: u64,
    file: DocumentFile,
    outcome: crate::Result<Value>,
}

// 結果とエラーメッセージは終端状態にしか存在しない
#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Idle,
    Selected,
    Uploading { attempt: u64 },
    Succeeded(Value),
    Failed(String),
}

#[derive(Debug)]
pub struct UploadSession {
    selected: Option<DocumentFile>,
    phase: Phase,
    in_flight: Option<u64>,
    next_attempt: u64,
}

impl Default for UploadSession {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadSession {
    pub fn new() -> Self {
        Self {
            selected: None,
            phase: Phase::Idle,
            in_flight: None,
            next_attempt: 1,
        }
    }

    pub fn status(&self) -> UploadStatus {
        match self.phase {
            Phase::Idle => UploadStatus::Idle,
            Phase::Selected => UploadStatus::Selected,
            Phase::Uploading { .. } => UploadStatus::Uploading,
            Phase::Succeeded(_) => UploadStatus::Succeeded,
            Phase::Failed(_) => UploadStatus::Failed,
        }
    }

    pub fn selected_file(&self) -> Option<&DocumentFile> {
        self.selected.as_ref()
    }

    pub fn result(&self) -> Option<&Value> {
        match &self.phase {
            Phase::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_uploading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// 送信ボタンを有効にできるか
    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && self.in_flight.is_none()
    }

    /// ファイルを選択（いつでも可、前回の結果は破棄）
    pub fn select_file(&mut self, file: DocumentFile) {
        debug!(file = %file.file_name, bytes = file.len(), "file selected");
        self.selected = Some(file);
        self.phase = Phase::Selected;
    }

    /// 送信を開始する
    ///
    /// 選択ファイルは送信中のリクエストへ移り、完了時に戻される。
    pub fn begin_submit(&mut self) -> Result<PendingUpload, SubmitWarning> {
        if self.in_flight.is_some() {
            return Err(SubmitWarning::UploadInProgress);
        }
        let file = self.selected.take().ok_or(SubmitWarning::NoFileSelected)?;

        let attempt = self.next_attempt;
        self.next_attempt += 1;
        self.in_flight = Some(attempt);
        self.phase = Phase::Uploading { attempt };
        info!(file = %file.file_name, attempt, "upload started");

        Ok(PendingUpload { attempt, file })
    }

    /// リクエストの完了を反映する
    pub fn finish(&mut self, completed: CompletedUpload) -> Resolution {
        let CompletedUpload { attempt, file, outcome } = completed;

        if self.in_flight != Some(attempt) {
            debug!(attempt, "ignoring completion for unknown upload");
            return Resolution::Discarded;
        }
        self.in_flight = None;

        if self.phase != (Phase::Uploading { attempt }) {
            debug!(attempt, "file re-selected during upload; discarding result");
            return Resolution::Discarded;
        }
        // 再送できるようにファイルを戻す
        self.selected = Some(file);

        match outcome {
            Ok(value) => {
                info!(attempt, "upload succeeded");
                self.phase = Phase::Succeeded(value);
                Resolution::Succeeded
            }
            Err(err) => {
                error!(attempt, error = %err, "upload failed");
                let message = UPLOAD_FAILED_MESSAGE.to_string();
                self.phase = Phase::Failed(message.clone());
                Resolution::Failed(message)
            }
        }
    }

    /// 送信して完了まで待つ（中断点は1か所）
    pub async fn submit<S>(&mut self, service: &S) -> Result<Resolution, SubmitWarning>
    where
        S: ExtractionService + ?Sized,
    {
        let pending = self.begin_submit()?;
        let outcome = service.upload(&pending.file).await;
        Ok(self.finish(pending.complete(outcome)))
    }
}
