use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocScanError {
    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("送信できません: {0}")]
    Submit(#[from] docscan_common::SubmitWarning),

    #[error("アップロードに失敗しました: {0}")]
    UploadFailed(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error(transparent)]
    Common(#[from] docscan_common::Error),
}

pub type Result<T> = std::result::Result<T, DocScanError>;
