//! DocScan Common Library
//!
//! CLIとデスクトップで共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod render;
pub mod format;
pub mod service;
pub mod session;
pub mod history;
pub mod config;
#[cfg(feature = "http")]
pub mod client;

pub use types::{DocumentFile, HistoryRecord};
pub use error::{Error, Result};
pub use render::{render, NodeKind, RenderNode};
pub use format::to_text;
pub use service::ExtractionService;
pub use session::{
    CompletedUpload, PendingUpload, Resolution, SubmitWarning, UploadSession, UploadStatus,
};
pub use history::{HistoryRow, HistoryView};
pub use config::Config;
#[cfg(feature = "http")]
pub use client::HttpExtractionClient;
