use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use docscan_common::{
    CompletedUpload, Config, DocumentFile, ExtractionService, HistoryRecord,
    HttpExtractionClient, PendingUpload,
};
use eframe::egui;

pub enum UiMessage {
    UploadDone(CompletedUpload),
    HistoryLoaded(docscan_common::Result<Vec<HistoryRecord>>),
}

/// ネットワーク処理をtokioランタイムで実行し、結果をUIスレッドへ返す
pub struct Worker {
    runtime: tokio::runtime::Runtime,
    client: Arc<HttpExtractionClient>,
    tx: Sender<UiMessage>,
    rx: Receiver<UiMessage>,
}

impl Worker {
    pub fn new(config: &Config) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .context("start tokio runtime")?;
        let client = HttpExtractionClient::new(
            &config.endpoint(),
            Duration::from_secs(config.timeout_seconds),
        )
        .context("create http client")?;
        let (tx, rx) = mpsc::channel();
        Ok(Self {
            runtime,
            client: Arc::new(client),
            tx,
            rx,
        })
    }

    pub fn upload_url(&self) -> &str {
        self.client.upload_url()
    }

    pub fn upload(&self, pending: PendingUpload, ctx: egui::Context) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let outcome = client.upload(&pending.file).await;
            let _ = tx.send(UiMessage::UploadDone(pending.complete(outcome)));
            ctx.request_repaint();
        });
    }

    pub fn fetch_history(&self, ctx: egui::Context) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let fetched = client.history().await;
            let _ = tx.send(UiMessage::HistoryLoaded(fetched));
            ctx.request_repaint();
        });
    }

    pub fn try_recv(&self) -> Option<UiMessage> {
        self.rx.try_recv().ok()
    }
}

pub fn read_document(path: &Path) -> Result<DocumentFile> {
    DocumentFile::from_path(path).with_context(|| format!("read {}", path.display()))
}
