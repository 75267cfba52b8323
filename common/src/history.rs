//! 履歴ビュー
//!
//! 取得のたびに一覧全体を置き換える（マージ・ページングなし）。
//! 取得失敗はログに残すだけで、表示中の一覧はそのまま。

use crate::error::Result;
use crate::render::{render, RenderNode};
use crate::service::ExtractionService;
use crate::types::HistoryRecord;
use tracing::{info, warn};

/// 表示用の1行
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow<'a> {
    /// 表示キー（ファイル名）
    pub key: &'a str,
    pub table_data: RenderNode,
    pub structured_json: RenderNode,
    pub created_at: &'a str,
}

impl<'a> HistoryRow<'a> {
    fn from_record(record: &'a HistoryRecord) -> Self {
        Self {
            key: &record.filename,
            table_data: render(&record.table_data, None),
            structured_json: render(&record.structured_json, None),
            created_at: &record.created_at,
        }
    }
}

#[derive(Debug, Default)]
pub struct HistoryView {
    records: Vec<HistoryRecord>,
}

impl HistoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 取得結果を反映（成功なら全置換、失敗ならログのみ）
    ///
    /// 置き換えた場合 true を返す
    pub fn apply(&mut self, fetched: Result<Vec<HistoryRecord>>) -> bool {
        match fetched {
            Ok(records) => {
                info!(count = records.len(), "history loaded");
                self.records = records;
                true
            }
            Err(err) => {
                warn!(error = %err, "history fetch failed; keeping current list");
                false
            }
        }
    }

    /// サービスから一覧を取り直す
    pub async fn refresh<S>(&mut self, service: &S) -> bool
    where
        S: ExtractionService + ?Sized,
    {
        let fetched = service.history().await;
        self.apply(fetched)
    }

    /// 全行（受信順）
    pub fn rows(&self) -> Vec<HistoryRow<'_>> {
        self.records.iter().map(HistoryRow::from_record).collect()
    }

    /// ファイル名の部分一致（大文字小文字を区別しない）で絞り込んだレコード
    pub fn filtered_records(&self, query: &str) -> Vec<&HistoryRecord> {
        let query = query.trim().to_lowercase();
        self.records
            .iter()
            .filter(|r| query.is_empty() || r.filename.to_lowercase().contains(&query))
            .collect()
    }

    /// 絞り込んだ行（一覧自体は変更しない）
    pub fn filtered_rows(&self, query: &str) -> Vec<HistoryRow<'_>> {
        self.filtered_records(query)
            .into_iter()
            .map(HistoryRow::from_record)
            .collect()
    }
}
