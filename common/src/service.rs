//! 抽出サービスとの境界
//!
//! コントローラと履歴ビューはこのトレイト越しにサービスへアクセスする。
//! 実装は呼び出し側が所有して渡す（テストでは偽実装に差し替える）。

use crate::error::Result;
use crate::types::{DocumentFile, HistoryRecord};
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait ExtractionService: Send + Sync {
    /// `POST /upload` にファイルを送り、抽出結果のJSONを返す
    async fn upload(&self, file: &DocumentFile) -> Result<Value>;

    /// `GET /history` で処理済みドキュメント一覧を取得
    async fn history(&self) -> Result<Vec<HistoryRecord>>;
}
