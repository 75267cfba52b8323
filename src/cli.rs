use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docscan")]
#[command(about = "ドキュメントをOCR/AI抽出サービスへ送り、構造化データを表示", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 抽出サービスのベースURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub endpoint: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ドキュメントをアップロードして抽出結果を表示
    Upload {
        /// ドキュメントのパス (PDF/PNG/JPG/JPEG)。省略時は対話入力
        file: Option<PathBuf>,

        /// 抽出結果JSONの保存先
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 整形せずJSONのまま出力
        #[arg(long)]
        json: bool,
    },

    /// 処理済みドキュメントの履歴を表示
    History {
        /// ファイル名で絞り込み（部分一致）
        #[arg(short, long)]
        filter: Option<String>,

        /// 整形せずJSONのまま出力
        #[arg(long)]
        json: bool,
    },

    /// ローカルのJSONファイルを整形表示
    Render {
        /// JSONファイル
        #[arg(required = true)]
        input: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// エンドポイントを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// タイムアウト（秒）を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
