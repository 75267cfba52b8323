use clap::Parser;
use docscan::{build_client, cli, error, output, render_file, upload};
use docscan::common::{Config, HistoryView, UploadSession};
use cli::{Cli, Commands};
use error::{DocScanError, Result};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(DocScanError::Submit(warning)) => {
            eprintln!("⚠ {}", warning);
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("❌ {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Upload { file, output, json } => {
            let config = Config::load()?;
            let path = match file {
                Some(path) => Some(path),
                None => upload::prompt_document_path()?,
            };

            let mut session = UploadSession::new();
            if let Some(path) = path {
                session.select_file(upload::load_document(&path)?);
            }

            let client = build_client(&config, cli.endpoint.as_deref())?;
            let result = upload::submit(&mut session, &client, !json).await?;

            if let Some(output) = output {
                upload::save_result(&output, &result)?;
                eprintln!("✔ 結果を保存: {}", output.display());
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", output::format_result(&result));
            }
        }

        Commands::History { filter, json } => {
            let config = Config::load()?;
            let client = build_client(&config, cli.endpoint.as_deref())?;
            let mut view = HistoryView::new();
            // 取得失敗はログのみ（空の一覧を表示）
            view.refresh(&client).await;

            let query = filter.unwrap_or_default();
            if json {
                println!("{}", serde_json::to_string_pretty(&view.filtered_records(&query))?);
            } else {
                print!("{}", output::format_history(&view.filtered_rows(&query)));
            }
        }

        Commands::Render { input } => {
            print!("{}", render_file(&input)?);
        }

        Commands::Config { set_endpoint, set_timeout, show } => {
            // 壊れた設定ファイルもここから直せるようにする
            let mut config = Config::load_or_default();
            let mut changed = false;

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
                changed = true;
            }
            if let Some(timeout) = set_timeout {
                config.set_timeout(timeout)?;
                changed = true;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  エンドポイント: {}", config.endpoint());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                if let Ok(path) = Config::config_path() {
                    println!("  設定ファイル: {}", path.display());
                }
            }
        }
    }

    Ok(())
}
