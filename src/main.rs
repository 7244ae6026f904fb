use std::path::PathBuf;

use clap::Parser;
use log::info;

use availmon::{load_endpoints, HttpChecker, Monitor};

/// HTTP エンドポイントを定期的に叩いてドメインごとの可用性を表示する
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// エンドポイント一覧（YAML / JSON / TOML）
    config_file: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // config 読み込み
    let endpoints = load_endpoints(&cli.config_file)?;

    let checker = HttpChecker::new()?;
    let monitor = Monitor::new(checker, endpoints);

    tokio::select! {
        _ = monitor.run() => {}
        res = tokio::signal::ctrl_c() => {
            res?;
            info!("interrupted, shutting down");
        }
    }

    Ok(())
}
