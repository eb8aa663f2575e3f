//! Kasweb main entry point

use anyhow::Context;
use clap::Parser;
use kasweb_api::start_server;
use kasweb_config::Config;
use kasweb_store::{DocumentStore, JsonFileStore};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::sync::RwLock;

#[derive(Parser, Debug)]
#[command(name = "kasweb")]
#[command(version = "0.1.0")]
#[command(about = "A lightweight personal income and expense tracker", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = if args.config.exists() {
        Config::load(args.config.clone())
            .with_context(|| format!("failed to load {}", args.config.display()))?
    } else {
        Config::default()
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&config.logging.level),
    )
    .init();

    if !args.config.exists() {
        log::warn!(
            "config file {} not found, using built-in defaults",
            args.config.display()
        );
    }
    log::info!(
        "config loaded: data path={}, store file={}",
        config.data.path.display(),
        config.data.store_file
    );

    let rt = Runtime::new()?;
    rt.block_on(async {
        let mut store = JsonFileStore::new(config.store_path());
        store
            .load()
            .await
            .with_context(|| format!("failed to load {}", config.store_path().display()))?;

        let store = Arc::new(RwLock::new(store));
        start_server(config, store).await.context("server error")
    })
}
