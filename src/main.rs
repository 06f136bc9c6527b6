use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use statetrack::server::{self, config::Config};

#[derive(Parser)]
#[command(name = "statetrack")]
#[command(about = "Two-person US states visited tracker")]
struct Cli {
    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Path to the sqlite database file
    #[arg(long, value_name = "FILE")]
    db: Option<PathBuf>,

    /// Directory of static frontend assets
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Cli::parse();

    // CLI flags override the environment.
    let mut config = Config::load();
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(db) = args.db {
        config.db_file = db;
    }
    if let Some(assets) = args.assets {
        config.assets_dir = assets;
    }

    server::serve(config).await
}
