use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use uwodex::{config::Config, ApiClient};

#[derive(Parser, Debug)]
#[command(name = "uwodex", about = "Browsing frontend for the UWO game-data catalog")]
struct Args {
    /// TOML config file; defaults to env / .env configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen address, overriding the config
    #[arg(long)]
    http_addr: Option<String>,

    /// Backend API base url, overriding the config
    #[arg(long)]
    backend_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    let mut cfg = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::from_env(),
    };
    if let Some(addr) = args.http_addr {
        cfg.http_addr = addr;
    }
    if let Some(url) = args.backend_url {
        cfg.backend_url = url;
    }

    let client = ApiClient::new(&cfg.backend_url)?;
    let http_addr: SocketAddr = cfg.http_addr.parse()?;
    tracing::info!(%http_addr, backend = %cfg.backend_url, "uwodex listening");

    uwodex::http::serve(http_addr, client).await
}

fn init_tracing() {
    use tracing_subscriber::{prelude::*, EnvFilter};

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,uwodex=debug"))
        .unwrap();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
