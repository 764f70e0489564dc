//! Wallpaper API service.
//!
//! HTTP server rendering year, month and day progress wallpapers.

use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use wallpaper_api::{build_router, AppState, ServiceConfig};

#[derive(Parser, Debug)]
#[command(name = "wallpaper-api")]
#[command(about = "Progress wallpaper server")]
struct Args {
    /// YAML config file
    #[arg(short, long, env = "WALLPAPER_CONFIG", default_value = "config/wallpaper.yaml")]
    config: PathBuf,

    /// Listen address (overrides config)
    #[arg(short, long, env = "WALLPAPER_LISTEN")]
    listen: Option<String>,

    /// Log level (overrides config)
    #[arg(long, env = "LOG_LEVEL")]
    log_level: Option<String>,

    /// Directory of YYYY-MM-DD.md todo files
    #[arg(long, env = "TODOS_DIR")]
    todos_dir: Option<PathBuf>,

    /// Directory of font files
    #[arg(long, env = "FONTS_DIR")]
    fonts_dir: Option<PathBuf>,

    /// Fetch quotes from the remote service
    #[arg(long, env = "REMOTE_QUOTES")]
    remote_quotes: Option<bool>,
}

impl Args {
    fn apply(&self, config: &mut ServiceConfig) {
        if let Some(listen) = &self.listen {
            config.listen = listen.clone();
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if let Some(dir) = &self.todos_dir {
            config.todos_dir = dir.clone();
        }
        if let Some(dir) = &self.fonts_dir {
            config.fonts.dir = dir.clone();
        }
        if let Some(remote) = self.remote_quotes {
            config.quotes.remote = remote;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let (mut config, origin) = ServiceConfig::load(&args.config)?;
    args.apply(&mut config);

    // Initialize tracing
    let level = match config.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    origin.log();

    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;

    info!("Prometheus metrics exporter initialized");
    info!(
        todos_dir = %config.todos_dir.display(),
        fonts_dir = %config.fonts.dir.display(),
        remote_quotes = config.quotes.remote,
        "Starting wallpaper API server"
    );

    let addr: SocketAddr = config
        .listen
        .parse()
        .with_context(|| format!("Invalid listen address: {}", config.listen))?;

    let state = Arc::new(AppState::new(config)?);
    let app = build_router(state, prometheus_handle);

    info!(address = %addr, "Listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
