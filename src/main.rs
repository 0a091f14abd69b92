use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use faultline::config::{self, ServiceConfig};
use faultline::lifecycle::{signals, Shutdown};
use faultline::observability::logging;
use faultline::HttpServer;

#[derive(Parser)]
#[command(name = "faultline")]
#[command(about = "Controllable fault-injection HTTP service", long_about = None)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listening port (overrides the config file).
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Failure mode active at startup (overrides the config file).
    /// The legacy FAILURE_MODE variable is honored when this is unset.
    #[arg(long, env = "FAULTLINE_FAILURE_MODE")]
    failure_mode: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init("faultline=debug,tower_http=debug");

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(port) = cli.port {
        config.set_port(port);
    }
    if let Some(mode) = config::loader::failure_mode_override(cli.failure_mode) {
        config.fault.initial_mode = mode;
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        failure_mode = %config.fault.initial_mode,
        upstream = %config.upstream.url,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Arc::new(Shutdown::new());
    let signal_shutdown = Arc::clone(&shutdown);
    tokio::spawn(async move {
        signals::watch_signals(&signal_shutdown).await;
    });

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
