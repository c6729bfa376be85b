//! BudgetIQ service runner.
//!
//! Runs one internal service (core or ai) behind the API gateway.
//!
//! ```text
//!   client ──▶ gateway ──(X-User-Id, X-Org-Id)──▶ budgetiq --service core  (/api/*)
//!                                             └─▶ budgetiq --service ai    (/ai/*)
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use budgetiq::config::{load_config, validate_config, ConfigError, ServiceConfig};
use budgetiq::lifecycle::signals::spawn_signal_handler;
use budgetiq::observability::{logging, metrics};
use budgetiq::{HttpServer, ServiceKind, Shutdown};

#[derive(Parser)]
#[command(name = "budgetiq")]
#[command(about = "Run a BudgetIQ internal service", long_about = None)]
struct Args {
    /// TOML configuration file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Service to run (overrides the config file).
    #[arg(short, long, value_enum)]
    service: Option<ServiceKind>,

    /// Bind address (overrides the config file).
    #[arg(short, long)]
    bind: Option<String>,
}

impl Args {
    fn into_config(self) -> Result<ServiceConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ServiceConfig::default(),
        };
        if let Some(service) = self.service {
            config.service = service;
        }
        if let Some(bind) = self.bind {
            config.listener.bind_address = bind;
        }
        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Args::parse().into_config()?;

    logging::init(&config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        service = %config.service,
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        if let Err(e) = metrics::init_metrics(addr) {
            tracing::error!(error = %e, metrics_address = %addr, "Failed to start metrics endpoint");
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    spawn_signal_handler(&shutdown);

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
