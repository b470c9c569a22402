//! Storefront server binary.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use storefront_server::config::{Environment, LogFormat, Overrides, StoreConfig};
use storefront_server::telemetry::init_telemetry;

/// Storefront - server-rendered product catalog with session carts
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file path (TOML)
    #[arg(short, long, env = "STOREFRONT_CONFIG")]
    config: Option<PathBuf>,

    /// Interface to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Product catalog JSON file
    #[arg(long, env = "STOREFRONT_CATALOG")]
    catalog: Option<PathBuf>,

    /// Deployment environment (development or production)
    #[arg(long, env = "STOREFRONT_ENV", value_parser = parse_environment)]
    env: Option<Environment>,

    /// Run in production mode (secure cookies)
    #[arg(long)]
    production: bool,

    /// Log output format
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        let environment = if self.production {
            Some(Environment::Production)
        } else {
            self.env
        };

        Overrides {
            host: self.host.clone(),
            port: self.port,
            catalog: self.catalog.clone(),
            environment,
            log_format: self.log_format,
        }
    }
}

fn parse_environment(value: &str) -> Result<Environment, String> {
    Environment::parse(value)
        .ok_or_else(|| format!("unknown environment '{}', expected development or production", value))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = StoreConfig::resolve(cli.config.as_deref(), cli.overrides())
        .context("Invalid configuration")?;

    init_telemetry(&config.logging);

    if let Err(e) = storefront_server::run(config).await {
        error!(error = %e, "storefront failed");
        std::process::exit(1);
    }

    Ok(())
}
