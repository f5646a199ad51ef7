use roster::server::{self, ServerConfig, WriteFailurePolicy};

use std::path::PathBuf;
use anyhow;
use clap::Parser;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

#[derive(Parser, Debug)]
#[clap(version, about)]
struct Cli {
    /// TOML file with server settings
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Port to listen on
    #[clap(short, long, value_parser)]
    port: Option<u16>,

    /// Users file to load from and write to
    #[clap(short, long, value_parser)]
    data_file: Option<PathBuf>,

    /// Behaviour when a change cannot be written to the users file
    #[clap(long, value_enum)]
    on_write_failure: Option<WriteFailurePolicy>,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::read(path)?,
            None => ServerConfig::default()
        };
        if let Some(port) = self.port {
            config = config.with_port(port);
        }
        if let Some(data_file) = self.data_file {
            config.data_file = data_file;
        }
        if let Some(policy) = self.on_write_failure {
            config.on_write_failure = policy;
        }
        return Ok(config);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Cli::parse().into_config()?;
    server::serve(config).await
}
