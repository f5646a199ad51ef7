use std::{fs, net::SocketAddr, path::{Path, PathBuf}};

use anyhow::{self, Context};
use clap::ValueEnum;
use serde::{Serialize, Deserialize};

/// What to do when a mutation cannot be written to the users file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum WriteFailurePolicy {
    /// Log and terminate the process.
    #[default]
    Abort,
    /// Undo the in-memory change and answer with a server error.
    Respond,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub data_file: PathBuf,
    pub on_write_failure: WriteFailurePolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: SocketAddr::from(([0, 0, 0, 0], 8080)),
            data_file: PathBuf::from("users.json"),
            on_write_failure: WriteFailurePolicy::default(),
        }
    }
}

impl ServerConfig {
    pub fn read(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file_content = fs::read_to_string(filepath)
            .with_context(|| "failed to read config file")?;
        let config = toml::from_str(&file_content)
            .with_context(|| "failed to parse config file")?;
        return Ok(config);
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.bind.set_port(port);
        self
    }
}
