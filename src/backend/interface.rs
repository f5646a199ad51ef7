use std::{io, path::PathBuf};

use thiserror::Error;

use crate::domain::Store;

#[derive(Debug, Error)]
pub enum BackendError {
    /// The backing file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Unavailable { path: PathBuf, source: io::Error },
    /// The backing file was read but does not hold a valid user map.
    #[error("failed to parse {}: {source}", path.display())]
    Malformed { path: PathBuf, source: serde_json::Error },
    #[error("failed to encode users: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, BackendError>;

pub trait UserStore: Send + Sync {
    fn read(&self) -> Result<Store>;
    fn save(&self, store: &Store) -> Result<()>;
}
