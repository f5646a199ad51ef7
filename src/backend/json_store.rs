use std::{fs, io::Write, path::{Path, PathBuf}};

use log::{debug, info};

use crate::backend::interface::{UserStore, BackendError, Result};
use crate::domain::Store;

/// Permission bits for a users file created by [`JsonStore::save`].
#[cfg(unix)]
const CREATE_MODE: u32 = 0o644;

/// Keeps the whole store in a single pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl AsRef<Path>) -> JsonStore {
        JsonStore { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open_for_write(&self) -> std::io::Result<fs::File> {
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(CREATE_MODE);
        }
        options.open(&self.path)
    }
}

impl UserStore for JsonStore {
    fn read(&self) -> Result<Store> {
        // only I/O failures are Unavailable; bad encoding is Malformed
        let content = fs::read(&self.path)
            .map_err(|source| BackendError::Unavailable { path: self.path.clone(), source })?;

        let store: Store = serde_json::from_slice(&content)
            .map_err(|source| BackendError::Malformed { path: self.path.clone(), source })?;
        info!("loaded {} users from {}", store.len(), self.path.display());
        return Ok(store);
    }

    fn save(&self, store: &Store) -> Result<()> {
        let content = serde_json::to_string_pretty(store).map_err(BackendError::Encode)?;
        let failed = |source| BackendError::Write { path: self.path.clone(), source };

        let mut file = self.open_for_write().map_err(failed)?;
        file.write_all(content.as_bytes()).map_err(failed)?;
        debug!("saved {} users to {}", store.len(), self.path.display());
        return Ok(());
    }
}
