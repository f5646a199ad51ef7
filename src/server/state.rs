use std::sync::Arc;

use anyhow::{self, Context};
use log::{error, info, warn};
use tokio::sync::Mutex;

use crate::backend::{BackendError, UserStore};
use crate::domain::Store;
use crate::server::config::WriteFailurePolicy;
use crate::server::error::ServerError;

pub const LOAD_FAILED_MESSAGE: &str = "DB file is not loaded, please try again later";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to persist changes";

pub type SharedState = Arc<AppState>;

/// Users held by the running server together with where they are persisted.
///
/// Every access goes through one lock, so a mutation and the file write
/// that follows it are never interleaved with another request.
pub struct AppState {
    users: Mutex<Store>,
    backend: Arc<dyn UserStore>,
    load_error: Option<String>,
    on_write_failure: WriteFailurePolicy,
}

impl AppState {
    /// Fill the store from `backend`.
    ///
    /// An unreadable or missing file leaves the store empty and records
    /// [`LOAD_FAILED_MESSAGE`]. A file that reads but fails to decode is
    /// returned as an error.
    pub fn load<B>(backend: B, on_write_failure: WriteFailurePolicy) -> Result<AppState, BackendError>
    where
        B: UserStore + 'static
    {
        let (users, load_error) = match backend.read() {
            Ok(users) => (users, None),
            Err(err @ BackendError::Unavailable { .. }) => {
                warn!("starting with no users: {}", err);
                (Store::new(), Some(LOAD_FAILED_MESSAGE.to_string()))
            },
            Err(err) => return Err(err)
        };

        return Ok(AppState {
            users: Mutex::new(users),
            backend: Arc::new(backend),
            load_error,
            on_write_failure,
        });
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub async fn read<T>(&self, f: impl FnOnce(&Store) -> T) -> T {
        let users = self.users.lock().await;
        f(&users)
    }

    /// Apply `f` to the store and persist the result.
    ///
    /// Nothing is written when `f` fails. A failed write is handled
    /// according to the configured [`WriteFailurePolicy`].
    pub async fn mutate<T>(&self, f: impl FnOnce(&mut Store) -> Result<T, ServerError>) -> Result<T, ServerError> {
        let mut users = self.users.lock().await;
        let snapshot = match self.on_write_failure {
            WriteFailurePolicy::Respond => Some(users.clone()),
            WriteFailurePolicy::Abort => None,
        };

        let output = f(&mut users)?;

        if let Err(err) = self.persist(&users).await {
            match snapshot {
                None => {
                    error!("{:#}; shutting down", err);
                    std::process::exit(1);
                },
                Some(previous) => {
                    error!("{:#}; change rolled back", err);
                    *users = previous;
                    return Err(ServerError::Unavailable(SAVE_FAILED_MESSAGE.to_string()));
                }
            }
        }
        info!("persisted {} users", users.len());
        return Ok(output);
    }

    /// Save a copy of `users` on the blocking thread pool. The caller
    /// still holds the lock.
    async fn persist(&self, users: &Store) -> anyhow::Result<()> {
        let backend = Arc::clone(&self.backend);
        let users = users.clone();
        tokio::task::spawn_blocking(move || backend.save(&users))
            .await
            .with_context(|| "save task did not complete")??;
        return Ok(());
    }
}
