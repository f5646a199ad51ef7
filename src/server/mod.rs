//! HTTP surface: routes for the users collection and the serve loop.

mod config;
mod error;
mod handlers;
mod state;

use std::sync::Arc;

use anyhow::{self, Context};
use axum::{routing::get, Router};
use log::{error, info};
use tower_http::trace::TraceLayer;

use crate::backend::JsonStore;

pub use config::{ServerConfig, WriteFailurePolicy};
pub use error::ServerError;
pub use state::{AppState, SharedState, LOAD_FAILED_MESSAGE, SAVE_FAILED_MESSAGE};

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/users", get(handlers::list_users).post(handlers::create_user))
        .route("/users/:id", get(handlers::get_user)
            .put(handlers::update_user)
            .delete(handlers::delete_user))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn load_state(config: &ServerConfig) -> anyhow::Result<AppState> {
    let backend = JsonStore::new(&config.data_file);
    AppState::load(backend, config.on_write_failure).map_err(|err| {
        error!("refusing to start: {}", err);
        anyhow::Error::new(err).context("failed to load users")
    })
}

pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let state = load_state(&config)?;

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!("serving {} on {}", config.data_file.display(), config.bind);

    axum::serve(listener, router(Arc::new(state))).await
        .with_context(|| "server stopped unexpectedly")?;
    return Ok(());
}
