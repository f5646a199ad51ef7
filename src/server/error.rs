use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use anyhow;

pub const INVALID_PARAMETER: &str = "Invalid parameter";
pub const NO_MATCHES: &str = "No matches";

#[derive(Debug)]
pub enum ServerError {
    BadRequest(String),
    NotFound(String),
    /// A known server-side condition reported with its own message.
    Unavailable(String),
    InternalError(anyhow::Error)
}

impl ServerError {
    pub fn invalid_parameter() -> Self {
        Self::BadRequest(INVALID_PARAMETER.to_string())
    }

    pub fn no_matches() -> Self {
        Self::NotFound(NO_MATCHES.to_string())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        // bodies are bare JSON strings
        match self {
            Self::BadRequest(msg) =>
                (StatusCode::BAD_REQUEST, Json(msg)).into_response(),
            Self::NotFound(msg) =>
                (StatusCode::NOT_FOUND, Json(msg)).into_response(),
            Self::Unavailable(msg) =>
                (StatusCode::INTERNAL_SERVER_ERROR, Json(msg)).into_response(),
            Self::InternalError(err) =>
                (StatusCode::INTERNAL_SERVER_ERROR, Json(format!("Internal error: {}", err))).into_response()
        }
    }
}

impl<E> From<E> for ServerError
where
    E: Into<anyhow::Error>
{
    fn from(err: E) -> Self {
        Self::InternalError(err.into())
    }
}
