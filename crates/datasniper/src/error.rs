use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Errors surfaced to HTTP clients as `{"error": ...}`.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Query is missing")]
    MissingQuery,

    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    Internal(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::MissingQuery | Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Error::Upstream(_) | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}
