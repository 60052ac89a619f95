use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Data load error: {0}")]
    DataLoad(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Empty vocabulary: no document produced a term")]
    EmptyVocabulary,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this error means the recipe catalog could not be loaded
    pub fn is_data_load(&self) -> bool {
        matches!(self, Error::DataLoad(_) | Error::Io(_))
    }

    /// Get a sanitized error message safe for logging
    /// Filters out file system details
    pub fn log_safe(&self) -> String {
        match self {
            // IO errors can carry absolute paths
            Error::Io(_) => "File system operation failed".to_string(),

            Error::DataLoad(msg) => format!("Data load error: {msg}"),
            Error::InvalidInput(msg) => format!("Invalid input: {msg}"),
            Error::EmptyVocabulary => "Empty vocabulary".to_string(),
            Error::Config(msg) => format!("Configuration error: {msg}"),
            Error::NotFound(msg) => format!("Not found: {msg}"),
            Error::Internal(msg) => format!("Internal error: {msg}"),
        }
    }
}

// Implement IntoResponse for API error handling
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("Request error: {}", self.log_safe());

        let (status, error_message) = match &self {
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Error::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
