use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

pub const INVALID_CARD_TYPE: &str = "Invalid card_type. Use 'flashcard' or 'quiz'.";
pub const INVALID_JSON: &str = "AI did not return valid JSON";

/// Every way a request (or the process itself) can fail.
///
/// Each variant maps to exactly one HTTP status in `IntoResponse`; the body is
/// always `{"detail": <Display of the variant>}`.
#[derive(Error, Debug)]
pub enum Error {
    // startup only, never reaches a handler
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{message}")]
    Validation { status: StatusCode, message: String },

    #[error("{}", INVALID_CARD_TYPE)]
    InvalidCardType,

    #[error("{0}")]
    Provider(String),

    #[error("{}", INVALID_JSON)]
    InvalidJson(#[source] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Validation { status, .. } => *status,
            Error::InvalidCardType => StatusCode::BAD_REQUEST,
            Error::Config(_) | Error::Provider(_) | Error::InvalidJson(_) | Error::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

// Body rejections keep the extractor's status (400/415/422) but use our body shape
impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::Validation {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Provider(err.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
