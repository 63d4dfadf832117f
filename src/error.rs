use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// A request the server understood and refused, with a message that is safe
/// to show to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not signed in")]
    Unauthenticated,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    pub fn is_app_error(&self) -> bool {
        matches!(self, ClientError::App(_))
    }

    pub fn as_app_error(&self) -> Option<&AppError> {
        match self {
            ClientError::App(e) => Some(e),
            _ => None,
        }
    }

    /// Text to put in front of the user. Server and validation messages pass
    /// through; everything else collapses to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::App(e) => e.message.clone(),
            ClientError::Validation(msg) => msg.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Pulls the `message` out of a `{ "message": "..." }` error body. Only a
/// JSON object qualifies; arrays and scalars yield `None`.
pub fn app_message(body: &[u8]) -> Option<String> {
    let payload: Value = serde_json::from_slice(body).ok()?;
    payload
        .as_object()?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

/// Turns a failed response into one of the two caller-facing kinds. Bodies
/// that don't carry a string `message` keep the original transport error.
pub(crate) fn classify(status: StatusCode, body: &[u8], transport: reqwest::Error) -> ClientError {
    match app_message(body) {
        Some(message) => AppError { status, message }.into(),
        None => ClientError::Transport(transport),
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
