//! Typed failures for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. Pages map an [`ApiError`] to an inline message via
//! [`ApiError::user_message`], preferring the backend's `detail` string.
//! Authentication failures additionally clear credentials at the call site.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Message shown when nothing more specific is available.
pub const GENERIC_MESSAGE: &str = "An error has occurred. Please try again later.";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    #[error("unauthorized")]
    Unauthorized { detail: Option<String> },
    #[error("too many requests")]
    RateLimited,
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("could not decode response: {0}")]
    Decode(String),
    /// Rejected before any request was sent.
    #[error("{0}")]
    Validation(String),
    /// Only reachable when rendering on the server.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-2xx response.
    pub fn from_status(status: u16, detail: Option<String>) -> Self {
        match status {
            401 => Self::Unauthorized { detail },
            429 => Self::RateLimited,
            _ => Self::Status { status, detail },
        }
    }

    /// HTTP status, when the failure came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::RateLimited => Some(429),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { detail } | Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Text for an inline error line.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            _ => self.detail().map_or_else(|| GENERIC_MESSAGE.to_owned(), str::to_owned),
        }
    }
}

/// Pull a `detail` message out of a FastAPI-style error body.
///
/// Validation errors arrive as a list of objects with `msg` fields; those
/// are joined with `"; "`.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .collect();
            if msgs.is_empty() { None } else { Some(msgs.join("; ")) }
        }
        _ => None,
    }
}
