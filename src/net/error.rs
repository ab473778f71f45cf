//! Failure taxonomy for remote API calls.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status, and shape failures are kept distinct so logs say what
//! went wrong, but pages treat all three the same way: log, surface an inline
//! message, keep prior state.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by every `net::api` call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network request failed: {0}")]
    Transport(String),
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response shape: {0}")]
    Shape(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Build a status error, keeping the response text when the server sent one.
    pub fn status(status: u16, body: &str) -> Self {
        let body = body.trim();
        let message = if body.is_empty() { format!("HTTP {status}") } else { body.to_owned() };
        Self::Status { status, message }
    }

    /// Message suitable for inline display.
    ///
    /// Status errors show the server's text; everything else collapses to
    /// `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message, .. } if !message.starts_with("HTTP ") => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Shape(err.to_string())
    }
}
