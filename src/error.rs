//! Error type shared by every widget.

use thiserror::Error;

/// Which stage of a widget call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never produced a response (DNS, connect, timeout, body read).
    Transport,
    /// The ChainBridge API answered with a non-2xx status.
    Upstream,
    /// The response body did not have the expected JSON shape.
    Decode,
    /// Tool input was rejected before any outbound call.
    Validation,
    /// Local computation failed.
    Internal,
}

/// Error produced by a widget call.
///
/// Every failure is surfaced to the host as a single text message, so the
/// message carries the operational detail (status codes, body text) directly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct WidgetError {
    pub kind: ErrorKind,
    pub status: Option<u16>,
    pub message: String,
}

impl WidgetError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            status: None,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Upstream,
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Decode, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl From<reqwest::Error> for WidgetError {
    fn from(err: reqwest::Error) -> Self {
        let mut error = WidgetError::transport(err.to_string());
        error.status = err.status().map(|s| s.as_u16());
        error
    }
}

impl From<serde_json::Error> for WidgetError {
    fn from(err: serde_json::Error) -> Self {
        WidgetError::decode(format!("invalid JSON in response: {}", err))
    }
}
