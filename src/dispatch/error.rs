//! Error types for the dispatch bus.

use std::error::Error;
use std::fmt;

use super::request::RequestKind;

/// Raised when a request's tag has no handler in its half of the bus.
///
/// This is the only error the bus itself produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerNotFound {
    pub kind: RequestKind,
    pub tag: String,
}

impl HandlerNotFound {
    pub fn new(kind: RequestKind, tag: impl fmt::Display) -> Self {
        Self {
            kind,
            tag: tag.to_string(),
        }
    }
}

impl fmt::Display for HandlerNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no handler registered for {}: {}", self.kind, self.tag)
    }
}

impl Error for HandlerNotFound {}

/// Stock error type for handlers that don't bring their own.
///
/// Any handler error type works with the bus as long as it implements
/// `From<HandlerNotFound>`; this one also carries the usual handler
/// failure shapes.
#[derive(Debug)]
pub enum BusError {
    /// No handler registered for the request's tag.
    HandlerNotFound(HandlerNotFound),
    /// Payload decode / deserialization failed.
    DecodeFailed(String),
    /// The handler refused the request.
    Rejected(String),
    /// Other error.
    Other(Box<dyn Error + Send + Sync>),
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusError::HandlerNotFound(e) => write!(f, "{}", e),
            BusError::DecodeFailed(msg) => write!(f, "decode failed: {}", msg),
            BusError::Rejected(msg) => write!(f, "rejected: {}", msg),
            BusError::Other(e) => write!(f, "handler error: {}", e),
        }
    }
}

impl Error for BusError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BusError::HandlerNotFound(e) => Some(e),
            BusError::Other(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<HandlerNotFound> for BusError {
    fn from(err: HandlerNotFound) -> Self {
        BusError::HandlerNotFound(err)
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for BusError {
    fn from(err: serde_json::Error) -> Self {
        BusError::DecodeFailed(err.to_string())
    }
}

/// Maps an error to an HTTP-style status code.
pub trait StatusCode {
    fn status_code(&self) -> u16;
}

impl StatusCode for HandlerNotFound {
    fn status_code(&self) -> u16 {
        404
    }
}

impl StatusCode for BusError {
    fn status_code(&self) -> u16 {
        match self {
            BusError::HandlerNotFound(_) => 404,
            BusError::DecodeFailed(_) => 400,
            BusError::Rejected(_) => 422,
            BusError::Other(_) => 500,
        }
    }
}
