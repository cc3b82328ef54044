//! JSON envelope dispatch.
//!
//! Decodes a [`RequestEnvelope`] into the bus's command or query family,
//! executes it, and folds the outcome into a [`Response`] with an
//! HTTP-style status code. Families are expected to deserialize from an
//! internally tagged payload (`#[serde(tag = "type")]`):
//!
//! ```json
//! { "kind": "command", "payload": { "type": "DepositMoney", "account_id": "a1", "amount": 50.0 } }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::bus::Bus;
use super::error::{HandlerNotFound, StatusCode};
use super::request::{Request, RequestKind};

/// A command or query in JSON form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestEnvelope {
    /// Which half of the bus to route to.
    pub kind: RequestKind,
    /// The request itself, including its `"type"` tag.
    pub payload: Value,
}

impl RequestEnvelope {
    pub fn command(payload: Value) -> Self {
        Self {
            kind: RequestKind::Command,
            payload,
        }
    }

    pub fn query(payload: Value) -> Self {
        Self {
            kind: RequestKind::Query,
            payload,
        }
    }
}

/// Result of dispatching an envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// HTTP-style status code.
    pub status: u16,
    /// Handler output on success, `{"error": ..}` otherwise.
    pub body: Value,
}

impl Response {
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    pub fn error(status: u16, message: impl ToString) -> Self {
        Self {
            status,
            body: json!({ "error": message.to_string() }),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl<C, Q, O, E> Bus<C, Q, O, E>
where
    C: Request + DeserializeOwned,
    Q: Request + DeserializeOwned,
    O: Serialize,
    E: From<HandlerNotFound> + StatusCode + std::fmt::Display,
{
    /// Decode, dispatch and encode in one step.
    ///
    /// Undecodable payloads are answered with 400 before the bus is
    /// consulted; handler errors keep their own status code.
    pub fn dispatch_json(&self, envelope: &RequestEnvelope) -> Response {
        let outcome = match envelope.kind {
            RequestKind::Command => match C::deserialize(&envelope.payload) {
                Ok(command) => self.execute_command(&command),
                Err(e) => return decode_failed(envelope.kind, e),
            },
            RequestKind::Query => match Q::deserialize(&envelope.payload) {
                Ok(query) => self.execute_query(&query),
                Err(e) => return decode_failed(envelope.kind, e),
            },
        };

        match outcome {
            Ok(output) => match serde_json::to_value(output) {
                Ok(body) => Response::ok(body),
                Err(e) => Response::error(500, format!("encode failed: {}", e)),
            },
            Err(e) => Response::error(e.status_code(), e),
        }
    }
}

fn decode_failed(kind: RequestKind, err: serde_json::Error) -> Response {
    tracing::debug!(%kind, error = %err, "rejecting undecodable request");
    Response::error(400, format!("decode failed: {}", err))
}
