//! Command/query registration and routing.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     Bus<C, Q, O, E>                       │
//! │  register_command_handler / register_query_handler        │
//! │  execute_command / execute_query                          │
//! └──────────────────────────────────────────────────────────┘
//!               │                             │
//!               ▼                             ▼
//! ┌───────────────────────────┐ ┌───────────────────────────┐
//! │ Registry<C>: C::Tag → H   │ │ Registry<Q>: Q::Tag → H   │
//! └───────────────────────────┘ └───────────────────────────┘
//! ```
//!
//! A request is routed by the tag of its own variant (`Request::tag`), so
//! a `DepositMoney` held as the family enum still reaches the
//! `DepositMoney` handler. A miss yields [`HandlerNotFound`]; everything a
//! handler returns, errors included, passes through untouched.

mod bus;
mod error;
mod handler;
#[cfg(feature = "json")]
mod json;
mod registry;
mod request;

pub use bus::Bus;
pub use error::{BusError, HandlerNotFound, StatusCode};
pub use handler::Handler;
#[cfg(feature = "json")]
pub use json::{RequestEnvelope, Response};
pub use registry::Registry;
pub use request::{Request, RequestKind, Variant};
