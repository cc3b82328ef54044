//! In-process command/query bus.
//!
//! Requests come in two closed families, commands and queries, each an
//! enum whose variants carry the request payload. A [`Bus`] maps the tag
//! of each variant to exactly one handler and routes every request by the
//! tag of the variant it actually is.
//!
//! ```ignore
//! use cqrs_bus::accounts::{self, AccountCommand, AccountQuery, DepositMoney, GetAccountBalance};
//!
//! let bus = accounts::bus();
//!
//! let deposited = bus.execute_command(&DepositMoney::new("a1", 50.0).into())?;
//! let balance = bus.execute_query(&GetAccountBalance::new("a1").into())?;
//! ```

pub mod accounts;
pub mod dispatch;

pub use dispatch::{
    Bus, BusError, Handler, HandlerNotFound, Registry, Request, RequestKind, StatusCode, Variant,
};
#[cfg(feature = "json")]
pub use dispatch::{RequestEnvelope, Response};
