//! Request families and their routing tags.
//!
//! A request family is a closed enum (one variant per concrete command or
//! query shape). Every family names a field-less discriminant type, its
//! `Tag`, which is the key the bus routes on.

use std::fmt;
use std::hash::Hash;

/// Which half of the bus a request family belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum RequestKind {
    Command,
    Query,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestKind::Command => write!(f, "command"),
            RequestKind::Query => write!(f, "query"),
        }
    }
}

/// A routable request family.
///
/// `tag()` must return the discriminant of the value's own variant, so a
/// request routes by what it is rather than by how the caller holds it.
///
/// ```ignore
/// impl Request for AccountCommand {
///     type Tag = CommandKind;
///     const KIND: RequestKind = RequestKind::Command;
///
///     fn tag(&self) -> CommandKind {
///         match self {
///             AccountCommand::CreateAccount(_) => CommandKind::CreateAccount,
///             // ...
///         }
///     }
/// }
/// ```
pub trait Request {
    /// Discriminant used as the registry key.
    type Tag: Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static;

    /// Command or query.
    const KIND: RequestKind;

    fn tag(&self) -> Self::Tag;
}

/// Ties one payload struct to the variant of `R` that carries it.
///
/// Lets handlers be registered against the payload type itself
/// (`bus.command::<DepositMoney>(..)`) and receive the payload already
/// unpacked.
pub trait Variant<R: Request>: Sized + Into<R> {
    /// Tag of the variant that wraps `Self`.
    const TAG: R::Tag;

    /// Borrow the payload if `request` is this variant.
    fn extract(request: &R) -> Option<&Self>;
}
