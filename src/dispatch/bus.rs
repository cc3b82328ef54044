//! The bus: command and query registration and dispatch.
//!
//! `Bus<C, Q, O, E>` is two independent [`Registry`] halves: one keyed by
//! the command family's tags, one by the query family's. A command and a
//! query never see each other's handlers, even if their tags print the
//! same.
//!
//! ## Example
//!
//! ```ignore
//! use cqrs_bus::accounts::{AccountBus, AccountCommand, CreateAccount, DepositMoney};
//!
//! let bus = AccountBus::new()
//!     .command::<CreateAccount, _>(CreateAccountHandler)
//!     .command::<DepositMoney, _>(|cmd: &DepositMoney| {
//!         Ok(AccountBalance::new(&cmd.account_id, cmd.amount))
//!     });
//!
//! let cmd: AccountCommand = DepositMoney::new("a1", 50.0).into();
//! let balance = bus.execute_command(&cmd)?;
//! ```

use std::fmt;

use super::error::HandlerNotFound;
use super::handler::{Handler, VariantHandler};
use super::registry::Registry;
use super::request::{Request, Variant};

/// Routes commands of family `C` and queries of family `Q` to their
/// handlers.
///
/// Registration takes `&mut self` and execution takes `&self`: register
/// everything first, then share the bus (behind an `Arc` if it crosses
/// threads).
pub struct Bus<C: Request, Q: Request, O, E> {
    commands: Registry<C, O, E>,
    queries: Registry<Q, O, E>,
}

impl<C, Q, O, E> Bus<C, Q, O, E>
where
    C: Request,
    Q: Request,
    E: From<HandlerNotFound>,
{
    pub fn new() -> Self {
        Self {
            commands: Registry::new(),
            queries: Registry::new(),
        }
    }

    /// Bind a command tag to a handler that receives the whole command.
    ///
    /// Replaces any handler already bound to `tag`.
    pub fn register_command_handler<H>(&mut self, tag: C::Tag, handler: H)
    where
        H: Handler<C, Output = O, Error = E> + 'static,
    {
        self.commands.register(tag, handler);
    }

    /// Bind a query tag to a handler that receives the whole query.
    ///
    /// Replaces any handler already bound to `tag`.
    pub fn register_query_handler<H>(&mut self, tag: Q::Tag, handler: H)
    where
        H: Handler<Q, Output = O, Error = E> + 'static,
    {
        self.queries.register(tag, handler);
    }

    /// Register a handler for the command payload `V`.
    ///
    /// The tag comes from `V`, and the handler gets `&V` instead of the
    /// enclosing command. Replaces any handler already bound to `V::TAG`.
    pub fn register_command<V, H>(&mut self, handler: H)
    where
        V: Variant<C> + 'static,
        H: Handler<V, Output = O, Error = E> + 'static,
    {
        self.commands
            .register(V::TAG, VariantHandler::<V, H>::new(handler));
    }

    /// Register a handler for the query payload `V`.
    /// See [`Bus::register_command`].
    pub fn register_query<V, H>(&mut self, handler: H)
    where
        V: Variant<Q> + 'static,
        H: Handler<V, Output = O, Error = E> + 'static,
    {
        self.queries
            .register(V::TAG, VariantHandler::<V, H>::new(handler));
    }

    /// Builder form of [`Bus::register_command`].
    ///
    /// Returns `self` for chaining.
    pub fn command<V, H>(mut self, handler: H) -> Self
    where
        V: Variant<C> + 'static,
        H: Handler<V, Output = O, Error = E> + 'static,
    {
        self.register_command::<V, H>(handler);
        self
    }

    /// Builder form of [`Bus::register_query`].
    pub fn query<V, H>(mut self, handler: H) -> Self
    where
        V: Variant<Q> + 'static,
        H: Handler<V, Output = O, Error = E> + 'static,
    {
        self.register_query::<V, H>(handler);
        self
    }

    /// Dispatch a command to the handler bound to its variant.
    ///
    /// Returns whatever the handler returns. Fails with
    /// `HandlerNotFound` (converted into `E`) if nothing is bound.
    pub fn execute_command(&self, command: &C) -> Result<O, E> {
        self.commands.execute(command)
    }

    /// Dispatch a query to the handler bound to its variant.
    pub fn execute_query(&self, query: &Q) -> Result<O, E> {
        self.queries.execute(query)
    }

    pub fn has_command_handler(&self, tag: C::Tag) -> bool {
        self.commands.contains(tag)
    }

    pub fn has_query_handler(&self, tag: Q::Tag) -> bool {
        self.queries.contains(tag)
    }

    /// List registered command tags.
    pub fn command_tags(&self) -> Vec<C::Tag> {
        self.commands.tags()
    }

    /// List registered query tags.
    pub fn query_tags(&self) -> Vec<Q::Tag> {
        self.queries.tags()
    }
}

impl<C, Q, O, E> Default for Bus<C, Q, O, E>
where
    C: Request,
    Q: Request,
    E: From<HandlerNotFound>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Request, Q: Request, O, E> fmt::Debug for Bus<C, Q, O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bus")
            .field("commands", &self.commands)
            .field("queries", &self.queries)
            .finish()
    }
}
