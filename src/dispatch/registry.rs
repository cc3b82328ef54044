//! One half of the bus: a tag → handler map plus lookup-and-invoke.

use std::collections::HashMap;
use std::fmt;

use super::error::HandlerNotFound;
use super::handler::{BoxedHandler, Handler};
use super::request::Request;

/// Maps each tag of the request family `R` to at most one handler.
///
/// All handlers in one registry share the output type `O` and error type
/// `E`. Registering a tag that is already bound replaces the old handler.
pub struct Registry<R: Request, O, E> {
    handlers: HashMap<R::Tag, BoxedHandler<R, O, E>>,
}

impl<R, O, E> Registry<R, O, E>
where
    R: Request,
    E: From<HandlerNotFound>,
{
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Bind `tag` to `handler`, returning `true` if an earlier handler was
    /// replaced.
    pub fn register<H>(&mut self, tag: R::Tag, handler: H) -> bool
    where
        H: Handler<R, Output = O, Error = E> + 'static,
    {
        let replaced = self.handlers.insert(tag, Box::new(handler)).is_some();
        tracing::debug!(kind = %R::KIND, %tag, replaced, "registered handler");
        replaced
    }

    /// Route `request` to the handler bound to its own tag.
    ///
    /// The handler's result comes back untouched, errors included. A miss
    /// is the only error produced here.
    pub fn execute(&self, request: &R) -> Result<O, E> {
        let tag = request.tag();
        let Some(handler) = self.handlers.get(&tag) else {
            tracing::debug!(kind = %R::KIND, %tag, "no handler registered");
            return Err(HandlerNotFound::new(R::KIND, tag).into());
        };
        tracing::debug!(kind = %R::KIND, %tag, "dispatching");
        handler.handle(request)
    }

    pub fn contains(&self, tag: R::Tag) -> bool {
        self.handlers.contains_key(&tag)
    }

    /// Registered tags, in no particular order.
    pub fn tags(&self) -> Vec<R::Tag> {
        self.handlers.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<R, O, E> Default for Registry<R, O, E>
where
    R: Request,
    E: From<HandlerNotFound>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Request, O, E> fmt::Debug for Registry<R, O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("kind", &R::KIND)
            .field("tags", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}
