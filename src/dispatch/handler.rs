//! The handler capability.

use std::marker::PhantomData;

use super::error::HandlerNotFound;
use super::request::{Request, Variant};

/// Accepts a request and produces a result.
///
/// Implemented for plain closures `Fn(&Req) -> Result<O, E>`, so both
/// handler structs and inline closures can be registered:
///
/// ```ignore
/// struct CreateAccountHandler;
///
/// impl Handler<CreateAccount> for CreateAccountHandler {
///     type Output = AccountBalance;
///     type Error = BusError;
///
///     fn handle(&self, cmd: &CreateAccount) -> Result<AccountBalance, BusError> {
///         Ok(AccountBalance::new(&cmd.account_id, 0.0))
///     }
/// }
///
/// bus.register_command_handler(CommandKind::CreateAccount, |cmd: &AccountCommand| { .. });
/// ```
pub trait Handler<Req>: Send + Sync {
    type Output;
    type Error;

    fn handle(&self, request: &Req) -> Result<Self::Output, Self::Error>;
}

impl<Req, O, E, F> Handler<Req> for F
where
    F: Fn(&Req) -> Result<O, E> + Send + Sync,
{
    type Output = O;
    type Error = E;

    fn handle(&self, request: &Req) -> Result<O, E> {
        self(request)
    }
}

/// Type-erased handler as stored in a registry.
pub(crate) type BoxedHandler<R, O, E> = Box<dyn Handler<R, Output = O, Error = E>>;

/// Adapts a handler for one payload type `V` into a handler for the whole
/// family `R`, unpacking the variant before the call.
pub(crate) struct VariantHandler<V, H> {
    inner: H,
    _variant: PhantomData<fn(&V)>,
}

impl<V, H> VariantHandler<V, H> {
    pub(crate) fn new(inner: H) -> Self {
        Self {
            inner,
            _variant: PhantomData,
        }
    }
}

impl<R, V, H> Handler<R> for VariantHandler<V, H>
where
    R: Request,
    V: Variant<R>,
    H: Handler<V>,
    H::Error: From<HandlerNotFound>,
{
    type Output = H::Output;
    type Error = H::Error;

    fn handle(&self, request: &R) -> Result<H::Output, H::Error> {
        // Only reachable through V::TAG, so a mismatch means the Variant
        // impl disagrees with Request::tag.
        let payload = V::extract(request)
            .ok_or_else(|| HandlerNotFound::new(R::KIND, request.tag()))?;
        self.inner.handle(payload)
    }
}
