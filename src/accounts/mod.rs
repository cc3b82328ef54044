//! Accounts — a stub command/query domain wired through the bus.
//!
//! Three commands (`CreateAccount`, `DepositMoney`, `WithdrawMoney`) and
//! one query (`GetAccountBalance`). The handlers keep no state: each one
//! answers from its own input, and the balance query always reports
//! `100.0`.
//!
//! ```ignore
//! use cqrs_bus::accounts::{self, AccountCommand, DepositMoney};
//!
//! let bus = accounts::bus();
//! let cmd: AccountCommand = DepositMoney::new("a1", 50.0).into();
//! let balance = bus.execute_command(&cmd)?;
//! assert_eq!(balance.balance, 50.0);
//! ```

/// Implements `From<Payload>` and `Variant<Family>` for each payload struct
/// carried by a family enum. Variant and payload share a name.
macro_rules! variants {
    ($family:ident, $kind:ident { $($variant:ident),+ $(,)? }) => {
        $(
            impl From<$variant> for $family {
                fn from(payload: $variant) -> Self {
                    $family::$variant(payload)
                }
            }

            impl $crate::dispatch::Variant<$family> for $variant {
                const TAG: $kind = $kind::$variant;

                #[allow(unreachable_patterns)]
                fn extract(request: &$family) -> Option<&Self> {
                    match request {
                        $family::$variant(payload) => Some(payload),
                        _ => None,
                    }
                }
            }
        )+
    };
}

mod commands;
mod handlers;
mod queries;

pub use commands::{AccountCommand, CommandKind, CreateAccount, DepositMoney, WithdrawMoney};
pub use handlers::{
    AccountBalance, CreateAccountHandler, DepositMoneyHandler, GetAccountBalanceHandler,
    WithdrawMoneyHandler, REPORTED_BALANCE,
};
pub use queries::{AccountQuery, GetAccountBalance, QueryKind};

use crate::dispatch::{Bus, BusError};

/// The bus type the accounts domain runs on.
pub type AccountBus = Bus<AccountCommand, AccountQuery, AccountBalance, BusError>;

/// Bind every accounts handler on `bus`, replacing earlier bindings.
pub fn register(bus: &mut AccountBus) {
    bus.register_command::<CreateAccount, _>(CreateAccountHandler);
    bus.register_command::<DepositMoney, _>(DepositMoneyHandler);
    bus.register_command::<WithdrawMoney, _>(WithdrawMoneyHandler);
    bus.register_query::<GetAccountBalance, _>(GetAccountBalanceHandler);
}

/// A new bus with every accounts handler registered.
pub fn bus() -> AccountBus {
    let mut bus = AccountBus::new();
    register(&mut bus);
    bus
}
