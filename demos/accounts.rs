//! Walks one account through the bus: create, deposit, withdraw, then
//! read the balance back.
//!
//! Run with `RUST_LOG=cqrs_bus=debug cargo run --example accounts` to see
//! the dispatch trace.

use cqrs_bus::accounts::{
    self, AccountCommand, AccountQuery, CreateAccount, DepositMoney, GetAccountBalance,
    WithdrawMoney,
};
use cqrs_bus::BusError;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

fn main() -> Result<(), BusError> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let bus = accounts::bus();
    let account_id = Uuid::new_v4().to_string();

    let command: AccountCommand = CreateAccount::new(&account_id).into();
    let result = bus.execute_command(&command)?;
    println!("Created account with ID: {}", result.account_id);

    let command: AccountCommand = DepositMoney::new(&account_id, 50.0).into();
    let result = bus.execute_command(&command)?;
    println!("Deposited $50.0 into account {}", result.account_id);

    let command: AccountCommand = WithdrawMoney::new(&account_id, 30.0).into();
    let result = bus.execute_command(&command)?;
    println!("Withdrew $30.0 from account {}", result.account_id);

    let query: AccountQuery = GetAccountBalance::new(&account_id).into();
    let result = bus.execute_query(&query)?;
    println!("Account {} balance: ${:.1}", result.account_id, result.balance);

    Ok(())
}
