//! Account handlers.
//!
//! None of these touch storage. Deposit reports the deposited amount as
//! the balance, withdraw reports its negation, and the balance query is
//! fixed at `100.0` whatever commands ran before it.

use crate::dispatch::{BusError, Handler};

use super::commands::{CreateAccount, DepositMoney, WithdrawMoney};
use super::queries::GetAccountBalance;

/// Balance reported back by every accounts handler.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct AccountBalance {
    pub account_id: String,
    pub balance: f64,
}

impl AccountBalance {
    pub fn new(account_id: impl Into<String>, balance: f64) -> Self {
        Self {
            account_id: account_id.into(),
            balance,
        }
    }
}

/// Balance the query side reports for any account.
pub const REPORTED_BALANCE: f64 = 100.0;

#[derive(Debug, Default, Clone, Copy)]
pub struct CreateAccountHandler;

impl Handler<CreateAccount> for CreateAccountHandler {
    type Output = AccountBalance;
    type Error = BusError;

    fn handle(&self, cmd: &CreateAccount) -> Result<AccountBalance, BusError> {
        Ok(AccountBalance::new(&cmd.account_id, 0.0))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DepositMoneyHandler;

impl Handler<DepositMoney> for DepositMoneyHandler {
    type Output = AccountBalance;
    type Error = BusError;

    fn handle(&self, cmd: &DepositMoney) -> Result<AccountBalance, BusError> {
        Ok(AccountBalance::new(&cmd.account_id, cmd.amount))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct WithdrawMoneyHandler;

impl Handler<WithdrawMoney> for WithdrawMoneyHandler {
    type Output = AccountBalance;
    type Error = BusError;

    fn handle(&self, cmd: &WithdrawMoney) -> Result<AccountBalance, BusError> {
        Ok(AccountBalance::new(&cmd.account_id, -cmd.amount))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct GetAccountBalanceHandler;

impl Handler<GetAccountBalance> for GetAccountBalanceHandler {
    type Output = AccountBalance;
    type Error = BusError;

    fn handle(&self, query: &GetAccountBalance) -> Result<AccountBalance, BusError> {
        Ok(AccountBalance::new(&query.account_id, REPORTED_BALANCE))
    }
}
