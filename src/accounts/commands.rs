//! Account commands.

use std::fmt;

use crate::dispatch::{Request, RequestKind};

/// Open a new account.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateAccount {
    pub account_id: String,
}

impl CreateAccount {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
        }
    }
}

/// Put money into an account.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct DepositMoney {
    pub account_id: String,
    pub amount: f64,
}

impl DepositMoney {
    pub fn new(account_id: impl Into<String>, amount: f64) -> Self {
        Self {
            account_id: account_id.into(),
            amount,
        }
    }
}

/// Take money out of an account.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct WithdrawMoney {
    pub account_id: String,
    pub amount: f64,
}

impl WithdrawMoney {
    pub fn new(account_id: impl Into<String>, amount: f64) -> Self {
        Self {
            account_id: account_id.into(),
            amount,
        }
    }
}

/// Every command the accounts domain accepts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(tag = "type"))]
pub enum AccountCommand {
    CreateAccount(CreateAccount),
    DepositMoney(DepositMoney),
    WithdrawMoney(WithdrawMoney),
}

impl AccountCommand {
    /// Account the command targets.
    pub fn account_id(&self) -> &str {
        match self {
            AccountCommand::CreateAccount(c) => &c.account_id,
            AccountCommand::DepositMoney(c) => &c.account_id,
            AccountCommand::WithdrawMoney(c) => &c.account_id,
        }
    }
}

/// Routing tag of an [`AccountCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    CreateAccount,
    DepositMoney,
    WithdrawMoney,
}

impl CommandKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::CreateAccount => "CreateAccount",
            CommandKind::DepositMoney => "DepositMoney",
            CommandKind::WithdrawMoney => "WithdrawMoney",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Request for AccountCommand {
    type Tag = CommandKind;
    const KIND: RequestKind = RequestKind::Command;

    fn tag(&self) -> CommandKind {
        match self {
            AccountCommand::CreateAccount(_) => CommandKind::CreateAccount,
            AccountCommand::DepositMoney(_) => CommandKind::DepositMoney,
            AccountCommand::WithdrawMoney(_) => CommandKind::WithdrawMoney,
        }
    }
}

variants!(AccountCommand, CommandKind {
    CreateAccount,
    DepositMoney,
    WithdrawMoney,
});
