//! Account queries.

use std::fmt;

use crate::dispatch::{Request, RequestKind};

/// Read the balance of an account.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct GetAccountBalance {
    pub account_id: String,
}

impl GetAccountBalance {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
        }
    }
}

/// Every query the accounts domain answers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(tag = "type"))]
pub enum AccountQuery {
    GetAccountBalance(GetAccountBalance),
}

/// Routing tag of an [`AccountQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    GetAccountBalance,
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKind::GetAccountBalance => f.write_str("GetAccountBalance"),
        }
    }
}

impl Request for AccountQuery {
    type Tag = QueryKind;
    const KIND: RequestKind = RequestKind::Query;

    fn tag(&self) -> QueryKind {
        match self {
            AccountQuery::GetAccountBalance(_) => QueryKind::GetAccountBalance,
        }
    }
}

variants!(AccountQuery, QueryKind { GetAccountBalance });
