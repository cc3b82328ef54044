//! Test domain: a small ledger family keyed by plain string tags.
//!
//! Both families have an `"Audit"` variant so the command and query
//! namespaces can be checked for independence.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use cqrs_bus::{Bus, HandlerNotFound, Request, RequestKind};

#[derive(Debug, Clone, PartialEq)]
pub enum LedgerCommand {
    Open { id: String },
    Deposit { id: String, amount: u64 },
    CloseAccount { id: String },
    Audit,
}

impl Request for LedgerCommand {
    type Tag = &'static str;
    const KIND: RequestKind = RequestKind::Command;

    fn tag(&self) -> &'static str {
        match self {
            LedgerCommand::Open { .. } => "Open",
            LedgerCommand::Deposit { .. } => "Deposit",
            LedgerCommand::CloseAccount { .. } => "CloseAccount",
            LedgerCommand::Audit => "Audit",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LedgerQuery {
    Statement { id: String },
    Audit,
}

impl Request for LedgerQuery {
    type Tag = &'static str;
    const KIND: RequestKind = RequestKind::Query;

    fn tag(&self) -> &'static str {
        match self {
            LedgerQuery::Statement { .. } => "Statement",
            LedgerQuery::Audit => "Audit",
        }
    }
}

/// Handler error that is not the crate's own, to check pass-through.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerError {
    Missing(HandlerNotFound),
    Overdrawn { requested: u64 },
}

impl From<HandlerNotFound> for LedgerError {
    fn from(err: HandlerNotFound) -> Self {
        LedgerError::Missing(err)
    }
}

pub type LedgerBus = Bus<LedgerCommand, LedgerQuery, String, LedgerError>;

/// Counts handler invocations across clones.
#[derive(Clone, Default)]
pub struct Calls(Arc<AtomicUsize>);

impl Calls {
    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}
