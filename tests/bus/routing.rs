//! Routing: requests reach the handler bound to their own variant.

use cqrs_bus::accounts::{
    AccountBus, AccountBalance, AccountCommand, AccountQuery, CommandKind, CreateAccount,
    DepositMoney, DepositMoneyHandler, GetAccountBalance, QueryKind, WithdrawMoney,
};
use cqrs_bus::{BusError, Handler, Request};

use crate::support::{LedgerBus, LedgerCommand, LedgerQuery};

// ============================================================================
// Dynamic variant routing
// ============================================================================

#[test]
fn family_handle_routes_by_variant() {
    let bus = AccountBus::new()
        .command::<CreateAccount, _>(|cmd: &CreateAccount| {
            Ok(AccountBalance::new(&cmd.account_id, 0.0))
        })
        .command::<DepositMoney, _>(DepositMoneyHandler);

    // Held through the family type, not the payload type.
    let commands: Vec<AccountCommand> = vec![
        DepositMoney::new("a1", 12.5).into(),
        CreateAccount::new("a2").into(),
    ];

    let results: Vec<AccountBalance> = commands
        .iter()
        .map(|cmd| bus.execute_command(cmd).unwrap())
        .collect();

    assert_eq!(
        results,
        vec![AccountBalance::new("a1", 12.5), AccountBalance::new("a2", 0.0)]
    );
}

#[test]
fn untyped_registration_sees_whole_command() {
    let mut bus = AccountBus::new();
    bus.register_command_handler(CommandKind::WithdrawMoney, |cmd: &AccountCommand| {
        match cmd {
            AccountCommand::WithdrawMoney(w) => Ok(AccountBalance::new(&w.account_id, w.amount)),
            other => Err(BusError::Rejected(format!("unexpected {}", other.tag()))),
        }
    });

    let cmd: AccountCommand = WithdrawMoney::new("a1", 7.0).into();
    assert_eq!(
        bus.execute_command(&cmd).unwrap(),
        AccountBalance::new("a1", 7.0)
    );
}

#[test]
fn bus_returns_exactly_what_handler_returns() {
    let bus = AccountBus::new().command::<DepositMoney, _>(DepositMoneyHandler);

    let payload = DepositMoney::new("a1", 99.0);
    let direct = DepositMoneyHandler.handle(&payload).unwrap();
    let routed = bus.execute_command(&payload.clone().into()).unwrap();

    assert_eq!(routed, direct);
}

#[test]
fn request_tags_follow_variant() {
    let cmd: AccountCommand = DepositMoney::new("a1", 1.0).into();
    assert_eq!(cmd.tag(), CommandKind::DepositMoney);
    assert_eq!(cmd.tag().to_string(), "DepositMoney");

    let query: AccountQuery = GetAccountBalance::new("a1").into();
    assert_eq!(query.tag(), QueryKind::GetAccountBalance);
}

// ============================================================================
// Namespace independence
// ============================================================================

#[test]
fn command_binding_does_not_answer_query_with_same_tag() {
    let mut bus = LedgerBus::new();
    bus.register_command_handler("Audit", |_: &LedgerCommand| Ok("command audit".to_string()));

    assert_eq!(
        bus.execute_command(&LedgerCommand::Audit).unwrap(),
        "command audit"
    );
    assert!(bus.execute_query(&LedgerQuery::Audit).is_err());

    bus.register_query_handler("Audit", |_: &LedgerQuery| Ok("query audit".to_string()));
    assert_eq!(bus.execute_query(&LedgerQuery::Audit).unwrap(), "query audit");
    assert_eq!(
        bus.execute_command(&LedgerCommand::Audit).unwrap(),
        "command audit"
    );
}
