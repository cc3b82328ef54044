//! JSON envelope dispatch.

use cqrs_bus::accounts::{self, AccountBus, AccountCommand, CreateAccount};
use cqrs_bus::{BusError, RequestEnvelope, RequestKind, Response};
use serde_json::json;

#[test]
fn command_envelope_dispatches_to_handler() {
    let bus = accounts::bus();
    let response = bus.dispatch_json(&RequestEnvelope::command(json!({
        "type": "DepositMoney",
        "account_id": "a1",
        "amount": 50.0,
    })));

    assert_eq!(response.status, 200);
    assert!(response.is_success());
    assert_eq!(response.body, json!({ "account_id": "a1", "balance": 50.0 }));
}

#[test]
fn query_envelope_dispatches_to_handler() {
    let bus = accounts::bus();
    let response = bus.dispatch_json(&RequestEnvelope::query(json!({
        "type": "GetAccountBalance",
        "account_id": "a1",
    })));

    assert_eq!(
        response,
        Response::ok(json!({ "account_id": "a1", "balance": 100.0 }))
    );
}

#[test]
fn envelope_decodes_from_wire_form() {
    let envelope: RequestEnvelope = serde_json::from_value(json!({
        "kind": "command",
        "payload": { "type": "WithdrawMoney", "account_id": "a1", "amount": 30.0 },
    }))
    .unwrap();
    assert_eq!(envelope.kind, RequestKind::Command);

    let response = accounts::bus().dispatch_json(&envelope);
    assert_eq!(response.body, json!({ "account_id": "a1", "balance": -30.0 }));
}

#[test]
fn unknown_type_is_a_decode_failure() {
    let bus = accounts::bus();
    let response = bus.dispatch_json(&RequestEnvelope::command(json!({
        "type": "CloseAccount",
        "account_id": "a1",
    })));

    assert_eq!(response.status, 400);
    assert!(!response.is_success());
    let message = response.body["error"].as_str().unwrap();
    assert!(message.starts_with("decode failed"), "{}", message);
}

#[test]
fn query_payload_is_not_decoded_as_command() {
    let bus = accounts::bus();
    let response = bus.dispatch_json(&RequestEnvelope::command(json!({
        "type": "GetAccountBalance",
        "account_id": "a1",
    })));

    assert_eq!(response.status, 400);
}

#[test]
fn missing_handler_is_not_found() {
    let bus = AccountBus::new();
    let response = bus.dispatch_json(&RequestEnvelope::command(json!({
        "type": "CreateAccount",
        "account_id": "a1",
    })));

    assert_eq!(
        response,
        Response::error(404, "no handler registered for command: CreateAccount")
    );
}

#[test]
fn handler_error_keeps_its_status() {
    let bus = AccountBus::new().command::<CreateAccount, _>(|cmd: &CreateAccount| {
        Err(BusError::Rejected(format!("{} already exists", cmd.account_id)))
    });

    let response = bus.dispatch_json(&RequestEnvelope::command(json!({
        "type": "CreateAccount",
        "account_id": "a1",
    })));

    assert_eq!(response.status, 422);
    assert_eq!(response.body, json!({ "error": "rejected: a1 already exists" }));
}

#[test]
fn commands_serialize_with_type_tag() {
    let cmd: AccountCommand = CreateAccount::new("a1").into();
    assert_eq!(
        serde_json::to_value(&cmd).unwrap(),
        json!({ "type": "CreateAccount", "account_id": "a1" })
    );
}
