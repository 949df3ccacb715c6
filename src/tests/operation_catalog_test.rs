use crate::errors::Casino25Error;
use crate::operations::{self, methods, CATALOG};
use crate::param_validator::{ParamType, Params};
use serde_json::{json, Value};
use std::collections::HashSet;

fn params(value: Value) -> Params {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected an object"),
    }
}

/// A value of the right type for `ty`.
fn sample(ty: ParamType, allowed: Option<&[&str]>) -> Value {
    if let Some(allowed) = allowed {
        return json!(allowed[0]);
    }
    match ty {
        ParamType::String => json!("value"),
        ParamType::Integer => json!(100),
        ParamType::Timestamp => json!(1_700_000_000),
        ParamType::StringList => json!(["a", "b"]),
        ParamType::List => json!([{ "Type": "Activate" }]),
    }
}

/// The smallest parameter set each operation accepts.
fn required_only(operation: &operations::Operation) -> Params {
    operation
        .required_fields()
        .map(|field| (field.name.to_string(), sample(field.ty, field.allowed)))
        .collect()
}

#[test]
fn test_catalog_method_names_are_unique() {
    let names: HashSet<_> = CATALOG.iter().map(|op| op.method).collect();
    assert_eq!(names.len(), CATALOG.len());
    assert_eq!(CATALOG.len(), 20);
}

#[test]
fn test_find_by_method_name() {
    let op = operations::find("Session.CreateDemo").unwrap();
    assert_eq!(op.method, methods::SESSION_CREATE_DEMO);
    assert!(operations::find("session.createdemo").is_none());
    assert!(operations::find("Game.Delete").is_none());
}

#[test]
fn test_every_missing_required_field_is_reported() {
    for operation in CATALOG {
        let complete = required_only(operation);
        assert!(operation.validate(&complete).is_ok(), "{}", operation.method);

        for field in operation.required_fields() {
            let mut partial = complete.clone();
            partial.remove(field.name);

            let err = operation.validate(&partial).unwrap_err();
            assert!(
                matches!(err, Casino25Error::MissingParameter { field: ref name } if name == field.name),
                "{}: {err}",
                operation.method
            );
        }
    }
}

#[test]
fn test_string_fields_reject_integers_and_integer_fields_reject_strings() {
    for operation in CATALOG {
        for field in operation.fields {
            let wrong = match field.ty {
                ParamType::String => json!(42),
                ParamType::Integer => json!("42"),
                _ => continue,
            };

            let mut bad = required_only(operation);
            bad.insert(field.name.to_string(), wrong);

            let err = operation.validate(&bad).unwrap_err();
            assert!(
                matches!(err, Casino25Error::InvalidType { expected, .. } if expected == field.ty),
                "{}.{}: {err}",
                operation.method,
                field.name
            );
        }
    }
}

#[test]
fn test_unknown_fields_pass_through() {
    let mut p = required_only(&operations::CREATE_PLAYER);
    p.insert("Country".into(), json!(12));
    assert!(operations::CREATE_PLAYER.validate(&p).is_ok());
}

#[test]
fn test_restore_policy_values() {
    let op = operations::CREATE_SESSION;

    for policy in ["Restore", "Create", "Last"] {
        let p = params(json!({ "PlayerId": "p1", "GameId": "g1", "RestorePolicy": policy }));
        assert!(op.validate(&p).is_ok(), "{policy}");
    }

    let p = params(json!({ "PlayerId": "p1", "GameId": "g1", "RestorePolicy": "Invalid" }));
    assert!(matches!(
        op.validate(&p),
        Err(Casino25Error::InvalidValue { .. })
    ));
}

#[test]
fn test_session_status_is_case_sensitive() {
    let op = operations::LIST_SESSIONS;

    assert!(op.validate(&params(json!({ "Status": "Closed" }))).is_ok());
    assert!(matches!(
        op.validate(&params(json!({ "Status": "open" }))),
        Err(Casino25Error::InvalidValue { .. })
    ));
}

#[test]
fn test_list_sessions_checks_filter_types() {
    let op = operations::LIST_SESSIONS;

    assert!(op.validate(&Params::new()).is_ok());
    assert!(op
        .validate(&params(json!({
            "CreateTimeFrom": 1_700_000_000,
            "CloseTimeTo": "2024-05-01T00:00:00Z",
            "PlayerIds": ["p1"],
            "BankGroupIds": [],
        })))
        .is_ok());

    let err = op
        .validate(&params(json!({ "PlayerIds": "p1" })))
        .unwrap_err();
    assert!(matches!(
        err,
        Casino25Error::InvalidType { expected: ParamType::StringList, .. }
    ));

    let err = op
        .validate(&params(json!({ "CreateTimeTo": "last week" })))
        .unwrap_err();
    assert!(matches!(
        err,
        Casino25Error::InvalidType { expected: ParamType::Timestamp, .. }
    ));
}

#[test]
fn test_player_bonus_operations_must_be_a_list() {
    let op = operations::EXECUTE_PLAYER_BONUS;
    let p = params(json!({ "BonusId": "b1", "PlayerId": "p1", "Operations": { "Type": "Cancel" } }));
    assert!(matches!(
        op.validate(&p),
        Err(Casino25Error::InvalidType { expected: ParamType::List, .. })
    ));
}
