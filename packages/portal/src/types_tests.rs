#![cfg(test)]

use crate::i18n::Language;
use crate::monitoring::{ComplaintStatus, PumpMode, PumpStatus, WqiBand};
use crate::session::Role;

fn json<T: serde::Serialize>(value: T) -> String {
    serde_json::to_string(&value).unwrap()
}

#[test]
fn language_serializes_as_code() {
    assert_eq!(json(Language::Hi), "\"hi\"");
    assert_eq!(json(Language::En), "\"en\"");
}

#[test]
fn role_serializes_snake_case() {
    assert_eq!(json(Role::Citizen), "\"citizen\"");
    assert_eq!(json(Role::Administrator), "\"administrator\"");
    let role: Role = serde_json::from_str("\"committee\"").unwrap();
    assert_eq!(role, Role::Committee);
}

#[test]
fn monitoring_enums_serialize_snake_case() {
    assert_eq!(json(ComplaintStatus::InProgress), "\"in_progress\"");
    assert_eq!(json(PumpMode::Manual), "\"manual\"");
    assert_eq!(json(PumpStatus::Maintenance), "\"maintenance\"");
    assert_eq!(json(WqiBand::Unsafe), "\"unsafe\"");
}
