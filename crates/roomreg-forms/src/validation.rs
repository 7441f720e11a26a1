//! Rule-chain evaluation and error collapsing.
//!
//! Each field's rules run in order and stop at the first failure, so a field
//! contributes at most one [`Violation`]. A submit turns the ordered violation
//! sequence into [`FieldErrors`], keeping the first message per field.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::fields::{FieldDef, FieldName, FieldValue};

/// A single field validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// The field that failed.
    pub field: FieldName,
    /// The human-readable message to show next to the field.
    pub message: String,
    /// A short code identifying the failed rule (e.g. "min_length").
    pub code: &'static str,
}

impl Violation {
    pub fn new(field: FieldName, message: impl Into<String>, code: &'static str) -> Self {
        Self {
            field,
            message: message.into(),
            code,
        }
    }
}

/// Runs one field's rule chain against a value.
///
/// Rules after the first failing one are not evaluated.
pub fn run_chain(def: &FieldDef, value: FieldValue<'_>) -> Option<Violation> {
    def.rules
        .iter()
        .find(|rule| !rule.check(value))
        .map(|rule| Violation::new(def.name, rule.message(), rule.code()))
}

/// The error snapshot: at most one message per field.
///
/// Iterates in field declaration order. Serializes as a map keyed by the
/// fields' wire names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    messages: BTreeMap<FieldName, String>,
}

impl FieldErrors {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapses a violation sequence into a fresh snapshot.
    ///
    /// Violations are taken in sequence order; if a field already has a
    /// message, later violations for it are discarded.
    pub fn from_violations<'a, I>(violations: I) -> Self
    where
        I: IntoIterator<Item = &'a Violation>,
    {
        let mut messages = BTreeMap::new();
        for violation in violations {
            messages
                .entry(violation.field)
                .or_insert_with(|| violation.message.clone());
        }
        Self { messages }
    }

    /// Returns the message for a field, if it has one.
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.messages.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterates `(field, message)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.messages.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// Returns the fields that currently have an error.
    pub fn fields(&self) -> Vec<FieldName> {
        self.messages.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rule;

    fn chained_def() -> FieldDef {
        FieldDef::new(FieldName::FloorName)
            .rule(Rule::min_length(1, "required"))
            .rule(Rule::max_length(3, "too long"))
    }

    #[test]
    fn test_run_chain_passes() {
        assert_eq!(run_chain(&chained_def(), FieldValue::Text("3rd")), None);
    }

    #[test]
    fn test_run_chain_first_failure_wins() {
        let violation = run_chain(&chained_def(), FieldValue::Text("")).unwrap();
        assert_eq!(violation.message, "required");
        assert_eq!(violation.code, "min_length");
        assert_eq!(violation.field, FieldName::FloorName);
    }

    #[test]
    fn test_run_chain_later_rule() {
        let violation = run_chain(&chained_def(), FieldValue::Text("4th floor")).unwrap();
        assert_eq!(violation.message, "too long");
        assert_eq!(violation.code, "max_length");
    }

    #[test]
    fn test_run_chain_no_rules() {
        let def = FieldDef::new(FieldName::RoomId);
        assert_eq!(run_chain(&def, FieldValue::Text("anything")), None);
    }

    #[test]
    fn test_collapse_first_message_wins() {
        let violations = vec![
            Violation::new(FieldName::RoomName, "first", "min_length"),
            Violation::new(FieldName::RoomId, "bad id", "invalid"),
            Violation::new(FieldName::RoomName, "second", "invalid"),
        ];
        let errors = FieldErrors::from_violations(&violations);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(FieldName::RoomName), Some("first"));
        assert_eq!(errors.get(FieldName::RoomId), Some("bad id"));
    }

    #[test]
    fn test_collapse_empty() {
        let errors = FieldErrors::from_violations(std::iter::empty::<&Violation>());
        assert!(errors.is_empty());
        assert_eq!(errors, FieldErrors::new());
    }

    #[test]
    fn test_iter_declaration_order() {
        let violations = vec![
            Violation::new(FieldName::PatientOccupyingBedCapacity, "cap", "min_value"),
            Violation::new(FieldName::RoomName, "name", "min_length"),
        ];
        let errors = FieldErrors::from_violations(&violations);
        assert_eq!(
            errors.fields(),
            vec![FieldName::RoomName, FieldName::PatientOccupyingBedCapacity]
        );
    }

    #[test]
    fn test_serializes_with_wire_names() {
        let errors = FieldErrors::from_violations(&[Violation::new(
            FieldName::ExtensionNumber,
            "digits",
            "invalid",
        )]);
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({"extensionNumber": "digits"}));
    }
}
