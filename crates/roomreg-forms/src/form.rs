//! The form controller.
//!
//! [`FormController`] sits between the presentation layer and the
//! [`Schema`]. It owns two snapshots: the current field values and the
//! current field errors. Field changes only touch the value snapshot;
//! validation runs on submit, which either hands a [`ValidatedRoom`] to a
//! [`RecordSink`] or replaces the error snapshot wholesale.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use roomreg_core::logging::submission_span;
use roomreg_core::RoomRegError;

use crate::bound_field::BoundField;
use crate::fields::FieldName;
use crate::record::{RoomFormState, ValidatedRoom};
use crate::schema::Schema;
use crate::validation::FieldErrors;

/// Receives records that passed validation.
///
/// Implemented for any `FnMut(ValidatedRoom)`, so a closure can be passed
/// straight to [`FormController::submit`].
pub trait RecordSink {
    /// Takes ownership of an accepted record.
    fn accept(&mut self, record: ValidatedRoom);
}

impl<F> RecordSink for F
where
    F: FnMut(ValidatedRoom),
{
    fn accept(&mut self, record: ValidatedRoom) {
        self(record);
    }
}

/// The result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The record passed and was handed to the sink.
    Accepted,
    /// The record failed; the error snapshot now holds this many fields.
    Rejected { error_count: usize },
}

impl SubmitOutcome {
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// A serializable copy of both snapshots, for renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormSnapshot {
    pub values: RoomFormState,
    pub errors: FieldErrors,
    pub validated: bool,
}

/// Mediates between raw field-change events and the schema.
pub struct FormController {
    schema: Arc<Schema>,
    values: RoomFormState,
    errors: FieldErrors,
    validated: bool,
    attempts: u64,
}

impl FormController {
    /// Creates a controller with default values and no errors.
    pub fn new(schema: Arc<Schema>) -> Self {
        Self::with_values(schema, RoomFormState::default())
    }

    /// Creates a controller pre-filled with the given values.
    pub fn with_values(schema: Arc<Schema>, values: RoomFormState) -> Self {
        Self {
            schema,
            values,
            errors: FieldErrors::new(),
            validated: false,
            attempts: 0,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The current value snapshot.
    pub const fn values(&self) -> &RoomFormState {
        &self.values
    }

    /// The current error snapshot.
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Returns `true` if the last submit succeeded and nothing changed since.
    pub const fn is_validated(&self) -> bool {
        self.validated
    }

    /// Number of submit attempts made on this controller.
    pub const fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Applies a field-change event by wire name.
    ///
    /// Unknown names are rejected and leave both snapshots untouched.
    pub fn set_field(&mut self, name: &str, raw: &str) -> Result<(), RoomRegError> {
        let Some(field) = FieldName::lookup(name) else {
            warn!(field = name, "Ignoring change to unknown field");
            return Err(RoomRegError::UnknownField(name.to_string()));
        };
        self.set(field, raw);
        Ok(())
    }

    /// Applies a field-change event.
    ///
    /// Replaces exactly one value. The error snapshot is left as it is; no
    /// validation runs until the next submit.
    pub fn set(&mut self, field: FieldName, raw: &str) {
        self.values.assign(field, raw);
        self.validated = false;
        debug!(field = %field, "Field updated");
    }

    /// Validates the current values.
    ///
    /// On success the error snapshot is emptied and the record is handed to
    /// `sink`; the values are kept as they are. On failure the error snapshot
    /// is rebuilt from scratch, keeping the first message for each field.
    pub fn submit(&mut self, sink: &mut dyn RecordSink) -> SubmitOutcome {
        self.attempts += 1;
        let span = submission_span(self.attempts);
        let _guard = span.enter();

        match self.schema.validate(&self.values) {
            Ok(record) => {
                self.errors = FieldErrors::new();
                self.validated = true;
                info!(room_id = %record.room_id, "Room record accepted");
                sink.accept(record);
                SubmitOutcome::Accepted
            }
            Err(violations) => {
                self.errors = FieldErrors::from_violations(&violations);
                self.validated = false;
                debug!(
                    violations = violations.len(),
                    fields = self.errors.len(),
                    "Room record rejected"
                );
                SubmitOutcome::Rejected {
                    error_count: self.errors.len(),
                }
            }
        }
    }

    /// Restores default values and clears all errors.
    pub fn reset(&mut self) {
        self.values = RoomFormState::default();
        self.errors = FieldErrors::new();
        self.validated = false;
        debug!("Form reset");
    }

    /// Returns one render-ready field per schema field definition.
    pub fn bound_fields(&self) -> Vec<BoundField> {
        self.schema
            .fields()
            .iter()
            .map(|def| {
                BoundField::new(
                    def,
                    self.values.display_value(def.name),
                    self.errors.get(def.name).map(String::from),
                )
            })
            .collect()
    }

    /// Returns a serializable copy of both snapshots.
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            values: self.values.clone(),
            errors: self.errors.clone(),
            validated: self.validated,
        }
    }
}
