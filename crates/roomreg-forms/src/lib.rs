//! # roomreg-forms
//!
//! The room registration form engine. A declarative, immutable [`Schema`]
//! describes every field's rule chain; a [`FormController`] owns the current
//! value snapshot and error snapshot, applies raw field-change events, and on
//! submit either hands a [`ValidatedRoom`] to a [`RecordSink`] or replaces the
//! error snapshot with one message per failing field.
//!
//! ```
//! use std::sync::Arc;
//!
//! use roomreg_forms::{FormController, Schema, SubmitOutcome, ValidatedRoom};
//!
//! let mut form = FormController::new(Arc::new(Schema::room()));
//! form.set_field("roomName", "ICU Ward").unwrap();
//! form.set_field("roomType", "ICU").unwrap();
//! form.set_field("roomId", "A-123").unwrap();
//! form.set_field("floorName", "3rd").unwrap();
//! form.set_field("extensionNumber", "204").unwrap();
//! form.set_field("patientOccupyingBedCapacity", "4").unwrap();
//!
//! let mut accepted = Vec::new();
//! let outcome = form.submit(&mut |room: ValidatedRoom| accepted.push(room));
//! assert_eq!(outcome, SubmitOutcome::Accepted);
//! assert_eq!(accepted[0].patient_occupying_bed_capacity, 4);
//! ```

pub mod bound_field;
pub mod choices;
pub mod fields;
pub mod form;
pub mod record;
pub mod rules;
pub mod schema;
pub mod validation;

pub use bound_field::BoundField;
pub use choices::RoomType;
pub use fields::{FieldDef, FieldKind, FieldName, FieldValue, WidgetType};
pub use form::{FormController, FormSnapshot, RecordSink, SubmitOutcome};
pub use record::{RoomFormState, ValidatedRoom};
pub use rules::Rule;
pub use schema::Schema;
pub use validation::{FieldErrors, Violation};
