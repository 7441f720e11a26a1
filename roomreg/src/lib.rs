//! # roomreg
//!
//! Umbrella crate for the room registration form. Re-exports the workspace
//! crates behind cargo features so applications depend on one crate.
//!
//! | Feature | Crate |
//! |---|---|
//! | (always) | [`core`] - errors, settings, logging |
//! | `forms` | [`forms`] - schema, rules, form controller |
//! | `cli` | [`cli`] - management commands |
//!
//! ```
//! use roomreg::prelude::*;
//!
//! let mut form = FormController::new(std::sync::Arc::new(Schema::room()));
//! form.set_field("roomType", "Suite").unwrap();
//! let outcome = form.submit(&mut |_room: ValidatedRoom| {});
//! assert!(!outcome.is_accepted());
//! assert!(form.errors().get(FieldName::RoomType).is_none());
//! ```

pub use roomreg_core as core;

#[cfg(feature = "forms")]
pub use roomreg_forms as forms;

#[cfg(feature = "cli")]
pub use roomreg_cli as cli;

// Third-party re-exports
pub use serde;
pub use serde_json;
pub use tracing;

/// The most commonly used types.
pub mod prelude {
    pub use roomreg_core::{OutputFormat, RoomRegError, RoomRegResult, Settings};

    #[cfg(feature = "forms")]
    pub use roomreg_forms::{
        FieldErrors, FieldName, FormController, RecordSink, RoomFormState, RoomType, Schema,
        SubmitOutcome, ValidatedRoom, Violation,
    };
}
