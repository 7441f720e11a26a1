//! The room form schema.
//!
//! A [`Schema`] is an immutable, ordered list of [`FieldDef`]s. It is built
//! once (normally with [`Schema::room`]) and shared by reference; validation
//! only reads its input, so one schema can serve any number of forms.
//!
//! Within a field, rules run in the order they were declared and the first
//! failure is the only one reported. For the room schema that order is:
//!
//! | Field | Rule chain |
//! |---|---|
//! | `roomName` | min length 3, max length 20, letters/spaces/hyphens |
//! | `roomType` | one of the six room types |
//! | `roomId` | `A-123` format |
//! | `floorName` | min length 1, max length 10 |
//! | `extensionNumber` | 2 to 4 digits |
//! | `patientOccupyingBedCapacity` | whole number, at least 1, at most 10 |

use once_cell::sync::Lazy;
use regex::Regex;

use crate::choices::RoomType;
use crate::fields::{FieldDef, FieldName, WidgetType};
use crate::record::{RoomFormState, ValidatedRoom};
use crate::rules::Rule;
use crate::validation::{run_chain, Violation};

pub const ROOM_NAME_MIN_LENGTH: usize = 3;
pub const ROOM_NAME_MAX_LENGTH: usize = 20;
pub const FLOOR_NAME_MIN_LENGTH: usize = 1;
pub const FLOOR_NAME_MAX_LENGTH: usize = 10;
pub const BED_CAPACITY_MIN: u8 = 1;
pub const BED_CAPACITY_MAX: u8 = 10;

pub const ROOM_TYPE_MESSAGE: &str = "Please select a valid room type";
pub const BED_CAPACITY_INTEGER_MESSAGE: &str = "Bed Capacity must be an integer number";

static ROOM_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s-]+$").expect("valid regex"));
// ASCII digits only; `\d` would also admit other scripts' digits.
static ROOM_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]-[0-9]{3}$").expect("valid regex"));
static EXTENSION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{2,4}$").expect("valid regex"));

/// An immutable, ordered set of field definitions.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldDef>,
}

impl Schema {
    /// Creates a schema from field definitions, validated in the given order.
    pub fn new(fields: Vec<FieldDef>) -> Self {
        Self { fields }
    }

    /// Builds the room registration schema.
    pub fn room() -> Self {
        Self::new(vec![
            FieldDef::new(FieldName::RoomName)
                .label("Room Name")
                .help_text("Enter the name of the room as everyone calls it.")
                .placeholder("Enter the room name")
                .rule(Rule::min_length(
                    ROOM_NAME_MIN_LENGTH,
                    "Room Name must be at least 3 characters long",
                ))
                .rule(Rule::max_length(
                    ROOM_NAME_MAX_LENGTH,
                    "Room Name must not exceed 20 characters",
                ))
                .rule(Rule::pattern(
                    ROOM_NAME_RE.clone(),
                    "Room Name can only contain letters, spaces, and hyphens",
                )),
            FieldDef::new(FieldName::RoomType)
                .label("Room Type")
                .help_text("Select the pre-defined room type.")
                .widget(WidgetType::Select)
                .rule(Rule::one_of(
                    RoomType::ALL.into_iter().map(RoomType::as_str),
                    ROOM_TYPE_MESSAGE,
                )),
            FieldDef::new(FieldName::RoomId)
                .label("Room ID")
                .help_text("Enter the room identification number, typically a room number.")
                .placeholder("Enter room ID")
                .rule(Rule::pattern(
                    ROOM_ID_RE.clone(),
                    "Room ID must be in the format 'A-123'",
                )),
            FieldDef::new(FieldName::FloorName)
                .label("Floor Name")
                .help_text("Enter the floor name, like 'ground floor' or 'first floor'.")
                .placeholder("Enter floor label")
                .rule(Rule::min_length(FLOOR_NAME_MIN_LENGTH, "Floor Name is required"))
                .rule(Rule::max_length(
                    FLOOR_NAME_MAX_LENGTH,
                    "Floor Name must not exceed 10 characters",
                )),
            FieldDef::new(FieldName::ExtensionNumber)
                .label("Extension Number")
                .placeholder("Enter room extension number")
                .rule(Rule::pattern(
                    EXTENSION_RE.clone(),
                    "Extension Number must be between 2 to 4 digits",
                )),
            FieldDef::new(FieldName::PatientOccupyingBedCapacity)
                .label("Patient Occupying Bed Capacity")
                .help_text("Enter the number of beds allowed in that room for patient occupancy.")
                .placeholder("Enter the bed capacity number")
                .widget(WidgetType::NumberInput)
                .rule(Rule::integer(BED_CAPACITY_INTEGER_MESSAGE))
                .rule(Rule::min_value(
                    f64::from(BED_CAPACITY_MIN),
                    "Bed Capacity must be at least 1",
                ))
                .rule(Rule::max_value(
                    f64::from(BED_CAPACITY_MAX),
                    "Bed Capacity must not exceed 10",
                )),
        ])
    }

    /// Returns the field definitions in validation order.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Returns the first definition for a field, if the schema has one.
    pub fn field(&self, name: FieldName) -> Option<&FieldDef> {
        self.fields.iter().find(|def| def.name == name)
    }

    /// Validates a form state.
    ///
    /// On success the state is returned retyped as a [`ValidatedRoom`]. On
    /// failure the violations are returned in field order, at most one per
    /// field definition. A field whose rules all pass but whose value cannot
    /// be typed is reported in the same pass, whatever the other fields hold.
    /// The state is never modified and never coerced.
    pub fn validate(&self, state: &RoomFormState) -> Result<ValidatedRoom, Vec<Violation>> {
        let mut violations: Vec<Violation> = self
            .fields
            .iter()
            .filter_map(|def| run_chain(def, state.value(def.name)))
            .collect();

        let room_type = RoomType::from_choice(&state.room_type);
        let capacity = whole_u8(state.patient_occupying_bed_capacity);

        if room_type.is_none() && !has_violation(&violations, FieldName::RoomType) {
            violations.push(Violation::new(
                FieldName::RoomType,
                ROOM_TYPE_MESSAGE,
                "invalid_choice",
            ));
        }
        if capacity.is_none() && !has_violation(&violations, FieldName::PatientOccupyingBedCapacity) {
            violations.push(Violation::new(
                FieldName::PatientOccupyingBedCapacity,
                BED_CAPACITY_INTEGER_MESSAGE,
                "integer",
            ));
        }

        match (room_type, capacity) {
            (Some(room_type), Some(capacity)) if violations.is_empty() => Ok(ValidatedRoom {
                room_name: state.room_name.clone(),
                room_type,
                room_id: state.room_id.clone(),
                floor_name: state.floor_name.clone(),
                extension_number: state.extension_number.clone(),
                patient_occupying_bed_capacity: capacity,
            }),
            _ => {
                // Stable, so duplicate definitions keep their schema order.
                violations.sort_by_key(|v| v.field);
                Err(violations)
            }
        }
    }

    /// Runs a single field's rule chain.
    ///
    /// Returns `None` when the field passes or the schema does not define it.
    pub fn validate_field(&self, name: FieldName, state: &RoomFormState) -> Option<Violation> {
        self.field(name)
            .and_then(|def| run_chain(def, state.value(name)))
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::room()
    }
}

fn has_violation(violations: &[Violation], field: FieldName) -> bool {
    violations.iter().any(|v| v.field == field)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_u8(n: f64) -> Option<u8> {
    (n.is_finite() && n.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(&n)).then(|| n as u8)
}
