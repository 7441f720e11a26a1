//! The editable form state and the validated room record.

use serde::{Deserialize, Serialize};

use crate::choices::{RoomType, PLACEHOLDER};
use crate::fields::{coerce_number, FieldKind, FieldName, FieldValue};

/// The current value of every field, in its natural type.
///
/// Bed capacity is kept as `f64` so that non-integers and the `NaN` produced
/// by unparsable input survive until the schema rejects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomFormState {
    pub room_name: String,
    pub room_type: String,
    pub room_id: String,
    pub floor_name: String,
    pub extension_number: String,
    pub patient_occupying_bed_capacity: f64,
}

impl Default for RoomFormState {
    fn default() -> Self {
        Self {
            room_name: String::new(),
            room_type: PLACEHOLDER.to_string(),
            room_id: String::new(),
            floor_name: String::new(),
            extension_number: String::new(),
            patient_occupying_bed_capacity: 1.0,
        }
    }
}

impl RoomFormState {
    /// Returns a borrowed view of one field's value.
    pub fn value(&self, field: FieldName) -> FieldValue<'_> {
        match field {
            FieldName::RoomName => FieldValue::Text(&self.room_name),
            FieldName::RoomType => FieldValue::Text(&self.room_type),
            FieldName::RoomId => FieldValue::Text(&self.room_id),
            FieldName::FloorName => FieldValue::Text(&self.floor_name),
            FieldName::ExtensionNumber => FieldValue::Text(&self.extension_number),
            FieldName::PatientOccupyingBedCapacity => {
                FieldValue::Number(self.patient_occupying_bed_capacity)
            }
        }
    }

    /// Stores raw input into one field, coercing only the numeric field.
    pub fn assign(&mut self, field: FieldName, raw: &str) {
        let slot = match field {
            FieldName::RoomName => &mut self.room_name,
            FieldName::RoomType => &mut self.room_type,
            FieldName::RoomId => &mut self.room_id,
            FieldName::FloorName => &mut self.floor_name,
            FieldName::ExtensionNumber => &mut self.extension_number,
            FieldName::PatientOccupyingBedCapacity => {
                self.patient_occupying_bed_capacity = coerce_number(raw);
                return;
            }
        };
        raw.clone_into(slot);
    }

    /// Returns the value as a renderer would put it back into an input.
    ///
    /// A `NaN` capacity renders as empty, like a number input holding text it
    /// cannot parse.
    pub fn display_value(&self, field: FieldName) -> String {
        match (field.kind(), self.value(field)) {
            (FieldKind::Integer, FieldValue::Number(n)) if n.is_nan() => String::new(),
            (_, FieldValue::Number(n)) => n.to_string(),
            (_, FieldValue::Text(s)) => s.to_string(),
        }
    }
}

/// A room record that has passed every rule of the schema.
///
/// Produced only by [`Schema::validate`](crate::schema::Schema::validate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedRoom {
    pub room_name: String,
    pub room_type: RoomType,
    pub room_id: String,
    pub floor_name: String,
    pub extension_number: String,
    pub patient_occupying_bed_capacity: u8,
}

impl From<ValidatedRoom> for RoomFormState {
    fn from(room: ValidatedRoom) -> Self {
        Self {
            room_name: room.room_name,
            room_type: room.room_type.as_str().to_string(),
            room_id: room.room_id,
            floor_name: room.floor_name,
            extension_number: room.extension_number,
            patient_occupying_bed_capacity: f64::from(room.patient_occupying_bed_capacity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = RoomFormState::default();
        assert_eq!(state.room_name, "");
        assert_eq!(state.room_type, "Select");
        assert_eq!(state.room_id, "");
        assert_eq!(state.floor_name, "");
        assert_eq!(state.extension_number, "");
        assert!((state.patient_occupying_bed_capacity - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_assign_text_is_verbatim() {
        let mut state = RoomFormState::default();
        state.assign(FieldName::RoomName, "  ICU Ward ");
        assert_eq!(state.room_name, "  ICU Ward ");
        state.assign(FieldName::ExtensionNumber, "0204");
        assert_eq!(state.extension_number, "0204");
    }

    #[test]
    fn test_assign_touches_one_field() {
        let mut state = RoomFormState::default();
        state.assign(FieldName::RoomId, "A-123");
        let expected = RoomFormState {
            room_id: "A-123".to_string(),
            ..RoomFormState::default()
        };
        assert_eq!(state, expected);
    }

    #[test]
    fn test_assign_capacity_coerces() {
        let mut state = RoomFormState::default();
        state.assign(FieldName::PatientOccupyingBedCapacity, "7");
        assert!((state.patient_occupying_bed_capacity - 7.0).abs() < f64::EPSILON);
        state.assign(FieldName::PatientOccupyingBedCapacity, "seven");
        assert!(state.patient_occupying_bed_capacity.is_nan());
    }

    #[test]
    fn test_display_value() {
        let mut state = RoomFormState::default();
        assert_eq!(state.display_value(FieldName::PatientOccupyingBedCapacity), "1");
        assert_eq!(state.display_value(FieldName::RoomType), "Select");
        state.assign(FieldName::PatientOccupyingBedCapacity, "3.5");
        assert_eq!(state.display_value(FieldName::PatientOccupyingBedCapacity), "3.5");
        state.assign(FieldName::PatientOccupyingBedCapacity, "x");
        assert_eq!(state.display_value(FieldName::PatientOccupyingBedCapacity), "");
    }

    #[test]
    fn test_validated_room_serializes_camel_case() {
        let room = ValidatedRoom {
            room_name: "ICU Ward".into(),
            room_type: RoomType::Icu,
            room_id: "A-123".into(),
            floor_name: "3rd".into(),
            extension_number: "204".into(),
            patient_occupying_bed_capacity: 4,
        };
        let json = serde_json::to_value(&room).unwrap();
        assert_eq!(json["roomName"], "ICU Ward");
        assert_eq!(json["roomType"], "ICU");
        assert_eq!(json["patientOccupyingBedCapacity"], 4);
    }

    #[test]
    fn test_validated_room_back_into_state() {
        let room = ValidatedRoom {
            room_name: "East Wing".into(),
            room_type: RoomType::Suite,
            room_id: "B-001".into(),
            floor_name: "1".into(),
            extension_number: "12".into(),
            patient_occupying_bed_capacity: 2,
        };
        let state = RoomFormState::from(room);
        assert_eq!(state.room_type, "Suite");
        assert!((state.patient_occupying_bed_capacity - 2.0).abs() < f64::EPSILON);
    }
}
