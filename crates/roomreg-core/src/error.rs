//! Core error types for roomreg.
//!
//! Field validation violations are *not* errors in this sense: they are
//! ordinary data produced by the schema and stored in the form's error
//! snapshot. [`RoomRegError`] covers everything else that can go wrong around
//! the engine: unknown field names arriving from the presentation layer,
//! configuration problems, serialization, and I/O.

use thiserror::Error;

/// The primary error type for roomreg.
#[derive(Error, Debug)]
pub enum RoomRegError {
    // ── Form input ───────────────────────────────────────────────────

    /// A field-change event named a field the room form does not have.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A submission was rejected by the schema.
    ///
    /// The form controller never returns this; it is used by outer layers
    /// (such as the CLI) that need to turn a rejected submit into a failure.
    #[error("Submission rejected with {0} field error(s)")]
    Rejected(usize),

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    // ── Serialization ────────────────────────────────────────────────

    /// An error occurred during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl RoomRegError {
    /// Returns the process exit code associated with this error.
    ///
    /// - `Rejected` -> 1 (the input was invalid)
    /// - `UnknownField` -> 2 (usage error)
    /// - everything else -> 70 (internal software error)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Rejected(_) => 1,
            Self::UnknownField(_) => 2,
            Self::ConfigurationError(_) | Self::SerializationError(_) | Self::IoError(_) => 70,
        }
    }
}

impl From<serde_json::Error> for RoomRegError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// A convenience type alias for `Result<T, RoomRegError>`.
pub type RoomRegResult<T> = Result<T, RoomRegError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_field_display() {
        let err = RoomRegError::UnknownField("roomColour".into());
        assert_eq!(err.to_string(), "Unknown field: roomColour");
    }

    #[test]
    fn test_rejected_display() {
        let err = RoomRegError::Rejected(2);
        assert_eq!(err.to_string(), "Submission rejected with 2 field error(s)");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(RoomRegError::Rejected(1).exit_code(), 1);
        assert_eq!(RoomRegError::UnknownField("x".into()).exit_code(), 2);
        assert_eq!(
            RoomRegError::ConfigurationError("x".into()).exit_code(),
            70
        );
        assert_eq!(
            RoomRegError::SerializationError("x".into()).exit_code(),
            70
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: RoomRegError = io_err.into();
        assert_eq!(err.exit_code(), 70);
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: RoomRegError = json_err.into();
        assert!(matches!(err, RoomRegError::SerializationError(_)));
    }
}
