//! The closed set of room types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The option the room type select starts on. It is never a valid value.
pub const PLACEHOLDER: &str = "Select";

/// A validated room type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
    #[serde(rename = "ICU")]
    Icu,
    Operating,
    Emergency,
}

impl RoomType {
    /// All room types in display order.
    pub const ALL: [Self; 6] = [
        Self::Standard,
        Self::Deluxe,
        Self::Suite,
        Self::Icu,
        Self::Operating,
        Self::Emergency,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Deluxe => "Deluxe",
            Self::Suite => "Suite",
            Self::Icu => "ICU",
            Self::Operating => "Operating",
            Self::Emergency => "Emergency",
        }
    }

    /// Parses an option value. Matching is exact; the placeholder is `None`.
    pub fn from_choice(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    /// The options a select widget shows, placeholder first.
    pub fn options() -> impl Iterator<Item = &'static str> {
        std::iter::once(PLACEHOLDER).chain(Self::ALL.into_iter().map(Self::as_str))
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
