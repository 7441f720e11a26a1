//! Field names, kinds, values, and definitions.
//!
//! Each [`FieldDef`] describes a single form field: which of the six room
//! fields it is, its presentation metadata, and its ordered rule chain. The
//! rule chain is evaluated by [`crate::validation::run_chain`].

use std::fmt;
use std::str::FromStr;

use roomreg_core::RoomRegError;
use serde::{Deserialize, Serialize};

use crate::rules::Rule;

/// One of the six fields of the room form.
///
/// Variants are declared in form order, so the derived `Ord` sorts fields
/// the way they appear on the form and in violation sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    RoomName,
    RoomType,
    RoomId,
    FloorName,
    ExtensionNumber,
    PatientOccupyingBedCapacity,
}

impl FieldName {
    /// All fields in declaration order.
    pub const ALL: [Self; 6] = [
        Self::RoomName,
        Self::RoomType,
        Self::RoomId,
        Self::FloorName,
        Self::ExtensionNumber,
        Self::PatientOccupyingBedCapacity,
    ];

    /// Returns the wire name used by field-change events.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RoomName => "roomName",
            Self::RoomType => "roomType",
            Self::RoomId => "roomId",
            Self::FloorName => "floorName",
            Self::ExtensionNumber => "extensionNumber",
            Self::PatientOccupyingBedCapacity => "patientOccupyingBedCapacity",
        }
    }

    /// Resolves a wire name. Matching is exact and case-sensitive.
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }

    /// Returns the natural type of this field's value.
    pub const fn kind(self) -> FieldKind {
        match self {
            Self::RoomType => FieldKind::Choice,
            Self::PatientOccupyingBedCapacity => FieldKind::Integer,
            Self::RoomName | Self::RoomId | Self::FloorName | Self::ExtensionNumber => {
                FieldKind::Text
            }
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = RoomRegError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| RoomRegError::UnknownField(s.to_string()))
    }
}

/// The natural type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, stored verbatim.
    Text,
    /// Text restricted to a closed set of options.
    Choice,
    /// A whole number, stored as `f64` until validated.
    Integer,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Choice => write!(f, "choice"),
            Self::Integer => write!(f, "integer"),
        }
    }
}

/// A borrowed view of one field's current value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

/// How the presentation layer should render a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetType {
    TextInput,
    Select,
    NumberInput,
}

/// Returns the default widget for a field kind.
pub const fn default_widget_for_kind(kind: FieldKind) -> WidgetType {
    match kind {
        FieldKind::Text => WidgetType::TextInput,
        FieldKind::Choice => WidgetType::Select,
        FieldKind::Integer => WidgetType::NumberInput,
    }
}

/// Complete definition of a form field.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Which room field this defines.
    pub name: FieldName,
    /// Human-readable label.
    pub label: String,
    /// Help text displayed under the field.
    pub help_text: String,
    /// Placeholder shown in an empty input.
    pub placeholder: String,
    /// The widget used for rendering.
    pub widget: WidgetType,
    /// Rules evaluated in order; the first failing rule supplies the message.
    pub rules: Vec<Rule>,
}

impl FieldDef {
    /// Creates a new `FieldDef` with no rules and the default widget for
    /// the field's kind. The label defaults to the wire name.
    pub fn new(name: FieldName) -> Self {
        Self {
            name,
            label: name.as_str().to_string(),
            help_text: String::new(),
            placeholder: String::new(),
            widget: default_widget_for_kind(name.kind()),
            rules: Vec::new(),
        }
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = text.into();
        self
    }

    /// Sets the placeholder.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Sets the widget type.
    #[must_use]
    pub const fn widget(mut self, widget: WidgetType) -> Self {
        self.widget = widget;
        self
    }

    /// Appends a rule to the end of the chain.
    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }
}

/// Coerces raw numeric input the way a browser number field reports it.
///
/// Surrounding whitespace is ignored and empty input becomes `0`. Anything
/// that is not a finite decimal number becomes `NaN`, which later fails the
/// integer rule instead of being silently replaced.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => f64::NAN,
    }
}
