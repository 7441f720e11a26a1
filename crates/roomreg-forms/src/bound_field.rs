//! Bound fields: a field definition paired with its current value and error.
//!
//! A [`BoundField`] is what a renderer needs for one form row. It owns copies
//! of the definition's metadata so it can outlive the controller borrow.

use serde::Serialize;

use crate::choices::RoomType;
use crate::fields::{FieldDef, FieldName, WidgetType};

/// A form field bound to the current value and error snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundField {
    /// The field.
    pub name: FieldName,
    /// Human-readable label.
    pub label: String,
    /// Help text.
    pub help_text: String,
    /// Placeholder for an empty input.
    pub placeholder: String,
    /// The widget to render.
    pub widget: WidgetType,
    /// The current value as input text.
    pub value: String,
    /// The current error message, if any.
    pub error: Option<String>,
    /// Options for select widgets, placeholder first. Empty otherwise.
    pub options: Vec<&'static str>,
}

impl BoundField {
    pub fn new(def: &FieldDef, value: String, error: Option<String>) -> Self {
        let options = if def.widget == WidgetType::Select && def.name == FieldName::RoomType {
            RoomType::options().collect()
        } else {
            Vec::new()
        };

        Self {
            name: def.name,
            label: def.label.clone(),
            help_text: def.help_text.clone(),
            placeholder: def.placeholder.clone(),
            widget: def.widget,
            value,
            error,
            options,
        }
    }

    pub const fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Renders the row as plain text: `Label: value` plus an error line.
    pub fn render_text(&self) -> String {
        let mut out = format!("{}: {}", self.label, self.value);
        if let Some(error) = &self.error {
            out.push_str("\n  ! ");
            out.push_str(error);
        }
        out
    }
}
