//! Declarative field rules.
//!
//! A [`Rule`] is one constraint plus the message reported when it fails.
//! Rules never coerce: text rules fail on numbers, numeric rules fail on text,
//! and numeric comparisons fail on `NaN`.

use std::fmt;

use regex::Regex;

use crate::fields::FieldValue;

/// A single constraint in a field's rule chain.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Text must have at least `min` characters.
    MinLength { min: usize, message: String },
    /// Text must have at most `max` characters.
    MaxLength { max: usize, message: String },
    /// Text must match the anchored regular expression.
    Pattern { regex: Regex, message: String },
    /// Text must equal one of the listed options exactly.
    OneOf { choices: Vec<String>, message: String },
    /// Number must be a finite whole number.
    Integer { message: String },
    /// Number must be greater than or equal to `min`.
    MinValue { min: f64, message: String },
    /// Number must be less than or equal to `max`.
    MaxValue { max: f64, message: String },
}

impl Rule {
    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Self::MinLength {
            min,
            message: message.into(),
        }
    }

    pub fn max_length(max: usize, message: impl Into<String>) -> Self {
        Self::MaxLength {
            max,
            message: message.into(),
        }
    }

    pub fn pattern(regex: Regex, message: impl Into<String>) -> Self {
        Self::Pattern {
            regex,
            message: message.into(),
        }
    }

    pub fn one_of<I, S>(choices: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::OneOf {
            choices: choices.into_iter().map(Into::into).collect(),
            message: message.into(),
        }
    }

    pub fn integer(message: impl Into<String>) -> Self {
        Self::Integer {
            message: message.into(),
        }
    }

    pub fn min_value(min: f64, message: impl Into<String>) -> Self {
        Self::MinValue {
            min,
            message: message.into(),
        }
    }

    pub fn max_value(max: f64, message: impl Into<String>) -> Self {
        Self::MaxValue {
            max,
            message: message.into(),
        }
    }

    /// A short machine-readable code for the kind of failure.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MinLength { .. } => "min_length",
            Self::MaxLength { .. } => "max_length",
            Self::Pattern { .. } => "invalid",
            Self::OneOf { .. } => "invalid_choice",
            Self::Integer { .. } => "integer",
            Self::MinValue { .. } => "min_value",
            Self::MaxValue { .. } => "max_value",
        }
    }

    /// The message reported when this rule fails.
    pub fn message(&self) -> &str {
        match self {
            Self::MinLength { message, .. }
            | Self::MaxLength { message, .. }
            | Self::Pattern { message, .. }
            | Self::OneOf { message, .. }
            | Self::Integer { message }
            | Self::MinValue { message, .. }
            | Self::MaxValue { message, .. } => message,
        }
    }

    /// Returns `true` if `value` satisfies this rule.
    ///
    /// Lengths count Unicode scalar values.
    pub fn check(&self, value: FieldValue<'_>) -> bool {
        match (self, value) {
            (Self::MinLength { min, .. }, FieldValue::Text(s)) => s.chars().count() >= *min,
            (Self::MaxLength { max, .. }, FieldValue::Text(s)) => s.chars().count() <= *max,
            (Self::Pattern { regex, .. }, FieldValue::Text(s)) => regex.is_match(s),
            (Self::OneOf { choices, .. }, FieldValue::Text(s)) => {
                choices.iter().any(|choice| choice == s)
            }
            (Self::Integer { .. }, FieldValue::Number(n)) => n.is_finite() && n.fract() == 0.0,
            (Self::MinValue { min, .. }, FieldValue::Number(n)) => n >= *min,
            (Self::MaxValue { max, .. }, FieldValue::Number(n)) => n <= *max,
            _ => false,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinLength { min, .. } => write!(f, "length >= {min}"),
            Self::MaxLength { max, .. } => write!(f, "length <= {max}"),
            Self::Pattern { regex, .. } => write!(f, "matches {}", regex.as_str()),
            Self::OneOf { choices, .. } => write!(f, "one of {}", choices.join(", ")),
            Self::Integer { .. } => write!(f, "whole number"),
            Self::MinValue { min, .. } => write!(f, ">= {min}"),
            Self::MaxValue { max, .. } => write!(f, "<= {max}"),
        }
    }
}
