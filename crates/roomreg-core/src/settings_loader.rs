//! Settings loading from configuration files.
//!
//! ## Loading Order
//!
//! 1. Start with default settings.
//! 2. Load from a TOML or JSON file (overriding defaults).
//! 3. Apply environment variable overrides (highest priority).
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `ROOMREG_DEBUG` | `debug` |
//! | `ROOMREG_LOG_LEVEL` | `log_level` |
//! | `ROOMREG_OUTPUT_FORMAT` | `output_format` (`text` or `json`) |
//!
//! ## Examples
//!
//! ```rust,no_run
//! use roomreg_core::settings_loader;
//!
//! let settings = settings_loader::from_file_with_env("roomreg.toml").unwrap();
//! ```

use std::path::Path;

use crate::error::{RoomRegError, RoomRegResult};
use crate::settings::Settings;

/// Loads settings from a TOML string.
///
/// Any fields not present in the TOML keep their default values.
///
/// # Errors
///
/// Returns an error if the TOML is malformed or cannot be deserialized.
pub fn from_toml_str(toml_str: &str) -> RoomRegResult<Settings> {
    let toml_value: toml::Value = toml::from_str(toml_str)
        .map_err(|e| RoomRegError::ConfigurationError(format!("Failed to parse TOML: {e}")))?;
    merge_over_defaults(toml_to_json(toml_value), "TOML")
}

/// Loads settings from a TOML file.
pub fn from_toml_file(path: impl AsRef<Path>) -> RoomRegResult<Settings> {
    from_toml_str(&read_config(path.as_ref(), "TOML")?)
}

/// Loads settings from a JSON string.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or cannot be deserialized.
pub fn from_json_str(json_str: &str) -> RoomRegResult<Settings> {
    let json_value: serde_json::Value = serde_json::from_str(json_str)
        .map_err(|e| RoomRegError::ConfigurationError(format!("Failed to parse JSON: {e}")))?;
    merge_over_defaults(json_value, "JSON")
}

/// Loads settings from a JSON file.
pub fn from_json_file(path: impl AsRef<Path>) -> RoomRegResult<Settings> {
    from_json_str(&read_config(path.as_ref(), "JSON")?)
}

/// Loads settings from a file, choosing the format from its extension.
///
/// `.json` files are parsed as JSON; everything else is parsed as TOML.
pub fn from_file(path: impl AsRef<Path>) -> RoomRegResult<Settings> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        from_json_file(path)
    } else {
        from_toml_file(path)
    }
}

/// Loads settings from a file and then applies environment variable overrides.
pub fn from_file_with_env(path: impl AsRef<Path>) -> RoomRegResult<Settings> {
    let mut settings = from_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from just environment variables (starting from defaults).
pub fn from_env() -> Settings {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings);
    settings
}

/// Applies `ROOMREG_*` environment variable overrides to a settings struct.
pub fn apply_env_overrides(settings: &mut Settings) {
    apply_overrides_from(settings, |key| std::env::var(key).ok());
}

/// Applies overrides using an arbitrary variable lookup.
///
/// `ROOMREG_DEBUG` accepts "true"/"1"/"yes" as true and anything else as
/// false. An unrecognized `ROOMREG_OUTPUT_FORMAT` is ignored with a warning.
pub fn apply_overrides_from<F>(settings: &mut Settings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("ROOMREG_DEBUG") {
        settings.debug = matches!(val.to_lowercase().as_str(), "true" | "1" | "yes");
    }

    if let Some(val) = lookup("ROOMREG_LOG_LEVEL") {
        settings.log_level = val;
    }

    if let Some(val) = lookup("ROOMREG_OUTPUT_FORMAT") {
        match val.parse() {
            Ok(format) => settings.output_format = format,
            Err(e) => tracing::warn!("Ignoring ROOMREG_OUTPUT_FORMAT: {e}"),
        }
    }
}

// ============================================================
// Helpers
// ============================================================

fn read_config(path: &Path, kind: &str) -> RoomRegResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        RoomRegError::ConfigurationError(format!(
            "Failed to read {kind} file '{}': {e}",
            path.display()
        ))
    })
}

fn merge_over_defaults(
    value: serde_json::Value,
    kind: &str,
) -> RoomRegResult<Settings> {
    let default_json = serde_json::to_value(Settings::default()).map_err(|e| {
        RoomRegError::ConfigurationError(format!("Failed to serialize default settings: {e}"))
    })?;

    let merged = merge_json(default_json, value);
    serde_json::from_value(merged).map_err(|e| {
        RoomRegError::ConfigurationError(format!("Failed to deserialize settings from {kind}: {e}"))
    })
}

/// Converts a TOML value to a `serde_json::Value`.
fn toml_to_json(value: toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s),
        toml::Value::Integer(i) => serde_json::json!(i),
        toml::Value::Float(f) => serde_json::json!(f),
        toml::Value::Boolean(b) => serde_json::Value::Bool(b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => {
            let map: serde_json::Map<String, serde_json::Value> = table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect();
            serde_json::Value::Object(map)
        }
    }
}

/// Deep-merges two JSON values. The `override_val` takes precedence.
fn merge_json(base: serde_json::Value, override_val: serde_json::Value) -> serde_json::Value {
    match (base, override_val) {
        (serde_json::Value::Object(mut base_map), serde_json::Value::Object(override_map)) => {
            for (key, override_v) in override_map {
                let merged = if let Some(base_v) = base_map.remove(&key) {
                    merge_json(base_v, override_v)
                } else {
                    override_v
                };
                base_map.insert(key, merged);
            }
            serde_json::Value::Object(base_map)
        }
        (_, override_val) => override_val,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;
    use crate::settings::OutputFormat;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    // ── TOML loading ────────────────────────────────────────────────

    #[test]
    fn test_from_toml_str_basic() {
        let toml = r#"
            debug = false
            log_level = "roomreg_forms=debug"
            output_format = "json"
        "#;

        let settings = from_toml_str(toml).unwrap();
        assert!(!settings.debug);
        assert_eq!(settings.log_level, "roomreg_forms=debug");
        assert_eq!(settings.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_from_toml_str_empty() {
        let settings = from_toml_str("").unwrap();
        assert!(settings.debug);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_from_toml_str_extra_table() {
        let toml = r#"
            [extra]
            ward = "east"
        "#;

        let settings = from_toml_str(toml).unwrap();
        assert_eq!(settings.extra["ward"], "east");
        assert!(settings.debug);
    }

    #[test]
    fn test_from_toml_str_invalid() {
        let result = from_toml_str("[[invalid toml content");
        assert!(matches!(result, Err(RoomRegError::ConfigurationError(_))));
    }

    #[test]
    fn test_from_toml_str_bad_output_format() {
        let result = from_toml_str(r#"output_format = "yaml""#);
        assert!(result.is_err());
    }

    // ── JSON loading ────────────────────────────────────────────────

    #[test]
    fn test_from_json_str_basic() {
        let json = r#"{"debug": false, "log_level": "debug"}"#;
        let settings = from_json_str(json).unwrap();
        assert!(!settings.debug);
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.output_format, OutputFormat::Text);
    }

    #[test]
    fn test_from_json_str_invalid() {
        assert!(from_json_str("{not json").is_err());
    }

    // ── File loading ────────────────────────────────────────────────

    #[test]
    fn test_from_file_picks_toml() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "debug = false").unwrap();

        let settings = from_file(file.path()).unwrap();
        assert!(!settings.debug);
    }

    #[test]
    fn test_from_file_picks_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"output_format": "json"}}"#).unwrap();

        let settings = from_file(file.path()).unwrap();
        assert_eq!(settings.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = from_file(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(RoomRegError::ConfigurationError(_))));
    }

    // ── Overrides ───────────────────────────────────────────────────

    #[test]
    fn test_overrides_debug_values() {
        for (raw, expected) in [("true", true), ("1", true), ("YES", true), ("false", false), ("0", false)] {
            let mut settings = Settings::default();
            settings.debug = !expected;
            apply_overrides_from(&mut settings, lookup_from(&[("ROOMREG_DEBUG", raw)]));
            assert_eq!(settings.debug, expected, "ROOMREG_DEBUG={raw}");
        }
    }

    #[test]
    fn test_overrides_log_level_and_format() {
        let mut settings = Settings::default();
        apply_overrides_from(
            &mut settings,
            lookup_from(&[
                ("ROOMREG_LOG_LEVEL", "warn"),
                ("ROOMREG_OUTPUT_FORMAT", "json"),
            ]),
        );
        assert_eq!(settings.log_level, "warn");
        assert_eq!(settings.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_overrides_ignore_bad_format() {
        let mut settings = Settings::default();
        apply_overrides_from(
            &mut settings,
            lookup_from(&[("ROOMREG_OUTPUT_FORMAT", "xml")]),
        );
        assert_eq!(settings.output_format, OutputFormat::Text);
    }

    #[test]
    fn test_overrides_absent_leave_settings_alone() {
        let mut settings = Settings::default();
        settings.log_level = "trace".to_string();
        apply_overrides_from(&mut settings, |_| None);
        assert_eq!(settings.log_level, "trace");
        assert!(settings.debug);
    }

    // ── Helpers ─────────────────────────────────────────────────────

    #[test]
    fn test_merge_json_nested() {
        let base = serde_json::json!({"a": {"x": 1, "y": 2}});
        let over = serde_json::json!({"a": {"y": 3}});
        let merged = merge_json(base, over);
        assert_eq!(merged["a"]["x"], 1);
        assert_eq!(merged["a"]["y"], 3);
    }

    #[test]
    fn test_merge_json_array_override() {
        let base = serde_json::json!({"list": [1, 2, 3]});
        let over = serde_json::json!({"list": [4]});
        assert_eq!(merge_json(base, over)["list"], serde_json::json!([4]));
    }

    #[test]
    fn test_toml_to_json() {
        let value: toml::Value = toml::from_str("n = 4\nname = \"ICU\"\nok = true").unwrap();
        let json = toml_to_json(value);
        assert_eq!(json["n"], 4);
        assert_eq!(json["name"], "ICU");
        assert_eq!(json["ok"], true);
    }
}
