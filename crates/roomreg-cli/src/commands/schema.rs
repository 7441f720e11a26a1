//! The `schema` command.
//!
//! Describes every field of the room form: label, kind, widget, and the rule
//! chain in evaluation order with each rule's message.

use std::io::Write;

use serde::Serialize;

use roomreg_core::{OutputFormat, RoomRegResult, Settings};
use roomreg_forms::{FieldDef, RoomType, Schema, WidgetType};

use crate::command::ManagementCommand;

/// Prints the room form schema.
pub struct SchemaCommand;

#[derive(Debug, Serialize)]
struct RuleDescription {
    rule: String,
    code: &'static str,
    message: String,
}

#[derive(Debug, Serialize)]
struct FieldDescription {
    name: &'static str,
    label: String,
    kind: String,
    widget: WidgetType,
    rules: Vec<RuleDescription>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    options: Vec<&'static str>,
}

impl From<&FieldDef> for FieldDescription {
    fn from(def: &FieldDef) -> Self {
        let options = if def.widget == WidgetType::Select {
            RoomType::options().collect()
        } else {
            Vec::new()
        };
        Self {
            name: def.name.as_str(),
            label: def.label.clone(),
            kind: def.name.kind().to_string(),
            widget: def.widget,
            rules: def
                .rules
                .iter()
                .map(|rule| RuleDescription {
                    rule: rule.to_string(),
                    code: rule.code(),
                    message: rule.message().to_string(),
                })
                .collect(),
            options,
        }
    }
}

/// Describes a schema's fields in validation order.
fn describe(schema: &Schema) -> Vec<FieldDescription> {
    schema.fields().iter().map(FieldDescription::from).collect()
}

impl ManagementCommand for SchemaCommand {
    fn name(&self) -> &'static str {
        "schema"
    }

    fn help(&self) -> &'static str {
        "Show the fields of the room form and their rules"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("json")
                .long("json")
                .action(clap::ArgAction::SetTrue)
                .help("Print JSON regardless of the configured output format"),
        )
    }

    fn handle(
        &self,
        matches: &clap::ArgMatches,
        settings: &Settings,
        out: &mut dyn Write,
    ) -> RoomRegResult<()> {
        let fields = describe(&Schema::room());
        let json = matches.get_flag("json") || settings.output_format == OutputFormat::Json;

        if json {
            writeln!(out, "{}", serde_json::to_string_pretty(&fields)?)?;
            return Ok(());
        }

        for field in &fields {
            writeln!(out, "{} ({}, {})", field.label, field.name, field.kind)?;
            for (step, rule) in field.rules.iter().enumerate() {
                writeln!(out, "  {}. {} -> \"{}\"", step + 1, rule.rule, rule.message)?;
            }
            if !field.options.is_empty() {
                writeln!(out, "  options: {}", field.options.join(", "))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_room_schema() {
        let fields = describe(&Schema::room());
        assert_eq!(fields.len(), 6);
        assert_eq!(fields[0].name, "roomName");
        assert_eq!(fields[0].rules.len(), 3);
        assert_eq!(fields[0].rules[0].code, "min_length");
        assert_eq!(fields[1].options.first(), Some(&"Select"));
        assert!(fields[2].options.is_empty());
        assert_eq!(fields[5].kind, "integer");
    }

    #[test]
    fn test_options_omitted_from_json_when_empty() {
        let fields = describe(&Schema::room());
        let json = serde_json::to_value(&fields).unwrap();
        assert!(json[0].get("options").is_none());
        assert_eq!(json[1]["options"][0], "Select");
    }
}
