//! The `register` command.
//!
//! Plays the part of the presentation layer: replays field-change events from
//! a JSON file and from `--set` arguments, submits once, and prints either the
//! accepted record or the error snapshot.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use roomreg_core::{OutputFormat, RoomRegError, RoomRegResult, Settings};
use roomreg_forms::{FormController, Schema, ValidatedRoom};

use crate::command::ManagementCommand;

/// Submits one room record.
pub struct RegisterCommand;

/// Parses a `NAME=VALUE` argument. The value may be empty or contain `=`.
pub fn parse_assignment(arg: &str) -> Result<(String, String), String> {
    arg.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got '{arg}'"))
}

/// Reads field-change events from a JSON object file.
///
/// String values are passed through as typed text; numbers are passed as
/// their decimal text, the way a number input reports them.
pub fn load_events(path: &Path) -> RoomRegResult<Vec<(String, String)>> {
    let content = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    let serde_json::Value::Object(map) = value else {
        return Err(RoomRegError::SerializationError(format!(
            "'{}' must contain a JSON object of field values",
            path.display()
        )));
    };

    map.into_iter()
        .map(|(name, value)| match value {
            serde_json::Value::String(s) => Ok((name, s)),
            serde_json::Value::Number(n) => Ok((name, n.to_string())),
            other => Err(RoomRegError::SerializationError(format!(
                "field '{name}' must be a string or number, got {other}"
            ))),
        })
        .collect()
}

impl ManagementCommand for RegisterCommand {
    fn name(&self) -> &'static str {
        "register"
    }

    fn help(&self) -> &'static str {
        "Fill in the room form and submit it"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("from")
                .long("from")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("JSON object of field values, applied before any --set"),
        )
        .arg(
            clap::Arg::new("set")
                .long("set")
                .short('s')
                .value_name("NAME=VALUE")
                .action(clap::ArgAction::Append)
                .value_parser(parse_assignment)
                .help("Set one field, e.g. --set roomId=A-123 (repeatable, applied in order)"),
        )
        .arg(
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
        let mut events = match matches.get_one::<PathBuf>("from") {
            Some(path) => load_events(path)?,
            None => Vec::new(),
        };
        if let Some(sets) = matches.get_many::<(String, String)>("set") {
            events.extend(sets.cloned());
        }

        let format = if matches.get_flag("json") {
            OutputFormat::Json
        } else {
            settings.output_format
        };

        let mut form = FormController::new(Arc::new(Schema::room()));
        for (name, value) in &events {
            form.set_field(name, value)?;
        }

        let mut accepted: Option<ValidatedRoom> = None;
        form.submit(&mut |room: ValidatedRoom| accepted = Some(room));

        if let Some(room) = accepted {
            return print_accepted(out, format, &room);
        }
        print_rejected(out, format, &form)?;
        Err(RoomRegError::Rejected(form.errors().len()))
    }
}

fn print_accepted(
    out: &mut dyn Write,
    format: OutputFormat,
    room: &ValidatedRoom,
) -> RoomRegResult<()> {
    match format {
        OutputFormat::Json => {
            let body = serde_json::json!({ "status": "accepted", "record": room });
            writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
        }
        OutputFormat::Text => {
            writeln!(out, "Room registered successfully!")?;
            writeln!(out, "{}", serde_json::to_string_pretty(room)?)?;
        }
    }
    Ok(())
}

fn print_rejected(
    out: &mut dyn Write,
    format: OutputFormat,
    form: &FormController,
) -> RoomRegResult<()> {
    match format {
        OutputFormat::Json => {
            let body = serde_json::json!({ "status": "rejected", "errors": form.errors() });
            writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
        }
        OutputFormat::Text => {
            for field in form.bound_fields().iter().filter(|f| f.has_error()) {
                writeln!(out, "{}", field.render_text())?;
            }
        }
    }
    Ok(())
}
