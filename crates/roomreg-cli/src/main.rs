//! The `roomreg` binary.
//!
//! ```bash
//! roomreg register --set roomName="ICU Ward" --set roomType=ICU --set roomId=A-123 \
//!     --set floorName=3rd --set extensionNumber=204 --set patientOccupyingBedCapacity=4
//! roomreg schema --json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use roomreg_cli::command::CommandRegistry;
use roomreg_cli::commands::register_builtin_commands;
use roomreg_core::logging::setup_logging;
use roomreg_core::{settings_loader, RoomRegError, RoomRegResult, Settings};

fn load_settings(matches: &clap::ArgMatches) -> RoomRegResult<Settings> {
    let config = matches
        .subcommand()
        .and_then(|(_, sub)| sub.get_one::<PathBuf>("config"))
        .or_else(|| matches.get_one::<PathBuf>("config"));

    match config {
        Some(path) => settings_loader::from_file_with_env(path),
        None => Ok(settings_loader::from_env()),
    }
}

fn main() -> ExitCode {
    let mut registry = CommandRegistry::new();
    register_builtin_commands(&mut registry);

    let matches = registry.build_cli().get_matches();

    let settings = match load_settings(&matches) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("error: {e}");
            return exit_code(&e);
        }
    };
    setup_logging(&settings);
    tracing::debug!(
        debug = settings.debug,
        output_format = %settings.output_format,
        "Settings loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match registry.execute(&matches, &settings, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        // The error snapshot has already been printed.
        Err(e @ RoomRegError::Rejected(_)) => exit_code(&e),
        Err(e) => {
            eprintln!("error: {e}");
            exit_code(&e)
        }
    }
}

fn exit_code(err: &RoomRegError) -> ExitCode {
    u8::try_from(err.exit_code()).map_or(ExitCode::FAILURE, ExitCode::from)
}
