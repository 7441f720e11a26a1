//! # roomreg-cli
//!
//! A command-line presentation layer for the room form. Each subcommand is a
//! [`ManagementCommand`] registered in a [`CommandRegistry`], which builds the
//! clap command tree and dispatches to the matching handler.
//!
//! ```rust
//! use roomreg_cli::command::CommandRegistry;
//! use roomreg_cli::commands::register_builtin_commands;
//!
//! let mut registry = CommandRegistry::new();
//! register_builtin_commands(&mut registry);
//!
//! assert_eq!(registry.list_commands(), vec!["register", "schema"]);
//! ```

pub mod command;
pub mod commands;

pub use command::{CommandRegistry, ManagementCommand};
