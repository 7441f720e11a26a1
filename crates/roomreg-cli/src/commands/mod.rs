//! Built-in commands.
//!
//! Each command implements [`ManagementCommand`](crate::command::ManagementCommand).

pub mod register;
pub mod schema;

pub use register::RegisterCommand;
pub use schema::SchemaCommand;

use crate::command::CommandRegistry;

/// Registers all built-in commands into the given registry.
pub fn register_builtin_commands(registry: &mut CommandRegistry) {
    registry.register(Box::new(RegisterCommand));
    registry.register(Box::new(SchemaCommand));
}
