//! # roomreg-core
//!
//! Foundation types for the roomreg workspace: the operational error type,
//! settings and their loaders, and tracing-based logging setup. This crate has
//! no dependency on the form engine itself.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Runtime settings
//! - [`settings_loader`] - Loading settings from TOML, JSON, and the environment
//! - [`logging`] - Tracing subscriber setup and spans

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;

// Re-export the most commonly used types at the crate root.
pub use error::{RoomRegError, RoomRegResult};
pub use settings::{OutputFormat, Settings};
