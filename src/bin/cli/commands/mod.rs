//! CLI Command Implementations
//!
//! - check: scan stylesheets
//! - names: check names given on the command line
//! - config: configuration management commands
//! - rules: rule catalogue

pub mod check;
pub mod config;
pub mod names;
pub mod rules;

pub use check::check_command;
pub use config::{init_config, print_default_config, validate_config};
pub use names::names_command;
pub use rules::list_rules;
