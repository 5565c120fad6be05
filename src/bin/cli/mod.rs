//! CLI Module Organization
//!
//! - args: CLI argument structures and value enums
//! - commands: command execution
//! - config_layer: configuration layer management and merging
//! - output: report output and summaries
//! - quality_gates: exit-status handling

pub mod args;
pub mod commands;
pub mod config_layer;
pub mod output;
pub mod quality_gates;

pub use args::*;
pub use commands::*;
