//! Subcommand handlers for the errlines binary.

pub mod completions;
pub mod config;
pub mod extract;
