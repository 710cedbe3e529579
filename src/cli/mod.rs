// src/cli/mod.rs
//! CLI command handlers.

pub mod args;
pub mod handlers;
pub mod prompt;

pub use args::Cli;
