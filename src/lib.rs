//! `civic_issues` - Civic issue reporting and triage
//!
//! This crate provides the `civic` CLI on top of [`civic_lib`].
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Data directory and `config.yaml` handling
//! - [`format`] - Output formatting (text, JSON)
//! - [`logging`] - tracing subscriber setup

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod format;
pub mod logging;

pub use civic_lib::{CivicError, Result};

/// Parse arguments and run one `civic` command.
///
/// # Errors
///
/// Propagates the command's failure for `main` to report.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
