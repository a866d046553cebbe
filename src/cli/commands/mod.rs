//! Command implementations.

pub mod delete;
pub mod list;
pub mod report;
pub mod schema;
pub mod show;
pub mod stats;
pub mod status;
pub mod whoami;

use civic_lib::Result;
use serde::Serialize;

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(value)?;
    println!("{output}");
    Ok(())
}
