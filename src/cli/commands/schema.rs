//! Schema command implementation.

use civic_lib::{Issue, Result};

use super::print_json;

/// Print the JSON schema of the issues snapshot.
///
/// # Errors
///
/// Returns an error if the schema cannot be serialized.
pub fn execute() -> Result<()> {
    let schema = schemars::schema_for!(Vec<Issue>);
    print_json(&schema)
}
