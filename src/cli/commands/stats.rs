//! Stats command implementation.

use civic_lib::view::summarize;
use civic_lib::Result;

use super::print_json;
use crate::config::Workspace;
use crate::format::Statistics;

/// Execute the stats command.
///
/// # Errors
///
/// Returns an error if JSON output cannot be serialized.
pub fn execute(json: bool, workspace: &Workspace) -> Result<()> {
    let store = workspace.open_store();
    let summary = summarize(store.all());

    if json {
        return print_json(&Statistics::from(&summary));
    }

    println!("Total: {}", summary.total);
    println!("\nBy status:");
    for (status, count) in &summary.by_status {
        println!("  {:<16} {count}", status.label());
    }
    println!("\nBy category:");
    for (category, count) in &summary.by_category {
        println!("  {:<16} {count}", category.as_str());
    }
    Ok(())
}
