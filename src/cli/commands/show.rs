//! Show command implementation.

use civic_lib::{CivicError, Result};

use super::print_json;
use crate::config::Workspace;
use crate::format::format_issue_details;

/// Execute the show command.
///
/// # Errors
///
/// Returns `NotFound` if no issue has this ID.
pub fn execute(id: i64, json: bool, workspace: &Workspace) -> Result<()> {
    let store = workspace.open_store();
    let issue = store.get_by_id(id).ok_or(CivicError::NotFound { id })?;

    if json {
        print_json(issue)?;
    } else {
        println!("{}", format_issue_details(issue));
    }
    Ok(())
}
