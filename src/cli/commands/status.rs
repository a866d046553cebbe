//! Status command implementation.

use civic_lib::identity::require_admin;
use civic_lib::{AuthorizedStore, Result, Status};

use super::print_json;
use crate::config::{CliOverrides, Workspace};
use crate::format::format_issue_line;

/// Execute the status command.
///
/// The caller must be an admin; that is checked before the status value.
///
/// # Errors
///
/// Returns `Forbidden`, `Validation` for an unknown status, `NotFound`, or
/// `Storage` if the snapshot cannot be written.
pub fn execute(
    id: i64,
    status: &str,
    json: bool,
    workspace: &Workspace,
    overrides: &CliOverrides,
) -> Result<()> {
    let user = workspace.current_user(overrides)?;
    let grant = require_admin(user.as_ref())?;
    let status: Status = status.parse()?;

    let mut store = AuthorizedStore::new(workspace.open_store());
    let issue = store.update_status(&grant, id, status)?;

    if json {
        print_json(&issue)?;
    } else {
        println!("{}", format_issue_line(&issue));
        println!("Status: {}", issue.status.label());
    }
    Ok(())
}
