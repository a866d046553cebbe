//! Delete command implementation.

use civic_lib::identity::require_admin;
use civic_lib::{AuthorizedStore, Result};
use serde::Serialize;

use super::print_json;
use crate::config::{CliOverrides, Workspace};

#[derive(Serialize)]
struct DeleteResult {
    id: i64,
    deleted: bool,
}

/// Execute the delete command.
///
/// Deleting an ID that doesn't exist succeeds and reports `deleted: false`.
///
/// # Errors
///
/// Returns `Forbidden` for non-admins, or `Storage` if the snapshot cannot
/// be written.
pub fn execute(id: i64, json: bool, workspace: &Workspace, overrides: &CliOverrides) -> Result<()> {
    let user = workspace.current_user(overrides)?;
    let grant = require_admin(user.as_ref())?;

    let mut store = AuthorizedStore::new(workspace.open_store());
    let existed = store.get_by_id(id).is_some();
    store.delete(&grant, id)?;

    if json {
        print_json(&DeleteResult {
            id,
            deleted: existed,
        })?;
    } else if existed {
        println!("Deleted #{id}");
    } else {
        println!("No issue #{id}; nothing to delete");
    }
    Ok(())
}
