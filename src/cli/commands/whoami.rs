//! Whoami command implementation.

use civic_lib::Result;

use super::print_json;
use crate::config::{CliOverrides, Workspace};
use crate::format::WhoAmI;

/// Execute the whoami command.
///
/// # Errors
///
/// Returns `Validation` if `--role` is not a known role.
pub fn execute(json: bool, workspace: &Workspace, overrides: &CliOverrides) -> Result<()> {
    let who = WhoAmI::new(workspace.current_user(overrides)?);

    if json {
        return print_json(&who);
    }
    let Some(user) = &who.user else {
        println!("Not signed in (reports are anonymous)");
        return Ok(());
    };
    let name = if user.name.is_empty() {
        "(unnamed)"
    } else {
        user.name.as_str()
    };
    println!("{name} <{}> [{}]", user.email, user.role);
    Ok(())
}
