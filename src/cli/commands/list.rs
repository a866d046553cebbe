//! List command implementation.

use std::collections::HashSet;

use civic_lib::view::{filter_by, for_user};
use civic_lib::{Category, CivicError, Identity, Issue, IssueFilter, Result, Status};

use super::print_json;
use crate::cli::ListArgs;
use crate::config::{CliOverrides, Workspace};
use crate::format::format_issue_line;

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if a filter value is invalid or `--mine` is given
/// without an identity.
pub fn execute(
    args: &ListArgs,
    json: bool,
    workspace: &Workspace,
    overrides: &CliOverrides,
) -> Result<()> {
    let filter = build_filter(args)?;
    let store = workspace.open_store();

    let identity = if args.mine {
        let user = workspace
            .current_user(overrides)?
            .ok_or_else(|| CivicError::validation("mine", "requires a signed-in user"))?;
        Some(user.identity())
    } else {
        None
    };
    let issues = select(store.all(), identity.as_ref(), &filter);

    if json {
        return print_json(&issues);
    }

    if issues.is_empty() {
        println!("No issues found.");
        return Ok(());
    }
    for issue in &issues {
        println!("{}", format_issue_line(issue));
    }
    println!("\n{} issue(s)", issues.len());
    Ok(())
}

/// `"all"` (any case) means no constraint on that dimension.
fn parse_criterion<T>(value: Option<&str>) -> Result<Option<T>>
where
    T: std::str::FromStr<Err = CivicError>,
{
    match value.map(str::trim) {
        None => Ok(None),
        Some(v) if v.eq_ignore_ascii_case("all") => Ok(None),
        Some(v) => v.parse().map(Some),
    }
}

/// Records matching `filter`, narrowed to `identity`'s own when given.
fn select<'a>(
    issues: &'a [Issue],
    identity: Option<&Identity>,
    filter: &IssueFilter,
) -> Vec<&'a Issue> {
    let Some(identity) = identity else {
        return filter_by(issues, filter);
    };
    let own: HashSet<i64> = for_user(issues, identity).iter().map(|i| i.id).collect();
    filter_by(issues, filter)
        .into_iter()
        .filter(|issue| own.contains(&issue.id))
        .collect()
}

fn build_filter(args: &ListArgs) -> Result<IssueFilter> {
    Ok(IssueFilter {
        status: parse_criterion::<Status>(args.status.as_deref())?,
        category: parse_criterion::<Category>(args.category.as_deref())?,
        search: args.search.clone().filter(|s| !s.trim().is_empty()),
    })
}
