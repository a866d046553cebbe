//! Output formatting for `civic_issues`.
//!
//! Supports both human-readable text output and machine-parseable JSON.
//!
//! # JSON Output Types
//!
//! - [`Statistics`] - Aggregate counts (stats)
//! - [`WhoAmI`] - Resolved identity (whoami)

mod output;
mod text;

pub use output::{Statistics, WhoAmI};
pub use text::{
    format_category_badge, format_date, format_issue_details, format_issue_line,
    format_status_icon, format_urgency_badge,
};
