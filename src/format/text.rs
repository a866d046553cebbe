//! Text formatting functions for `civic_issues`.
//!
//! Provides plain text (non-ANSI) formatting for terminal output:
//! - Status icons (○ ◐ ✓)
//! - Urgency and category badges ([high], [roads], etc.)
//! - Issue line and detail formatting

use chrono::{DateTime, Utc};
use civic_lib::{Category, Issue, Status, Urgency};

/// Status icon characters.
pub mod icons {
    /// Pending - awaiting review (hollow circle).
    pub const PENDING: &str = "○";
    /// In progress - being worked on (half-filled).
    pub const IN_PROGRESS: &str = "◐";
    /// Resolved - fixed (checkmark).
    pub const RESOLVED: &str = "✓";
}

/// Return the icon character for a status.
#[must_use]
pub const fn format_status_icon(status: &Status) -> &'static str {
    match status {
        Status::Pending => icons::PENDING,
        Status::InProgress => icons::IN_PROGRESS,
        Status::Resolved => icons::RESOLVED,
    }
}

/// Format urgency as a bracketed badge.
#[must_use]
pub fn format_urgency_badge(urgency: &Urgency) -> String {
    format!("[{}]", urgency.as_str())
}

/// Format category as a bracketed badge.
#[must_use]
pub fn format_category_badge(category: &Category) -> String {
    format!("[{}]", category.as_str())
}

/// Format a timestamp as a short calendar date, e.g. `31 May 2024`.
#[must_use]
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%d %b %Y").to_string()
}

/// Format a single-line issue summary.
///
/// Format: `{icon} #{id} [{urgency}] [{category}] {title}`
#[must_use]
pub fn format_issue_line(issue: &Issue) -> String {
    format!(
        "{} #{} {} {} {}",
        format_status_icon(&issue.status),
        issue.id,
        format_urgency_badge(&issue.urgency),
        format_category_badge(&issue.category),
        issue.title,
    )
}

/// Format the full record for `show`.
#[must_use]
pub fn format_issue_details(issue: &Issue) -> String {
    let mut out = format!("{}\n", format_issue_line(issue));
    out.push_str(&format!("Status:      {}\n", issue.status.label()));
    out.push_str(&format!("Location:    {}\n", issue.location));
    out.push_str(&format!("Reported by: {}", issue.reported_by));
    if !issue.user_email.is_empty() {
        out.push_str(&format!(" <{}>", issue.user_email));
    }
    out.push('\n');
    out.push_str(&format!("Reported on: {}\n", format_date(&issue.created_at)));
    if let Some(image) = issue.image.as_deref() {
        let mime = image
            .strip_prefix("data:")
            .and_then(|rest| rest.split(';').next())
            .unwrap_or("unknown");
        out.push_str(&format!("Photo:       attached ({mime})\n"));
    }
    out.push('\n');
    out.push_str(&issue.description);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use civic_lib::Location;

    fn make_test_issue() -> Issue {
        Issue {
            id: 17,
            title: "Test title".to_string(),
            description: "Test description".to_string(),
            category: Category::Roads,
            urgency: Urgency::Medium,
            location: Location::new(19.07, 72.87),
            image: None,
            reported_by: "Test User".to_string(),
            user_email: "user@example.com".to_string(),
            user_id: Some(1),
            status: Status::Pending,
            created_at: Utc.with_ymd_and_hms(2024, 5, 31, 16, 8, 37).unwrap(),
        }
    }

    #[test]
    fn test_status_icons() {
        assert_eq!(format_status_icon(&Status::Pending), "○");
        assert_eq!(format_status_icon(&Status::InProgress), "◐");
        assert_eq!(format_status_icon(&Status::Resolved), "✓");
    }

    #[test]
    fn test_badges() {
        assert_eq!(format_urgency_badge(&Urgency::High), "[high]");
        assert_eq!(format_category_badge(&Category::Sanitation), "[sanitation]");
    }

    #[test]
    fn test_format_issue_line_pending() {
        let issue = make_test_issue();
        let line = format_issue_line(&issue);
        assert_eq!(line, "○ #17 [medium] [roads] Test title");
    }

    #[test]
    fn test_format_issue_line_resolved() {
        let mut issue = make_test_issue();
        issue.status = Status::Resolved;
        assert!(format_issue_line(&issue).starts_with("✓"));
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&make_test_issue().created_at), "31 May 2024");
    }

    #[test]
    fn test_format_issue_details() {
        let mut issue = make_test_issue();
        issue.image = Some("data:image/png;base64,AAAA".to_string());
        let details = format_issue_details(&issue);
        assert!(details.contains("Status:      Pending Review"));
        assert!(details.contains("Reported by: Test User <user@example.com>"));
        assert!(details.contains("Photo:       attached (image/png)"));
        assert!(details.ends_with("Test description"));
    }
}
