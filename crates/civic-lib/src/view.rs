//! Filtered and aggregated views over an issue collection.
//!
//! Every function here is a pure function of its inputs and preserves the
//! source order, which for store collections is newest first.

use serde::{Deserialize, Serialize};

use crate::identity::Identity;
use crate::model::{Category, Issue, Status};

/// Filter criteria for dashboard and map listings.
///
/// `None` means "all" for that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueFilter {
    pub status: Option<Status>,
    pub category: Option<Category>,
    /// Case-insensitive substring of title or description.
    pub search: Option<String>,
}

impl IssueFilter {
    /// True when no criterion constrains the result.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.status.is_none()
            && self.category.is_none()
            && self.search.as_deref().is_none_or(str::is_empty)
    }

    fn matches(&self, issue: &Issue, search_lower: Option<&str>) -> bool {
        if self.status.is_some_and(|s| s != issue.status) {
            return false;
        }
        if self.category.is_some_and(|c| c != issue.category) {
            return false;
        }
        if let Some(query) = search_lower {
            if !issue.title.to_lowercase().contains(query)
                && !issue.description.to_lowercase().contains(query)
            {
                return false;
            }
        }
        true
    }
}

/// Records matching all criteria in `filter`.
#[must_use]
pub fn filter_by<'a>(issues: &'a [Issue], filter: &IssueFilter) -> Vec<&'a Issue> {
    let search_lower = filter
        .search
        .as_deref()
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);

    issues
        .iter()
        .filter(|issue| filter.matches(issue, search_lower.as_deref()))
        .collect()
}

/// A single field value to count by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Status(Status),
    Category(Category),
}

/// Number of records whose field equals the facet value.
#[must_use]
pub fn count_by(issues: &[Issue], facet: Facet) -> usize {
    issues
        .iter()
        .filter(|issue| match facet {
            Facet::Status(status) => issue.status == status,
            Facet::Category(category) => issue.category == category,
        })
        .count()
}

/// Records attributable to `identity` by user ID or by email.
///
/// Absent identity fields never match anything.
#[must_use]
pub fn for_user<'a>(issues: &'a [Issue], identity: &Identity) -> Vec<&'a Issue> {
    let email = identity.email.as_deref().filter(|e| !e.is_empty());

    issues
        .iter()
        .filter(|issue| {
            let id_match = identity.id.is_some() && issue.user_id == identity.id;
            let email_match = email.is_some_and(|e| issue.user_email == e);
            id_match || email_match
        })
        .collect()
}

/// Aggregate counts for dashboards and map legends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    /// One entry per status, in `Status::ALL` order.
    pub by_status: Vec<(Status, usize)>,
    /// One entry per category, in `Category::ALL` order, zeros included.
    pub by_category: Vec<(Category, usize)>,
}

impl Summary {
    #[must_use]
    pub fn status_count(&self, status: Status) -> usize {
        self.by_status
            .iter()
            .find(|(s, _)| *s == status)
            .map_or(0, |(_, n)| *n)
    }

    #[must_use]
    pub fn category_count(&self, category: Category) -> usize {
        self.by_category
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(0, |(_, n)| *n)
    }
}

/// Count every status and category in one pass.
#[must_use]
pub fn summarize<'a, I>(issues: I) -> Summary
where
    I: IntoIterator<Item = &'a Issue>,
{
    let mut by_status: Vec<(Status, usize)> = Status::ALL.iter().map(|s| (*s, 0)).collect();
    let mut by_category: Vec<(Category, usize)> =
        Category::ALL.iter().map(|c| (*c, 0)).collect();
    let mut total = 0;

    for issue in issues {
        total += 1;
        if let Some(entry) = by_status.iter_mut().find(|(s, _)| *s == issue.status) {
            entry.1 += 1;
        }
        if let Some(entry) = by_category.iter_mut().find(|(c, _)| *c == issue.category) {
            entry.1 += 1;
        }
    }

    Summary {
        total,
        by_status,
        by_category,
    }
}
