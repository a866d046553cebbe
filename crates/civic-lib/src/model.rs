//! Core data types for civic-lib.
//!
//! Field names serialize in camelCase so snapshots match the browser
//! `civic-issues` layout.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CivicError;
use crate::image::ImageAttachment;

/// Display name used when a report has no known reporter.
pub const ANONYMOUS_REPORTER: &str = "Anonymous";

/// Issue triage status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Pending,
    InProgress,
    Resolved,
}

impl Status {
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Resolved];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
        }
    }

    /// Human-readable label shown on dashboards.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending Review",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = CivicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "in-progress" | "in_progress" | "inprogress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            other => Err(CivicError::validation(
                "status",
                format!("unrecognized value '{other}' (expected pending, in-progress, resolved)"),
            )),
        }
    }
}

/// Issue category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Roads,
    Sanitation,
    Water,
    Electricity,
    Parks,
    Other,
}

impl Category {
    pub const ALL: [Self; 6] = [
        Self::Roads,
        Self::Sanitation,
        Self::Water,
        Self::Electricity,
        Self::Parks,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Roads => "roads",
            Self::Sanitation => "sanitation",
            Self::Water => "water",
            Self::Electricity => "electricity",
            Self::Parks => "parks",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = CivicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "roads" => Ok(Self::Roads),
            "sanitation" => Ok(Self::Sanitation),
            "water" => Ok(Self::Water),
            "electricity" => Ok(Self::Electricity),
            "parks" => Ok(Self::Parks),
            "other" => Ok(Self::Other),
            "" => Err(CivicError::validation("category", "is required")),
            other => Err(CivicError::validation(
                "category",
                format!("unrecognized value '{other}'"),
            )),
        }
    }
}

/// How urgently a report needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
}

impl Urgency {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = CivicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(CivicError::validation(
                "urgency",
                format!("unrecognized value '{other}' (expected low, medium, high)"),
            )),
        }
    }
}

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Finite, with latitude in [-90, 90] and longitude in [-180, 180].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}

/// A reported civic issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Unique, monotonically assigned ID.
    pub id: i64,

    pub title: String,

    pub description: String,

    pub category: Category,

    #[serde(default)]
    pub urgency: Urgency,

    pub location: Location,

    /// Photo as a `data:` URL.
    #[serde(default)]
    pub image: Option<String>,

    /// Reporter display name.
    #[serde(default = "anonymous")]
    pub reported_by: String,

    /// Reporter email, empty when unknown.
    #[serde(default)]
    pub user_email: String,

    /// Reporter user ID.
    #[serde(default)]
    pub user_id: Option<i64>,

    pub status: Status,

    /// Creation timestamp, immutable.
    pub created_at: DateTime<Utc>,
}

fn anonymous() -> String {
    ANONYMOUS_REPORTER.to_string()
}

impl Issue {
    /// A record is anonymous when it carries neither a user ID nor an email.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.user_id.is_none() && self.user_email.is_empty()
    }
}

/// Caller-supplied fields for a new issue.
///
/// `id`, `status` and `created_at` are assigned by the store.
#[derive(Debug, Clone, Default)]
pub struct IssueInput {
    pub title: String,
    pub description: String,
    pub category: Option<Category>,
    pub urgency: Urgency,
    pub location: Option<Location>,
    pub image: Option<ImageAttachment>,
    pub reported_by: Option<String>,
    pub user_email: Option<String>,
    pub user_id: Option<i64>,
}

impl IssueInput {
    /// Fill the reporter fields from the current user, if any.
    #[must_use]
    pub fn reported_by_user(mut self, user: Option<&crate::identity::CurrentUser>) -> Self {
        match user {
            Some(user) => {
                self.reported_by = Some(user.name.clone()).filter(|n| !n.trim().is_empty());
                self.user_email = Some(user.email.clone()).filter(|e| !e.is_empty());
                self.user_id = user.id;
            }
            None => {
                self.reported_by = None;
                self.user_email = None;
                self.user_id = None;
            }
        }
        self
    }
}
