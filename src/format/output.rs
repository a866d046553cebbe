use std::collections::BTreeMap;

use civic_lib::{CurrentUser, Summary};
use serde::{Deserialize, Serialize};

/// Aggregate statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total: usize,
    pub by_status: BTreeMap<String, usize>,
    pub by_category: BTreeMap<String, usize>,
}

impl From<&Summary> for Statistics {
    fn from(summary: &Summary) -> Self {
        Self {
            total: summary.total,
            by_status: summary
                .by_status
                .iter()
                .map(|(s, n)| (s.as_str().to_string(), *n))
                .collect(),
            by_category: summary
                .by_category
                .iter()
                .map(|(c, n)| (c.as_str().to_string(), *n))
                .collect(),
        }
    }
}

/// Identity as seen by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhoAmI {
    pub user: Option<CurrentUser>,
    pub admin: bool,
}

impl WhoAmI {
    #[must_use]
    pub fn new(user: Option<CurrentUser>) -> Self {
        let admin = user.as_ref().is_some_and(CurrentUser::is_admin);
        Self { user, admin }
    }
}
