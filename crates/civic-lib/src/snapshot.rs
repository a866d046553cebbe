//! Snapshot encoding for the issue collection.
//!
//! A snapshot is a JSON array of issues in head-first order, written
//! whole into a single [`Slot`].

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::{CivicError, Result};
use crate::model::Issue;
use crate::slot::Slot;

/// Parse snapshot text.
///
/// # Errors
///
/// Returns `Json` if the text is not an array of issue records, or
/// `Storage` if two records share an ID.
pub fn parse(text: &str) -> Result<Vec<Issue>> {
    let issues: Vec<Issue> = serde_json::from_str(text)?;

    let mut seen = HashSet::with_capacity(issues.len());
    for issue in &issues {
        if !seen.insert(issue.id) {
            return Err(CivicError::Storage(format!(
                "snapshot contains duplicate issue id {}",
                issue.id
            )));
        }
    }

    Ok(issues)
}

/// Serialize issues in the given order.
///
/// # Errors
///
/// Returns `Json` if serialization fails.
pub fn encode(issues: &[Issue]) -> Result<String> {
    Ok(serde_json::to_string(issues)?)
}

/// Read the collection from `slot`.
///
/// An empty slot, an unreadable slot, and a malformed snapshot all yield
/// an empty collection. Malformed data is discarded whole.
#[must_use]
pub fn load(slot: &dyn Slot) -> Vec<Issue> {
    let text = match slot.read() {
        Ok(Some(text)) => text,
        Ok(None) => {
            debug!(slot = slot.name(), "No snapshot; starting empty");
            return Vec::new();
        }
        Err(e) => {
            warn!(slot = slot.name(), error = %e, "Failed to read snapshot; starting empty");
            return Vec::new();
        }
    };

    match parse(&text) {
        Ok(issues) => {
            debug!(slot = slot.name(), count = issues.len(), "Loaded snapshot");
            issues
        }
        Err(e) => {
            warn!(slot = slot.name(), error = %e, "Discarding malformed snapshot");
            Vec::new()
        }
    }
}

/// Write the whole collection to `slot`.
///
/// # Errors
///
/// Returns `Json` if encoding fails or `Storage` if the slot rejects the write.
pub fn save(slot: &dyn Slot, issues: &[Issue]) -> Result<()> {
    let text = encode(issues)?;
    slot.write(&text)?;
    debug!(slot = slot.name(), count = issues.len(), "Saved snapshot");
    Ok(())
}
