//! Issue store backed by a durable slot.
//!
//! Provides create, status update, delete and lookup over the issue
//! collection. Every mutation writes a full snapshot before returning.

use chrono::Utc;
use tracing::{info, warn};

use crate::error::{CivicError, Result};
use crate::model::{ANONYMOUS_REPORTER, Issue, IssueInput, Status};
use crate::slot::{FileSlot, Slot};
use crate::snapshot;
use crate::util::generate_id;
use crate::validation::IssueInputValidator;

/// Owner of the civic issue collection.
///
/// Records are kept newest first. In-memory state is authoritative: if a
/// snapshot write fails the mutation stays applied, the error is returned,
/// and the store is marked dirty until [`IssueStore::flush`] succeeds. A
/// restart before that may lose the most recent mutation.
pub struct IssueStore<S: Slot = FileSlot> {
    issues: Vec<Issue>,
    slot: S,
    high_water: i64,
    dirty: bool,
}

impl<S: Slot> IssueStore<S> {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Create a store bound to `slot` and load its snapshot.
    #[must_use]
    pub fn open(slot: S) -> Self {
        let mut store = Self {
            issues: Vec::new(),
            slot,
            high_water: 0,
            dirty: false,
        };
        store.load();
        store
    }

    /// Replace the in-memory collection with the slot's snapshot.
    ///
    /// Missing or malformed snapshots load as an empty collection.
    pub fn load(&mut self) -> &[Issue] {
        self.issues = snapshot::load(&self.slot);
        if let Some(max) = self.issues.iter().map(|i| i.id).max() {
            self.high_water = self.high_water.max(max);
        }
        self.dirty = false;
        &self.issues
    }

    /// Rewrite the snapshot from memory.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the slot rejects the write.
    pub fn flush(&mut self) -> Result<()> {
        self.persist()
    }

    /// True while memory holds mutations the slot has not accepted.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The backing slot.
    #[must_use]
    pub const fn slot(&self) -> &S {
        &self.slot
    }

    // ========================================================================
    // CRUD
    // ========================================================================

    /// Create a new issue from caller input.
    ///
    /// The record gets a fresh ID, `created_at = now` and `pending` status,
    /// and is placed at the head of the collection.
    ///
    /// # Errors
    ///
    /// Returns `Validation`/`ValidationErrors` for bad input or `Storage`
    /// when no larger ID is left; the collection is untouched in both
    /// cases. Also returns `Storage` if the snapshot write fails, in which
    /// case the record has still been added.
    pub fn create(&mut self, input: IssueInput) -> Result<Issue> {
        IssueInputValidator::validate(&input).map_err(CivicError::from_validation_errors)?;

        let (Some(category), Some(location)) = (input.category, input.location) else {
            return Err(CivicError::validation("input", "incomplete after validation"));
        };

        let now = Utc::now();
        let id = generate_id(now, self.high_water, |id| {
            self.issues.iter().any(|i| i.id == id)
        })
        .ok_or_else(|| CivicError::Storage("issue id space exhausted".to_string()))?;

        let issue = Issue {
            id,
            title: input.title,
            description: input.description,
            category,
            urgency: input.urgency,
            location,
            image: input.image.map(crate::image::ImageAttachment::into_data_url),
            reported_by: input
                .reported_by
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| ANONYMOUS_REPORTER.to_string()),
            user_email: input.user_email.unwrap_or_default(),
            user_id: input.user_id,
            status: Status::Pending,
            created_at: now,
        };

        self.high_water = id;
        self.issues.insert(0, issue.clone());
        info!(id, category = %issue.category, "Created issue");

        self.persist()?;
        Ok(issue)
    }

    /// Change the status of an issue. No other field is touched.
    ///
    /// Any status may follow any other. Authorization is the caller's
    /// concern; see [`crate::AuthorizedStore`].
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the issue doesn't exist (nothing is written),
    /// or `Storage` if the snapshot write fails (the change still applies).
    pub fn update_status(&mut self, id: i64, status: Status) -> Result<Issue> {
        let issue = self
            .issues
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(CivicError::NotFound { id })?;

        let old = issue.status;
        issue.status = status;
        let updated = issue.clone();
        info!(id, from = %old, to = %status, "Updated issue status");

        self.persist()?;
        Ok(updated)
    }

    /// Delete an issue. Deleting a missing ID is a no-op.
    ///
    /// The snapshot is written either way.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the snapshot write fails.
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let before = self.issues.len();
        self.issues.retain(|i| i.id != id);
        if self.issues.len() == before {
            info!(id, "Delete of absent issue ignored");
        } else {
            info!(id, "Deleted issue");
        }

        self.persist()
    }

    /// Get a single issue by ID.
    #[must_use]
    pub fn get_by_id(&self, id: i64) -> Option<&Issue> {
        self.issues.iter().find(|i| i.id == id)
    }

    /// All issues, newest first.
    #[must_use]
    pub fn all(&self) -> &[Issue] {
        &self.issues
    }

    /// Get the total number of issues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    fn persist(&mut self) -> Result<()> {
        match snapshot::save(&self.slot, &self.issues) {
            Ok(()) => {
                self.dirty = false;
                Ok(())
            }
            Err(e) => {
                self.dirty = true;
                warn!(
                    slot = self.slot.name(),
                    error = %e,
                    "Snapshot write failed; keeping in-memory changes"
                );
                Err(e)
            }
        }
    }
}
