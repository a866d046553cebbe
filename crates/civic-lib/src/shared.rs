//! Thread-safe handle to an [`IssueStore`].
//!
//! Each operation holds the lock across its whole read-modify-persist
//! sequence, so concurrent callers see mutations in a single order.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{CivicError, Result};
use crate::model::{Issue, IssueInput, Status};
use crate::slot::Slot;
use crate::store::IssueStore;

/// Cloneable, `Send + Sync` wrapper around an issue store.
pub struct SharedIssueStore<S: Slot> {
    inner: Arc<Mutex<IssueStore<S>>>,
}

impl<S: Slot> Clone for SharedIssueStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Slot> SharedIssueStore<S> {
    #[must_use]
    pub fn new(store: IssueStore<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, IssueStore<S>>> {
        self.inner
            .lock()
            .map_err(|_| CivicError::Storage("issue store lock poisoned".to_string()))
    }

    /// # Errors
    ///
    /// Same as [`IssueStore::create`], or `Storage` if the lock is poisoned.
    pub fn create(&self, input: IssueInput) -> Result<Issue> {
        self.lock()?.create(input)
    }

    /// # Errors
    ///
    /// Same as [`IssueStore::update_status`], or `Storage` if the lock is poisoned.
    pub fn update_status(&self, id: i64, status: Status) -> Result<Issue> {
        self.lock()?.update_status(id, status)
    }

    /// # Errors
    ///
    /// Same as [`IssueStore::delete`], or `Storage` if the lock is poisoned.
    pub fn delete(&self, id: i64) -> Result<()> {
        self.lock()?.delete(id)
    }

    /// # Errors
    ///
    /// Returns `Storage` if the lock is poisoned.
    pub fn get_by_id(&self, id: i64) -> Result<Option<Issue>> {
        Ok(self.lock()?.get_by_id(id).cloned())
    }

    /// Copy of the collection, newest first.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the lock is poisoned.
    pub fn all(&self) -> Result<Vec<Issue>> {
        Ok(self.lock()?.all().to_vec())
    }

    /// Run `f` with exclusive access to the store.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the lock is poisoned.
    pub fn with<T>(&self, f: impl FnOnce(&mut IssueStore<S>) -> T) -> Result<T> {
        Ok(f(&mut *self.lock()?))
    }
}
