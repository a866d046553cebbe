//! Authorization boundary around the store's admin operations.

use crate::error::Result;
use crate::identity::AdminGrant;
use crate::model::{Issue, IssueInput, Status};
use crate::slot::Slot;
use crate::store::IssueStore;

/// An [`IssueStore`] whose status changes and deletes require an
/// [`AdminGrant`].
///
/// Reads and `create` stay open to every caller.
pub struct AuthorizedStore<S: Slot> {
    inner: IssueStore<S>,
}

impl<S: Slot> AuthorizedStore<S> {
    #[must_use]
    pub const fn new(inner: IssueStore<S>) -> Self {
        Self { inner }
    }

    /// Read access to the wrapped store.
    #[must_use]
    pub const fn store(&self) -> &IssueStore<S> {
        &self.inner
    }

    #[must_use]
    pub fn into_inner(self) -> IssueStore<S> {
        self.inner
    }

    /// See [`IssueStore::create`].
    ///
    /// # Errors
    ///
    /// Same as [`IssueStore::create`].
    pub fn create(&mut self, input: IssueInput) -> Result<Issue> {
        self.inner.create(input)
    }

    /// See [`IssueStore::update_status`].
    ///
    /// # Errors
    ///
    /// Same as [`IssueStore::update_status`].
    pub fn update_status(&mut self, _grant: &AdminGrant, id: i64, status: Status) -> Result<Issue> {
        self.inner.update_status(id, status)
    }

    /// See [`IssueStore::delete`].
    ///
    /// # Errors
    ///
    /// Same as [`IssueStore::delete`].
    pub fn delete(&mut self, _grant: &AdminGrant, id: i64) -> Result<()> {
        self.inner.delete(id)
    }

    #[must_use]
    pub fn get_by_id(&self, id: i64) -> Option<&Issue> {
        self.inner.get_by_id(id)
    }

    #[must_use]
    pub fn all(&self) -> &[Issue] {
        self.inner.all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CivicError;
    use crate::identity::{CurrentUser, Role, require_admin};
    use crate::model::{Category, Location};
    use crate::slot::MemorySlot;

    fn user(role: Role) -> CurrentUser {
        CurrentUser {
            id: Some(1),
            email: "someone@example.com".to_string(),
            name: "Someone".to_string(),
            role,
        }
    }

    fn input() -> IssueInput {
        IssueInput {
            title: "Overflowing bin".to_string(),
            description: "Not collected for a week".to_string(),
            category: Some(Category::Sanitation),
            location: Some(Location::new(28.61, 77.21)),
            ..Default::default()
        }
    }

    #[test]
    fn admin_can_update_and_delete() {
        let mut store = AuthorizedStore::new(IssueStore::open(MemorySlot::new("civic-issues")));
        let created = store.create(input()).unwrap();
        let grant = user(Role::Admin).require_admin().unwrap();

        let updated = store
            .update_status(&grant, created.id, Status::InProgress)
            .unwrap();
        assert_eq!(updated.status, Status::InProgress);

        store.delete(&grant, created.id).unwrap();
        assert!(store.get_by_id(created.id).is_none());
    }

    #[test]
    fn non_admin_cannot_obtain_grant() {
        let mut store = AuthorizedStore::new(IssueStore::open(MemorySlot::new("civic-issues")));
        let created = store.create(input()).unwrap();

        let denied = require_admin(Some(&user(Role::User)));
        assert!(matches!(denied, Err(CivicError::Forbidden { .. })));
        assert_eq!(store.all().len(), 1);
        assert_eq!(store.store().get_by_id(created.id).unwrap().status, Status::Pending);
    }
}
