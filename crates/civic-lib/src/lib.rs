//! `civic-lib` - In-process civic issue store.
//!
//! Citizens report geotagged issues; administrators move them between
//! `pending`, `in-progress` and `resolved`. The collection lives in memory
//! and is written whole to a durable [`Slot`] after every mutation.
//!
//! # Quick Start
//!
//! ```no_run
//! use civic_lib::{Category, FileSlot, IssueFilter, IssueInput, IssueStore, Location, Status};
//!
//! // Load existing snapshot (or start empty)
//! let mut store = IssueStore::open(FileSlot::new(".civic", "civic-issues"));
//!
//! // Create
//! let issue = store
//!     .create(IssueInput {
//!         title: "Pothole".into(),
//!         description: "deep hole".into(),
//!         category: Some(Category::Roads),
//!         location: Some(Location::new(19.07, 72.87)),
//!         ..Default::default()
//!     })
//!     .unwrap();
//!
//! // Query
//! let pending = civic_lib::view::filter_by(
//!     store.all(),
//!     &IssueFilter { status: Some(Status::Pending), ..Default::default() },
//! );
//!
//! // Update
//! store.update_status(issue.id, Status::InProgress).unwrap();
//! ```

pub mod authorized;
pub mod error;
pub mod identity;
pub mod image;
pub mod model;
pub mod shared;
pub mod slot;
pub mod snapshot;
pub mod store;
pub mod util;
pub mod validation;
pub mod view;

pub use authorized::AuthorizedStore;
pub use error::{CivicError, Result, ValidationError};
pub use identity::{AdminGrant, CurrentUser, Identity, Role};
pub use image::{ImageAttachment, MAX_IMAGE_BYTES};
pub use model::{Category, Issue, IssueInput, Location, Status, Urgency};
pub use shared::SharedIssueStore;
pub use slot::{FileSlot, MemorySlot, Slot};
pub use store::IssueStore;
pub use view::{Facet, IssueFilter, Summary};
