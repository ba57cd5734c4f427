//! Store - the single in-memory holder of cases, clients and the active view.
//!
//! A [`Store`] is constructed explicitly and handed to every view that needs
//! it. Clones share the same state, so a view holding a clone always observes
//! the latest committed mutation. Reads return owned copies; the only way to
//! change the collections is through the store's mutation operations.
//!
//! ## Example
//!
//! ```
//! use counseldesk::{CasePatch, CaseStatus, Store, UpdateOutcome};
//!
//! let store = Store::seeded();
//! let outcome = store
//!     .update_case("1", &CasePatch::new().status(CaseStatus::Closed))
//!     .unwrap();
//! assert_eq!(outcome, UpdateOutcome::Updated(1));
//! assert_eq!(store.cases().unwrap()[0].status, CaseStatus::Closed);
//! ```

mod change;
mod seed;
#[allow(clippy::module_inception)]
mod store;

use std::fmt;

pub use change::{ChangeRecord, PayloadError};
pub use seed::{seed_cases, seed_clients};
pub use store::{Store, StoreSnapshot};

/// Names of the changes the store journals.
pub mod changes {
    pub const CASE_ADDED: &str = "CaseAdded";
    pub const CASE_UPDATED: &str = "CaseUpdated";
    pub const CLIENT_ADDED: &str = "ClientAdded";
    pub const CLIENT_UPDATED: &str = "ClientUpdated";
    pub const VIEW_CHANGED: &str = "ViewChanged";
    /// Listener name that receives every change.
    pub const ANY: &str = "*";
}

/// Result of a patch applied by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The patch was applied to this many records.
    Updated(usize),
    /// No record carries the id; nothing changed.
    NotFound,
}

impl UpdateOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, UpdateOutcome::Updated(_))
    }
}

/// Error type for store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The state lock was poisoned by a panicking writer.
    LockPoisoned(&'static str),
    /// An insert was refused because the id is already taken.
    DuplicateId { collection: &'static str, id: String },
    /// A change payload could not be encoded for the journal.
    Encode(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
            StoreError::DuplicateId { collection, id } => {
                write!(f, "duplicate id {} in {}", id, collection)
            }
            StoreError::Encode(msg) => write!(f, "change encoding failed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}
