//! Filtering & derivation shared by every view.
//!
//! Nothing here caches: each function recomputes from the slice it is given,
//! so results always reflect the collection as it is right now.

mod calendar;
mod filter;
mod format;
mod resolve;
mod tally;
mod text;

use std::fmt;

use crate::model::ModelError;

pub use calendar::{appointments_on, first_of_month, month_days, same_day, shift_month};
pub use filter::{filter_records, Categorized, Filter, Query};
pub use format::format_file_size;
pub use resolve::{initials, resolve_client_name, UNKNOWN_CLIENT};
pub use tally::Tally;
pub use text::{SearchTerm, Searchable};

/// Error type for query construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A categorical filter key that is neither "all" nor a member of the domain.
    UnknownFilter { domain: &'static str, value: String },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::UnknownFilter { domain, value } => {
                write!(f, "unknown {} filter '{}'", domain, value)
            }
        }
    }
}

impl std::error::Error for QueryError {}

impl From<ModelError> for QueryError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::UnknownVariant { domain, value } => {
                QueryError::UnknownFilter { domain, value }
            }
        }
    }
}
