//! View state for each functional area.
//!
//! A view holds only what the user picked (search text, filters, selected
//! day) and recomputes its rows from the [`Store`](crate::Store) or the
//! [`Catalog`](crate::Catalog) it is handed on every call.

mod analytics;
mod calendar;
mod cases;
mod clients;
mod dashboard;
mod documents;
mod search;

pub use analytics::{AnalyticsSummary, AnalyticsView, StatusSlice, Trend, TrendDirection};
pub use calendar::{CalendarView, DayCell};
pub use cases::{CaseRow, CasesView};
pub use clients::{ClientRow, ClientsView};
pub use dashboard::{DashboardSummary, DashboardView, QuickAction, QUICK_ACTIONS};
pub use documents::{DocumentRow, DocumentStats, DocumentsView};
pub use search::{SearchResults, SearchScope, SearchTicket, SearchView};

use crate::model::Variant;
use crate::query::{Filter, Tally};

/// One categorical filter button with its live count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterTab<K> {
    pub filter: Filter<K>,
    pub label: String,
    pub count: usize,
    pub active: bool,
}

pub(crate) fn filter_tabs<K: Variant>(
    keys: &[Filter<K>],
    tally: &Tally<K>,
    active: Filter<K>,
    label: impl Fn(Filter<K>) -> String,
) -> Vec<FilterTab<K>> {
    keys.iter()
        .map(|filter| FilterTab {
            filter: *filter,
            label: label(*filter),
            count: tally.count_for(*filter),
            active: *filter == active,
        })
        .collect()
}

pub(crate) fn empty_state_hint(searching: bool, call_to_action: &'static str) -> &'static str {
    if searching {
        "Try adjusting your search criteria"
    } else {
        call_to_action
    }
}
