use crate::model::{Case, CaseStatus, Priority};
use crate::query::{resolve_client_name, Filter, Query, QueryError, SearchTerm, Tally};
use crate::store::{Store, StoreError};

use super::{empty_state_hint, filter_tabs, FilterTab};

/// A case ready for display, with its client reference resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct CaseRow {
    pub case: Case,
    pub client_name: String,
}

/// State of the cases list: search text, status and priority filters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CasesView {
    search: SearchTerm,
    status: Filter<CaseStatus>,
    priority: Filter<Priority>,
}

impl CasesView {
    pub const STATUS_TABS: [Filter<CaseStatus>; 4] = [
        Filter::All,
        Filter::Only(CaseStatus::Open),
        Filter::Only(CaseStatus::InReview),
        Filter::Only(CaseStatus::Closed),
    ];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &SearchTerm {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<SearchTerm>) {
        self.search = term.into();
    }

    pub fn status_filter(&self) -> Filter<CaseStatus> {
        self.status
    }

    pub fn set_status_filter(&mut self, filter: Filter<CaseStatus>) {
        self.status = filter;
    }

    /// Select a status tab by key ("all", "open", "in-review", ...).
    pub fn select_status(&mut self, key: &str) -> Result<(), QueryError> {
        self.status = Filter::parse(key)?;
        Ok(())
    }

    pub fn priority_filter(&self) -> Filter<Priority> {
        self.priority
    }

    pub fn set_priority_filter(&mut self, filter: Filter<Priority>) {
        self.priority = filter;
    }

    /// Matching cases in store order.
    pub fn rows(&self, store: &Store) -> Result<Vec<CaseRow>, StoreError> {
        let cases = store.cases()?;
        let clients = store.clients()?;
        let by_status = Query::new(self.search.clone(), self.status);

        Ok(by_status
            .apply(&cases)
            .into_iter()
            .filter(|case| self.priority.matches_record(*case))
            .map(|case| CaseRow {
                client_name: resolve_client_name(&clients, &case.client_id).to_string(),
                case: case.clone(),
            })
            .collect())
    }

    pub fn status_tally(&self, store: &Store) -> Result<Tally<CaseStatus>, StoreError> {
        Ok(Tally::of(&store.cases()?))
    }

    pub fn priority_tally(&self, store: &Store) -> Result<Tally<Priority>, StoreError> {
        Ok(Tally::of(&store.cases()?))
    }

    pub fn status_tabs(&self, store: &Store) -> Result<Vec<FilterTab<CaseStatus>>, StoreError> {
        let tally = self.status_tally(store)?;
        Ok(filter_tabs(&Self::STATUS_TABS, &tally, self.status, |filter| {
            match filter {
                Filter::All => "All".to_string(),
                Filter::Only(status) => status.label().to_string(),
            }
        }))
    }

    pub fn empty_hint(&self) -> &'static str {
        empty_state_hint(!self.search.is_empty(), "Get started by creating your first case")
    }
}
