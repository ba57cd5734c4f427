use crate::model::{Client, ClientStatus};
use crate::query::{initials, Filter, Query, QueryError, SearchTerm, Tally};
use crate::store::{Store, StoreError};

use super::{empty_state_hint, filter_tabs, FilterTab};

#[derive(Clone, Debug, PartialEq)]
pub struct ClientRow {
    pub client: Client,
    pub initials: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientsView {
    search: SearchTerm,
    status: Filter<ClientStatus>,
}

impl ClientsView {
    pub const STATUS_TABS: [Filter<ClientStatus>; 3] = [
        Filter::All,
        Filter::Only(ClientStatus::Active),
        Filter::Only(ClientStatus::Inactive),
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

    pub fn status_filter(&self) -> Filter<ClientStatus> {
        self.status
    }

    pub fn set_status_filter(&mut self, filter: Filter<ClientStatus>) {
        self.status = filter;
    }

    pub fn select_status(&mut self, key: &str) -> Result<(), QueryError> {
        self.status = Filter::parse(key)?;
        Ok(())
    }

    pub fn rows(&self, store: &Store) -> Result<Vec<ClientRow>, StoreError> {
        let clients = store.clients()?;
        Ok(Query::new(self.search.clone(), self.status)
            .apply(&clients)
            .into_iter()
            .map(|client| ClientRow {
                initials: initials(&client.name),
                client: client.clone(),
            })
            .collect())
    }

    pub fn counts(&self, store: &Store) -> Result<Tally<ClientStatus>, StoreError> {
        Ok(Tally::of(&store.clients()?))
    }

    pub fn status_tabs(&self, store: &Store) -> Result<Vec<FilterTab<ClientStatus>>, StoreError> {
        let tally = self.counts(store)?;
        Ok(filter_tabs(&Self::STATUS_TABS, &tally, self.status, |filter| {
            match filter {
                Filter::All => "All".to_string(),
                Filter::Only(status) => status.label().to_string(),
            }
        }))
    }

    pub fn empty_hint(&self) -> &'static str {
        empty_state_hint(!self.search.is_empty(), "Get started by adding your first client")
    }
}
