use std::time::Duration;

use crate::catalog::{CaseEntry, ClientEntry, DocumentEntry, SearchCorpus};
use crate::config::SessionConfig;
use crate::query::{SearchTerm, Searchable};

closed_enum! {
    /// Which groups the global search looks through.
    pub enum SearchScope("search scope", default = All) {
        All => "all",
        Clients => "clients",
        Cases => "cases",
        Documents => "documents",
    }
}

impl SearchScope {
    fn includes(&self, group: SearchScope) -> bool {
        *self == SearchScope::All || *self == group
    }
}

/// Hits grouped by kind, each group in corpus order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchResults {
    pub clients: Vec<ClientEntry>,
    pub cases: Vec<CaseEntry>,
    pub documents: Vec<DocumentEntry>,
}

impl SearchResults {
    pub fn total(&self) -> usize {
        self.clients.len() + self.cases.len() + self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Identifies one simulated search request. Later tickets compare greater.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTicket(u64);

impl SearchTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// Global search state.
///
/// Searching is instantaneous; the "searching" indicator is driven by
/// tickets. The caller waits [`latency`](SearchView::latency) after
/// [`begin_search`](SearchView::begin_search) and then calls
/// [`complete`](SearchView::complete). Only the newest ticket clears the
/// indicator, so a slow earlier request can't end a later one early.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchView {
    query: SearchTerm,
    scope: SearchScope,
    issued: u64,
    pending: Option<u64>,
    latency: Duration,
}

impl Default for SearchView {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}

impl SearchView {
    pub fn new(config: &SessionConfig) -> Self {
        SearchView {
            query: SearchTerm::default(),
            scope: SearchScope::All,
            issued: 0,
            pending: None,
            latency: config.search_latency(),
        }
    }

    pub fn query(&self) -> &SearchTerm {
        &self.query
    }

    pub fn scope(&self) -> SearchScope {
        self.scope
    }

    pub fn set_scope(&mut self, scope: SearchScope) {
        self.scope = scope;
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn is_searching(&self) -> bool {
        self.pending.is_some()
    }

    /// Store the query and start a simulated search.
    ///
    /// A blank query starts nothing and returns `None`.
    pub fn begin_search(&mut self, query: impl Into<SearchTerm>) -> Option<SearchTicket> {
        self.query = query.into();
        if self.query.is_blank() {
            return None;
        }
        self.issued += 1;
        self.pending = Some(self.issued);
        tracing::trace!(ticket = self.issued, query = self.query.as_str(), "search started");
        Some(SearchTicket(self.issued))
    }

    /// Finish a simulated search. Returns false for a superseded ticket.
    pub fn complete(&mut self, ticket: SearchTicket) -> bool {
        if self.pending == Some(ticket.0) {
            self.pending = None;
            true
        } else {
            tracing::trace!(ticket = ticket.0, latest = self.issued, "stale search completion ignored");
            false
        }
    }

    pub fn results(&self, corpus: &SearchCorpus) -> SearchResults {
        if self.query.is_blank() {
            return SearchResults::default();
        }
        SearchResults {
            clients: self.collect(SearchScope::Clients, &corpus.clients),
            cases: self.collect(SearchScope::Cases, &corpus.cases),
            documents: self.collect(SearchScope::Documents, &corpus.documents),
        }
    }

    pub fn total(&self, corpus: &SearchCorpus) -> usize {
        self.results(corpus).total()
    }

    fn collect<R: Searchable + Clone>(&self, group: SearchScope, records: &[R]) -> Vec<R> {
        if !self.scope.includes(group) {
            return Vec::new();
        }
        records
            .iter()
            .filter(|record| self.query.matches_record(*record))
            .cloned()
            .collect()
    }
}
