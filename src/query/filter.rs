use crate::model::{
    Appointment, AppointmentKind, Case, CaseStatus, Client, ClientStatus, Document, DocumentKind,
    Priority, Variant,
};

use super::text::{SearchTerm, Searchable};
use super::QueryError;

/// Records that carry a value from the closed domain `K`.
pub trait Categorized<K: Variant> {
    fn category(&self) -> K;
}

impl Categorized<CaseStatus> for Case {
    fn category(&self) -> CaseStatus {
        self.status
    }
}

impl Categorized<Priority> for Case {
    fn category(&self) -> Priority {
        self.priority
    }
}

impl Categorized<ClientStatus> for Client {
    fn category(&self) -> ClientStatus {
        self.status
    }
}

impl Categorized<DocumentKind> for Document {
    fn category(&self) -> DocumentKind {
        self.kind
    }
}

impl Categorized<AppointmentKind> for Appointment {
    fn category(&self) -> AppointmentKind {
        self.kind
    }
}

/// A categorical filter: the "all" sentinel or one exact value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Filter<K> {
    All,
    Only(K),
}

impl<K> Default for Filter<K> {
    fn default() -> Self {
        Filter::All
    }
}

impl<K: Variant> Filter<K> {
    pub const ALL_KEY: &'static str = "all";

    /// Parse `"all"` or a strict domain key.
    pub fn parse(key: &str) -> Result<Self, QueryError> {
        if key == Self::ALL_KEY {
            return Ok(Filter::All);
        }
        Ok(Filter::Only(key.parse::<K>()?))
    }

    pub fn key(&self) -> &'static str {
        match self {
            Filter::All => Self::ALL_KEY,
            Filter::Only(value) => value.key(),
        }
    }

    pub fn matches(&self, value: K) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(expected) => *expected == value,
        }
    }

    pub fn matches_record<R: Categorized<K> + ?Sized>(&self, record: &R) -> bool {
        self.matches(record.category())
    }
}

/// A text search AND-composed with a categorical filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query<K> {
    pub term: SearchTerm,
    pub filter: Filter<K>,
}

impl<K> Default for Query<K> {
    fn default() -> Self {
        Query {
            term: SearchTerm::default(),
            filter: Filter::All,
        }
    }
}

impl<K: Variant> Query<K> {
    pub fn new(term: impl Into<SearchTerm>, filter: Filter<K>) -> Self {
        Query {
            term: term.into(),
            filter,
        }
    }

    pub fn matches<R>(&self, record: &R) -> bool
    where
        R: Searchable + Categorized<K>,
    {
        self.term.matches_record(record) && self.filter.matches_record(record)
    }

    /// Matching records, in input order.
    pub fn apply<'a, R>(&self, records: &'a [R]) -> Vec<&'a R>
    where
        R: Searchable + Categorized<K>,
    {
        let matched: Vec<&R> = records.iter().filter(|r| self.matches(*r)).collect();
        tracing::trace!(
            term = self.term.as_str(),
            filter = self.filter.key(),
            total = records.len(),
            matched = matched.len(),
            "query applied"
        );
        matched
    }
}

/// Records matching both `term` and `filter`, in input order.
pub fn filter_records<'a, R, K>(
    records: &'a [R],
    term: impl Into<SearchTerm>,
    filter: Filter<K>,
) -> Vec<&'a R>
where
    K: Variant,
    R: Searchable + Categorized<K>,
{
    Query::new(term, filter).apply(records)
}
