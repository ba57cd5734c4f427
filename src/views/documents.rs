use chrono::{Datelike, NaiveDate};

use crate::catalog::Catalog;
use crate::model::{Document, DocumentKind};
use crate::query::{format_file_size, Filter, Query, QueryError, SearchTerm, Tally};

use super::{empty_state_hint, FilterTab};

#[derive(Clone, Debug, PartialEq)]
pub struct DocumentRow {
    pub document: Document,
    pub size_label: String,
    /// The first few tags, in order.
    pub visible_tags: Vec<String>,
    /// How many tags were left out of `visible_tags`.
    pub hidden_tags: usize,
}

impl DocumentRow {
    /// "+N more" when some tags are hidden.
    pub fn overflow_label(&self) -> Option<String> {
        (self.hidden_tags > 0).then(|| format!("+{} more", self.hidden_tags))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocumentStats {
    pub total: usize,
    pub pdf_count: usize,
    pub uploaded_this_month: usize,
    pub total_size_mb: f64,
}

impl DocumentStats {
    pub fn total_size_label(&self) -> String {
        format_file_size(self.total_size_mb)
    }
}

/// State of the documents page over the catalog's documents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentsView {
    search: SearchTerm,
    kind: Filter<DocumentKind>,
    visible_tags: usize,
}

impl Default for DocumentsView {
    fn default() -> Self {
        Self::new(3)
    }
}

impl DocumentsView {
    pub fn new(visible_tags: usize) -> Self {
        DocumentsView {
            search: SearchTerm::default(),
            kind: Filter::All,
            visible_tags,
        }
    }

    pub fn search(&self) -> &SearchTerm {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<SearchTerm>) {
        self.search = term.into();
    }

    pub fn kind_filter(&self) -> Filter<DocumentKind> {
        self.kind
    }

    pub fn set_kind_filter(&mut self, filter: Filter<DocumentKind>) {
        self.kind = filter;
    }

    /// Select a kind tab by key, ignoring case ("PDF" and "pdf" are the same tab).
    pub fn select_kind(&mut self, key: &str) -> Result<(), QueryError> {
        self.kind = Filter::parse(&key.to_lowercase())?;
        Ok(())
    }

    pub fn rows(&self, catalog: &Catalog) -> Vec<DocumentRow> {
        Query::new(self.search.clone(), self.kind)
            .apply(&catalog.documents)
            .into_iter()
            .map(|document| {
                let visible: Vec<String> = document
                    .tags
                    .iter()
                    .take(self.visible_tags)
                    .cloned()
                    .collect();
                DocumentRow {
                    size_label: format_file_size(document.size_mb),
                    hidden_tags: document.tags.len() - visible.len(),
                    visible_tags: visible,
                    document: document.clone(),
                }
            })
            .collect()
    }

    /// "All" followed by each kind present in the catalog, in first-seen order.
    pub fn kinds(&self, catalog: &Catalog) -> Vec<FilterTab<DocumentKind>> {
        let tally: Tally<DocumentKind> = Tally::of(&catalog.documents);
        let mut seen: Vec<DocumentKind> = Vec::new();
        for document in &catalog.documents {
            if !seen.contains(&document.kind) {
                seen.push(document.kind);
            }
        }

        std::iter::once(Filter::All)
            .chain(seen.into_iter().map(Filter::Only))
            .map(|filter| FilterTab {
                filter,
                label: match filter {
                    Filter::All => "All".to_string(),
                    Filter::Only(kind) => kind.label().to_string(),
                },
                count: tally.count_for(filter),
                active: filter == self.kind,
            })
            .collect()
    }

    /// Header figures. "This month" means the calendar month and year of `today`.
    pub fn stats(&self, catalog: &Catalog, today: NaiveDate) -> DocumentStats {
        let documents = &catalog.documents;
        DocumentStats {
            total: documents.len(),
            pdf_count: documents
                .iter()
                .filter(|d| d.kind == DocumentKind::Pdf)
                .count(),
            uploaded_this_month: documents
                .iter()
                .filter(|d| {
                    d.uploaded_on.month() == today.month() && d.uploaded_on.year() == today.year()
                })
                .count(),
            total_size_mb: documents.iter().map(|d| d.size_mb).sum(),
        }
    }

    pub fn empty_hint(&self) -> &'static str {
        empty_state_hint(!self.search.is_empty(), "Upload your first document to get started")
    }
}
