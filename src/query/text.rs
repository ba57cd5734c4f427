use crate::model::{Appointment, Case, Client, Document};

/// A case-insensitive substring needle. The empty term matches everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    needle: String,
}

impl SearchTerm {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let needle = raw.to_lowercase();
        SearchTerm { raw, needle }
    }

    /// The term exactly as typed.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// True when the term holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }

    pub fn matches(&self, field: &str) -> bool {
        field.to_lowercase().contains(&self.needle)
    }

    pub fn matches_any<'a, I>(&self, fields: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        if self.needle.is_empty() {
            return true;
        }
        fields.into_iter().any(|field| self.matches(field))
    }

    pub fn matches_record<R: Searchable + ?Sized>(&self, record: &R) -> bool {
        self.matches_any(record.search_fields())
    }
}

impl From<&str> for SearchTerm {
    fn from(raw: &str) -> Self {
        SearchTerm::new(raw)
    }
}

impl From<String> for SearchTerm {
    fn from(raw: String) -> Self {
        SearchTerm::new(raw)
    }
}

/// Records that expose free-text fields to search.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Case {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }
}

impl Searchable for Client {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.email.as_str()];
        if let Some(company) = &self.company {
            fields.push(company.as_str());
        }
        fields
    }
}

impl Searchable for Document {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.case_name.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

impl Searchable for Appointment {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.location.as_str(),
        ]
    }
}
