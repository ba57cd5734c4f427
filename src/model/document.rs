use chrono::NaiveDate;
use counseldesk_macros::Record;
use serde::{Deserialize, Serialize};

closed_enum! {
    /// File format of a stored document.
    pub enum DocumentKind("document kind", default = Other) {
        Pdf => "pdf",
        Docx => "docx",
        Doc => "doc",
        Other => "other",
    }
}

impl DocumentKind {
    /// Upper-case label as shown on filter tabs ("PDF", "DOCX").
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::Docx => "DOCX",
            DocumentKind::Doc => "DOC",
            DocumentKind::Other => "OTHER",
        }
    }

    /// Case-insensitive lenient parse, so "PDF" and "pdf" agree.
    pub fn parse_ignore_case(value: &str) -> Self {
        Self::parse_lossy(&value.to_lowercase())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(collection = "documents")]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub name: String,
    pub kind: DocumentKind,
    /// Size in megabytes.
    pub size_mb: f64,
    pub case_id: String,
    pub case_name: String,
    pub uploaded_on: NaiveDate,
    pub tags: Vec<String>,
}
