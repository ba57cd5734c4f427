use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::day;
use crate::model::{Case, CaseStatus, Client, Document};
use crate::query::{format_file_size, resolve_client_name, Searchable};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientEntry {
    pub id: String,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub last_activity: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: CaseStatus,
    pub client: String,
    pub last_activity: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentEntry {
    pub id: String,
    pub name: String,
    pub size: String,
    pub case: String,
    pub last_activity: NaiveDate,
}

impl Searchable for ClientEntry {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.email.as_str()];
        if let Some(company) = &self.company {
            fields.push(company.as_str());
        }
        fields
    }
}

impl Searchable for CaseEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.client.as_str(),
        ]
    }
}

impl Searchable for DocumentEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.case.as_str()]
    }
}

/// Everything the global search looks through, grouped by kind.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCorpus {
    pub clients: Vec<ClientEntry>,
    pub cases: Vec<CaseEntry>,
    pub documents: Vec<DocumentEntry>,
}

impl SearchCorpus {
    /// Build a corpus from live records: store cases and clients plus catalog documents.
    pub fn from_records(cases: &[Case], clients: &[Client], documents: &[Document]) -> Self {
        SearchCorpus {
            clients: clients
                .iter()
                .map(|client| ClientEntry {
                    id: client.id.clone(),
                    name: client.name.clone(),
                    email: client.email.clone(),
                    company: client.company.clone(),
                    last_activity: client.created_at.date_naive(),
                })
                .collect(),
            cases: cases
                .iter()
                .map(|case| CaseEntry {
                    id: case.id.clone(),
                    title: case.title.clone(),
                    description: case.description.clone(),
                    status: case.status,
                    client: resolve_client_name(clients, &case.client_id).to_string(),
                    last_activity: case.updated_at.date_naive(),
                })
                .collect(),
            documents: documents
                .iter()
                .map(|document| DocumentEntry {
                    id: document.id.clone(),
                    name: document.name.clone(),
                    size: format_file_size(document.size_mb),
                    case: document.case_name.clone(),
                    last_activity: document.uploaded_on,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.clients.len() + self.cases.len() + self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn demo() -> Self {
        SearchCorpus {
            clients: vec![
                ClientEntry {
                    id: "1".into(),
                    name: "Sarah Johnson".into(),
                    email: "sarah.johnson@email.com".into(),
                    company: Some("Johnson & Associates".into()),
                    last_activity: day(2024, 2, 28),
                },
                ClientEntry {
                    id: "2".into(),
                    name: "Michael Chen".into(),
                    email: "michael.chen@techcorp.com".into(),
                    company: Some("TechCorp Inc.".into()),
                    last_activity: day(2024, 2, 25),
                },
            ],
            cases: vec![
                CaseEntry {
                    id: "1".into(),
                    title: "Contract Negotiation - Johnson & Associates".into(),
                    description: "Review and negotiate commercial lease agreement terms".into(),
                    status: CaseStatus::Open,
                    client: "Sarah Johnson".into(),
                    last_activity: day(2024, 2, 28),
                },
                CaseEntry {
                    id: "2".into(),
                    title: "Intellectual Property Review".into(),
                    description: "Patent application and trademark registration for TechCorp"
                        .into(),
                    status: CaseStatus::InReview,
                    client: "Michael Chen".into(),
                    last_activity: day(2024, 2, 25),
                },
            ],
            documents: vec![
                DocumentEntry {
                    id: "1".into(),
                    name: "Contract_JohnsonAssociates_2024.pdf".into(),
                    size: "2.4 MB".into(),
                    case: "Contract Negotiation - Johnson & Associates".into(),
                    last_activity: day(2024, 2, 20),
                },
                DocumentEntry {
                    id: "2".into(),
                    name: "NDA_TechCorp_Signed.pdf".into(),
                    size: "1.8 MB".into(),
                    case: "Intellectual Property Review".into(),
                    last_activity: day(2024, 2, 15),
                },
            ],
        }
    }
}
