use crate::model::{Document, DocumentKind};

use super::day;

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|tag| tag.to_string()).collect()
}

pub fn demo_documents() -> Vec<Document> {
    vec![
        Document {
            id: "1".into(),
            name: "Contract_JohnsonAssociates_2024.pdf".into(),
            kind: DocumentKind::Pdf,
            size_mb: 2.4,
            case_id: "1".into(),
            case_name: "Contract Negotiation - Johnson & Associates".into(),
            uploaded_on: day(2024, 2, 20),
            tags: tags(&["contract", "legal", "negotiation"]),
        },
        Document {
            id: "2".into(),
            name: "NDA_TechCorp_Signed.pdf".into(),
            kind: DocumentKind::Pdf,
            size_mb: 1.8,
            case_id: "2".into(),
            case_name: "Intellectual Property Review".into(),
            uploaded_on: day(2024, 2, 15),
            tags: tags(&["nda", "signed", "confidentiality"]),
        },
        Document {
            id: "3".into(),
            name: "LLC_Articles_StartupCo.docx".into(),
            kind: DocumentKind::Docx,
            size_mb: 0.8,
            case_id: "3".into(),
            case_name: "Corporate Formation".into(),
            uploaded_on: day(2024, 1, 28),
            tags: tags(&["incorporation", "articles", "llc"]),
        },
        Document {
            id: "4".into(),
            name: "Patent_Application_Draft.pdf".into(),
            kind: DocumentKind::Pdf,
            size_mb: 5.2,
            case_id: "2".into(),
            case_name: "Intellectual Property Review".into(),
            uploaded_on: day(2024, 2, 10),
            tags: tags(&["patent", "draft", "intellectual property"]),
        },
    ]
}
