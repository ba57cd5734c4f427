use chrono::{DateTime, TimeZone, Utc};

use crate::model::{Case, CaseStatus, Client, ClientStatus, Priority};

fn utc_day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// The demo cases a seeded store starts with.
pub fn seed_cases() -> Vec<Case> {
    vec![
        Case::new("1", "Contract Review", "c1")
            .with_description("Review NDA agreement for client")
            .with_priority(Priority::High)
            .with_assignee("Alice"),
        Case::new("2", "Court Filing", "c2")
            .with_description("Prepare and submit documents")
            .with_status(CaseStatus::InReview)
            .with_priority(Priority::Urgent),
        Case::new("3", "Trademark Application", "c1")
            .with_description("Assist client with trademark filing")
            .with_status(CaseStatus::Closed)
            .with_priority(Priority::Medium)
            .with_assignee("Bob"),
    ]
}

/// The demo clients a seeded store starts with.
pub fn seed_clients() -> Vec<Client> {
    vec![
        Client::new("c1", "Acme Corp")
            .with_email("contact@acme.com")
            .with_phone("+1-555-1111")
            .with_company("Acme Corp")
            .with_created_at(utc_day(2022, 4, 15)),
        Client::new("c2", "John Doe")
            .with_email("john@example.com")
            .with_phone("+1-555-2222")
            .with_company("Doe & Partners")
            .with_created_at(utc_day(2023, 1, 10))
            .with_status(ClientStatus::Inactive),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn seed_references_resolve() {
        let clients = seed_clients();
        for case in seed_cases() {
            assert!(clients.iter().any(|c| c.id == case.client_id));
        }
    }

    #[test]
    fn seed_client_dates() {
        let clients = seed_clients();
        assert_eq!(clients[0].created_at.year(), 2022);
        assert_eq!(clients[1].created_at.month(), 1);
    }
}
