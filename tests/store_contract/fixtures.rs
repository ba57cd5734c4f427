use chrono::{TimeZone, Utc};
use counseldesk::{Case, CaseStatus, Client, Priority, Store, StoreConfig};

pub fn case(id: &str, title: &str, status: CaseStatus, client_id: &str) -> Case {
    Case::new(id, title, client_id)
        .with_description(format!("{title} details"))
        .with_status(status)
        .with_priority(Priority::Medium)
        .with_updated_at(Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap())
}

/// The two-case store the filter properties are stated against.
pub fn court_store() -> Store {
    Store::with_records(
        StoreConfig::unseeded(),
        vec![
            case("1", "Contract Review", CaseStatus::Open, "c1"),
            case("2", "Court Filing", CaseStatus::InReview, "c1"),
        ],
        vec![Client::new("c1", "Acme Corp")],
    )
}
