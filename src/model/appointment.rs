use chrono::{NaiveDate, NaiveDateTime};
use counseldesk_macros::Record;
use serde::{Deserialize, Serialize};

closed_enum! {
    pub enum AppointmentKind("appointment kind", default = Other) {
        Consultation => "consultation",
        Hearing => "hearing",
        Deposition => "deposition",
        Meeting => "meeting",
        Other => "other",
    }
}

/// A scheduled calendar entry. `starts_at` is wall-clock local time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(collection = "appointments")]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub title: String,
    pub description: String,
    pub starts_at: NaiveDateTime,
    pub duration_minutes: u32,
    pub location: String,
    pub attendees: Vec<String>,
    pub kind: AppointmentKind,
}

impl Appointment {
    /// The calendar day this appointment is bucketed under.
    pub fn day(&self) -> NaiveDate {
        self.starts_at.date()
    }
}
