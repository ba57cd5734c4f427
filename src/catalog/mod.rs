//! Static mock sources that sit beside the store: documents, appointments,
//! analytics series and the global-search corpus.

mod analytics;
mod appointments;
mod documents;
mod search;

use chrono::{NaiveDate, NaiveDateTime};

pub use analytics::{AnalyticsData, MonthlyFigure, PracticeArea, StatusShare};
pub use appointments::demo_appointments;
pub use documents::demo_documents;
pub use search::{CaseEntry, ClientEntry, DocumentEntry, SearchCorpus};

use crate::model::{Appointment, Document};

/// Read-only data the views query alongside the store.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    pub documents: Vec<Document>,
    pub appointments: Vec<Appointment>,
    pub analytics: AnalyticsData,
    pub search: SearchCorpus,
}

impl Catalog {
    /// The demo data set.
    pub fn demo() -> Self {
        Catalog {
            documents: demo_documents(),
            appointments: demo_appointments(),
            analytics: AnalyticsData::demo(),
            search: SearchCorpus::demo(),
        }
    }

    pub fn empty() -> Self {
        Catalog {
            documents: Vec::new(),
            appointments: Vec::new(),
            analytics: AnalyticsData::default(),
            search: SearchCorpus::default(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::demo()
    }
}

pub(crate) fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub(crate) fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, minute, 0).unwrap_or_default()
}
