//! In-memory practice desk: a shared store of cases and clients, the query
//! layer every view runs over it, and the view and navigation state on top.
//!
//! ```
//! use counseldesk::{CasesView, Store};
//!
//! let store = Store::seeded();
//! let mut cases = CasesView::new();
//! cases.set_search("court");
//! let rows = cases.rows(&store).unwrap();
//! assert_eq!(rows[0].client_name, "John Doe");
//! ```

extern crate self as counseldesk;

#[macro_use]
mod model;

mod catalog;
mod config;
mod query;
mod shell;
mod store;
mod views;

pub use catalog::{
    demo_appointments, demo_documents, AnalyticsData, CaseEntry, Catalog, ClientEntry,
    DocumentEntry, MonthlyFigure, PracticeArea, SearchCorpus, StatusShare,
};
pub use config::{
    ConfigError, DuplicateIdPolicy, NotificationSettings, Preferences, Profile, SessionConfig,
    Settings, StoreConfig,
};
pub use model::{
    Appointment, AppointmentKind, Case, CasePatch, CaseStatus, Client, ClientPatch, ClientStatus,
    Document, DocumentKind, ModelError, Priority, Record, Variant, View,
};
pub use query::{
    appointments_on, filter_records, first_of_month, format_file_size, initials, month_days,
    resolve_client_name, same_day, shift_month, Categorized, Filter, Query, QueryError,
    SearchTerm, Searchable, Tally, UNKNOWN_CLIENT,
};
pub use shell::{NavItem, Screen, Shell};
pub use store::{
    changes, seed_cases, seed_clients, ChangeRecord, PayloadError, Store, StoreError,
    StoreSnapshot, UpdateOutcome,
};
pub use views::{
    AnalyticsSummary, AnalyticsView, CalendarView, CaseRow, CasesView, ClientRow, ClientsView,
    DashboardSummary, DashboardView, DayCell, DocumentRow, DocumentStats, DocumentsView,
    FilterTab, QuickAction, SearchResults, SearchScope, SearchTicket, SearchView, StatusSlice,
    Trend, TrendDirection, QUICK_ACTIONS,
};

pub use counseldesk_macros::Record;

#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
