use crate::config::SessionConfig;
use crate::model::{CaseStatus, ClientStatus, View};
use crate::query::resolve_client_name;
use crate::store::{Store, StoreError};

use super::CaseRow;

/// A dashboard shortcut into another view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub target: View,
}

pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        title: "New Client",
        description: "Add a new client to your practice",
        target: View::Clients,
    },
    QuickAction {
        title: "Create Case",
        description: "Start a new legal case",
        target: View::Cases,
    },
    QuickAction {
        title: "Upload Document",
        description: "Add documents to a case",
        target: View::Documents,
    },
    QuickAction {
        title: "Schedule Meeting",
        description: "Book an appointment",
        target: View::Calendar,
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardSummary {
    pub active_clients: usize,
    pub open_cases: usize,
    pub total_cases: usize,
    pub recent_cases: Vec<CaseRow>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardView {
    recent_limit: usize,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}

impl DashboardView {
    pub fn new(config: &SessionConfig) -> Self {
        DashboardView {
            recent_limit: config.recent_cases,
        }
    }

    /// Headline counts and the first cases in insertion order.
    pub fn summary(&self, store: &Store) -> Result<DashboardSummary, StoreError> {
        let cases = store.cases()?;
        let clients = store.clients()?;

        Ok(DashboardSummary {
            active_clients: clients
                .iter()
                .filter(|c| c.status == ClientStatus::Active)
                .count(),
            open_cases: cases.iter().filter(|c| c.status == CaseStatus::Open).count(),
            total_cases: cases.len(),
            recent_cases: cases
                .iter()
                .take(self.recent_limit)
                .map(|case| CaseRow {
                    client_name: resolve_client_name(&clients, &case.client_id).to_string(),
                    case: case.clone(),
                })
                .collect(),
        })
    }

    pub fn quick_actions(&self) -> &'static [QuickAction] {
        &QUICK_ACTIONS
    }

    /// Switch the store to the action's target view.
    pub fn open_quick_action(&self, store: &Store, action: &QuickAction) -> Result<(), StoreError> {
        store.set_current_view(action.target)
    }

    /// "View All" under recent cases.
    pub fn view_all_cases(&self, store: &Store) -> Result<(), StoreError> {
        store.set_current_view(View::Cases)
    }
}
