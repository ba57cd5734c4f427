//! Views driven end to end over a seeded store and the demo catalog.

use chrono::NaiveDate;
use counseldesk::{
    CalendarView, Case, CaseStatus, Catalog, ClientsView, DashboardView, DocumentsView, Filter,
    SearchCorpus, SearchScope, SearchView, SessionConfig, Store, View, QUICK_ACTIONS,
};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn dashboard_reflects_new_cases() {
    let store = Store::seeded();
    let dashboard = DashboardView::default();
    assert_eq!(dashboard.summary(&store).unwrap().open_cases, 1);

    store
        .add_case(Case::new("4", "Merger Review", "c1").with_status(CaseStatus::Open))
        .unwrap();
    let summary = dashboard.summary(&store).unwrap();
    assert_eq!(summary.open_cases, 2);
    assert_eq!(summary.recent_cases.len(), 4);
    assert_eq!(summary.recent_cases[3].client_name, "Acme Corp");
}

#[test]
fn quick_action_targets() {
    let store = Store::seeded();
    let dashboard = DashboardView::default();
    for action in &QUICK_ACTIONS {
        dashboard.open_quick_action(&store, action).unwrap();
        assert_eq!(store.current_view().unwrap(), action.target);
    }
    assert_eq!(store.current_view().unwrap(), View::Calendar);
}

#[test]
fn clients_filter_by_status_and_text() {
    let store = Store::seeded();
    let mut view = ClientsView::new();
    view.set_search("acme");
    view.set_status_filter(Filter::Only(counseldesk::ClientStatus::Inactive));
    assert!(view.rows(&store).unwrap().is_empty());
    assert_eq!(view.empty_hint(), "Try adjusting your search criteria");

    view.select_status("all").unwrap();
    let rows = view.rows(&store).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].initials, "AC");
}

#[test]
fn documents_search_tags_and_case_names() {
    let catalog = Catalog::demo();
    let mut view = DocumentsView::new(SessionConfig::default().visible_tags);

    view.set_search("NDA");
    let rows = view.rows(&catalog);
    assert!(!rows.is_empty());
    assert!(rows.iter().all(|row| row.visible_tags.len() <= 3));

    view.set_search("");
    view.select_kind("pdf").unwrap();
    let sizes: Vec<_> = view.rows(&catalog).into_iter().map(|r| r.size_label).collect();
    assert_eq!(sizes, vec!["2.4 MB", "1.8 MB", "5.2 MB"]);

    view.select_kind("DOCX").unwrap();
    assert_eq!(view.rows(&catalog)[0].size_label, "819.2 KB");
}

#[test]
fn calendar_walks_months() {
    let catalog = Catalog::demo();
    let mut view = CalendarView::new(day(2024, 2, 29));
    assert!(view.month_grid(&catalog).iter().all(|c| c.appointment_count == 0));

    view.next_month();
    let grid = view.month_grid(&catalog);
    let busy: Vec<_> = grid
        .iter()
        .filter(|c| c.appointment_count > 0)
        .map(|c| c.date)
        .collect();
    assert_eq!(busy, vec![day(2024, 3, 15), day(2024, 3, 18), day(2024, 3, 22)]);
    assert!(grid.iter().all(|c| !c.is_today));

    view.select(day(2024, 3, 22));
    assert_eq!(view.selected_appointments(&catalog)[0].title, "Deposition - Rodriguez Case");
    assert_eq!(
        view.upcoming(&catalog, SessionConfig::default().upcoming_appointments).len(),
        3
    );
}

#[test]
fn search_over_live_records() {
    let store = Store::seeded();
    let catalog = Catalog::demo();
    let corpus = SearchCorpus::from_records(
        &store.cases().unwrap(),
        &store.clients().unwrap(),
        &catalog.documents,
    );

    let mut view = SearchView::default();
    let ticket = view.begin_search("acme").unwrap();
    let results = view.results(&corpus);
    assert_eq!(results.clients.len(), 1);
    assert_eq!(results.cases.len(), 2);
    assert!(view.complete(ticket));

    view.set_scope(SearchScope::Cases);
    assert_eq!(view.total(&corpus), 2);
}
