//! Store contract: ordering, field-scoped updates and the shared query rules.

mod fixtures;

use counseldesk::{
    resolve_client_name, CasePatch, CaseStatus, CasesView, Client, Filter, Priority, Query,
    Store, StoreConfig, Tally, UpdateOutcome, UNKNOWN_CLIENT,
};
use fixtures::{case, court_store};

#[test]
fn append_preserves_order() {
    let store = Store::seeded();
    let before = store.cases().unwrap();

    let added = case("9", "Lease Dispute", CaseStatus::Pending, "c2");
    store.add_case(added.clone()).unwrap();

    let after = store.cases().unwrap();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(&after[..before.len()], &before[..]);
    assert_eq!(after.last(), Some(&added));
}

#[test]
fn update_is_field_scoped() {
    let store = Store::seeded();
    let before = store.cases().unwrap();

    let patch = CasePatch::new()
        .priority(Priority::Low)
        .description("Renegotiated scope");
    assert_eq!(store.update_case("2", &patch).unwrap(), UpdateOutcome::Updated(1));

    let after = store.cases().unwrap();
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);

    let updated = &after[1];
    assert_eq!(updated.priority, Priority::Low);
    assert_eq!(updated.description, "Renegotiated scope");
    assert_eq!(updated.title, before[1].title);
    assert_eq!(updated.status, before[1].status);
    assert_eq!(updated.client_id, before[1].client_id);
    assert_eq!(updated.assigned_to, before[1].assigned_to);
    assert_eq!(updated.updated_at, before[1].updated_at);
}

#[test]
fn update_with_unknown_id_changes_nothing() {
    let store = Store::seeded();
    let before = store.snapshot().unwrap();
    let journal = store.changes().unwrap().len();

    let outcome = store
        .update_case("nonexistent", &CasePatch::new().title("Ghost"))
        .unwrap();
    assert_eq!(outcome, UpdateOutcome::NotFound);
    assert!(!outcome.is_found());
    assert_eq!(store.snapshot().unwrap(), before);
    assert_eq!(store.changes().unwrap().len(), journal);
}

#[test]
fn filter_is_and_composed() {
    let store = court_store();
    let cases = store.cases().unwrap();

    let text_only = Query::<CaseStatus>::new("court", Filter::All).apply(&cases);
    assert_eq!(text_only.len(), 1);

    let both = Query::new("court", Filter::Only(CaseStatus::Open)).apply(&cases);
    assert!(both.is_empty());

    for term in ["", "court", "review", "c"] {
        for filter in [
            Filter::All,
            Filter::Only(CaseStatus::Open),
            Filter::Only(CaseStatus::InReview),
        ] {
            let combined: Vec<_> = Query::new(term, filter)
                .apply(&cases)
                .into_iter()
                .map(|c| c.id.clone())
                .collect();
            let by_text = Query::<CaseStatus>::new(term, Filter::All).apply(&cases);
            let by_status = Query::new("", filter).apply(&cases);
            let intersection: Vec<_> = by_text
                .into_iter()
                .filter(|c| by_status.iter().any(|s| s.id == c.id))
                .map(|c| c.id.clone())
                .collect();
            assert_eq!(combined, intersection, "term {term:?} filter {filter:?}");
        }
    }
}

#[test]
fn counts_match_the_collection() {
    let store = Store::seeded();
    store
        .add_case(case("4", "Estate Plan", CaseStatus::Open, "c1"))
        .unwrap();
    store
        .update_case("3", &CasePatch::new().status(CaseStatus::Pending))
        .unwrap();

    let cases = store.cases().unwrap();
    let tally = Tally::<CaseStatus>::of(&cases);
    assert_eq!(tally.all(), cases.len());
    for status in CaseStatus::ALL {
        let expected = cases.iter().filter(|c| c.status == *status).count();
        assert_eq!(tally.count(*status), expected, "{status}");
    }

    let tabs = CasesView::new().status_tabs(&store).unwrap();
    assert_eq!(tabs[0].count, cases.len());
    assert_eq!(tabs[1].count, 2);
}

#[test]
fn dangling_client_reference_resolves_to_fallback() {
    let store = Store::seeded();
    store
        .add_case(case("7", "Orphan", CaseStatus::Open, "missing"))
        .unwrap();
    let clients = store.clients().unwrap();
    assert_eq!(resolve_client_name(&clients, "missing"), UNKNOWN_CLIENT);

    let rows = CasesView::new().rows(&store).unwrap();
    assert_eq!(rows.last().unwrap().client_name, "Unknown Client");
}

#[test]
fn close_case_then_add_orphan() {
    let store = Store::with_records(
        StoreConfig::unseeded(),
        vec![case("1", "Contract Review", CaseStatus::Open, "c1")],
        vec![Client::new("c1", "Acme Corp")],
    );

    store
        .update_case("1", &CasePatch::new().status(CaseStatus::Closed))
        .unwrap();
    let cases = store.cases().unwrap();
    assert_eq!(cases[0].status, CaseStatus::Closed);
    assert_eq!(cases[0].title, "Contract Review");

    store
        .add_case(case("2", "New Matter", CaseStatus::Open, "zzz"))
        .unwrap();
    let cases = store.cases().unwrap();
    let clients = store.clients().unwrap();
    assert_eq!(resolve_client_name(&clients, &cases[1].client_id), "Unknown Client");
    assert_eq!(resolve_client_name(&clients, &cases[0].client_id), "Acme Corp");
}

#[test]
fn views_observe_mutations_through_clones() {
    let store = court_store();
    let view_handle = store.clone();
    let mut view = CasesView::new();
    view.set_search("court");

    assert_eq!(view.rows(&view_handle).unwrap().len(), 1);
    store
        .add_case(case("3", "Court Appeal", CaseStatus::Open, "c1"))
        .unwrap();
    assert_eq!(view.rows(&view_handle).unwrap().len(), 2);
}
