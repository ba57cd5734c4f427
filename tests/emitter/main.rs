//! Change notifications delivered through the store's emitter.
#![cfg(feature = "emitter")]

use std::sync::mpsc;
use std::time::Duration;

use counseldesk::{changes, Case, CasePatch, CaseStatus, ChangeRecord, Store, View};

fn recv(rx: &mpsc::Receiver<String>) -> ChangeRecord {
    let json = rx.recv_timeout(Duration::from_secs(1)).unwrap();
    serde_json::from_str(&json).unwrap()
}

#[test]
fn case_added_listener_receives_the_case() {
    let store = Store::seeded();
    let (tx, rx) = mpsc::channel();
    store
        .on(changes::CASE_ADDED, move |json| {
            let _ = tx.send(json);
        })
        .unwrap();

    store.add_case(Case::new("4", "Zoning Appeal", "c2")).unwrap();

    let change = recv(&rx);
    assert_eq!(change.name, changes::CASE_ADDED);
    let case: Case = change.decode().unwrap();
    assert_eq!(case.title, "Zoning Appeal");
}

#[test]
fn wildcard_listener_sees_every_change_in_order() {
    let store = Store::seeded();
    let (tx, rx) = mpsc::channel();
    store
        .on(changes::ANY, move |json| {
            let _ = tx.send(json);
        })
        .unwrap();

    store
        .update_case("2", &CasePatch::new().status(CaseStatus::Closed))
        .unwrap();
    let first = recv(&rx);
    store.set_current_view(View::Analytics).unwrap();
    let second = recv(&rx);

    assert_eq!(first.name, changes::CASE_UPDATED);
    let (id, patch): (String, CasePatch) = first.decode().unwrap();
    assert_eq!(id, "2");
    assert_eq!(patch.status, Some(CaseStatus::Closed));

    assert_eq!(second.name, changes::VIEW_CHANGED);
    assert!(second.sequence > first.sequence);
    assert_eq!(second.decode::<View>().unwrap(), View::Analytics);
}

#[test]
fn removed_listener_stops_receiving() {
    let store = Store::seeded();
    let (tx, rx) = mpsc::channel();
    let id = store
        .on(changes::VIEW_CHANGED, move |json| {
            let _ = tx.send(json);
        })
        .unwrap();

    assert!(store.off(&id).unwrap());
    store.set_current_view(View::Clients).unwrap();
    assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
    assert!(!store.off(&id).unwrap());
}

#[test]
fn not_found_update_emits_nothing() {
    let store = Store::seeded();
    let (tx, rx) = mpsc::channel();
    store
        .on(changes::ANY, move |json| {
            let _ = tx.send(json);
        })
        .unwrap();

    store
        .update_case("missing", &CasePatch::new().title("x"))
        .unwrap();
    assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
}
