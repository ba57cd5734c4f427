//! Navigation shell over a shared store.

use chrono::NaiveDate;
use counseldesk::{Catalog, Screen, SessionConfig, Shell, Store, View};

fn shell(store: Store) -> Shell {
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    Shell::with_today(store, Catalog::demo(), SessionConfig::default(), today).unwrap()
}

#[test]
fn opens_on_the_configured_view() {
    let config = counseldesk::StoreConfig {
        initial_view: View::Search,
        ..counseldesk::StoreConfig::default()
    };
    let mut shell = shell(Store::new(config));
    assert_eq!(shell.active_view().unwrap(), View::Search);
    assert!(matches!(shell.screen().unwrap(), Screen::Search(_)));
}

#[test]
fn exactly_one_view_is_active() {
    let mut shell = shell(Store::seeded());
    for item in shell.nav_items().to_vec() {
        shell.navigate(item.view).unwrap();
        assert_eq!(shell.active_view().unwrap(), item.view);
        assert_eq!(shell.screen().unwrap().view(), item.view);
    }
}

#[test]
fn calendar_screen_uses_shell_today() {
    let mut shell = shell(Store::seeded());
    shell.navigate_key("calendar").unwrap();
    match shell.screen().unwrap() {
        Screen::Calendar(calendar) => {
            assert_eq!(calendar.today(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        }
        other => panic!("expected calendar, got {:?}", other.view()),
    }
}

#[test]
fn lenient_keys() {
    let mut shell = shell(Store::seeded());
    assert_eq!(shell.navigate_key("analytics").unwrap(), View::Analytics);
    assert_eq!(shell.navigate_key("Analytics").unwrap(), View::Dashboard);
    assert_eq!(shell.navigate_key("").unwrap(), View::Dashboard);
}
