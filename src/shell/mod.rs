//! Navigation shell: the side navigation and the single mounted view.
//!
//! The active view lives in the [`Store`] so any view can redirect (the
//! dashboard's quick actions do). The shell remounts its [`Screen`] whenever
//! the store's view no longer matches what is mounted, which resets that
//! view's local search text and filters.

use chrono::{Local, NaiveDate};

use crate::catalog::Catalog;
use crate::config::SessionConfig;
use crate::model::View;
use crate::store::{Store, StoreError};
use crate::views::{
    AnalyticsView, CalendarView, CasesView, ClientsView, DashboardView, DocumentsView, SearchView,
};

/// One entry of the side navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub view: View,
    pub label: &'static str,
}

const NAV_ITEMS: [NavItem; 7] = [
    NavItem { view: View::Dashboard, label: "Dashboard" },
    NavItem { view: View::Documents, label: "Documents" },
    NavItem { view: View::Cases, label: "Cases" },
    NavItem { view: View::Clients, label: "Clients" },
    NavItem { view: View::Analytics, label: "Analytics" },
    NavItem { view: View::Search, label: "Search" },
    NavItem { view: View::Calendar, label: "Calendar" },
];

/// The state of whichever view is mounted.
#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    Dashboard(DashboardView),
    Clients(ClientsView),
    Cases(CasesView),
    Documents(DocumentsView),
    Analytics(AnalyticsView),
    Search(SearchView),
    Calendar(CalendarView),
}

impl Screen {
    pub fn view(&self) -> View {
        match self {
            Screen::Dashboard(_) => View::Dashboard,
            Screen::Clients(_) => View::Clients,
            Screen::Cases(_) => View::Cases,
            Screen::Documents(_) => View::Documents,
            Screen::Analytics(_) => View::Analytics,
            Screen::Search(_) => View::Search,
            Screen::Calendar(_) => View::Calendar,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Shell {
    store: Store,
    catalog: Catalog,
    session: SessionConfig,
    today: NaiveDate,
    sidebar_collapsed: bool,
    screen: Screen,
}

impl Shell {
    pub fn new(store: Store, catalog: Catalog, session: SessionConfig) -> Result<Self, StoreError> {
        Self::with_today(store, catalog, session, Local::now().date_naive())
    }

    /// A shell whose calendar treats `today` as the current date.
    pub fn with_today(
        store: Store,
        catalog: Catalog,
        session: SessionConfig,
        today: NaiveDate,
    ) -> Result<Self, StoreError> {
        let view = store.current_view()?;
        let screen = mount(view, &session, today);
        Ok(Shell {
            store,
            catalog,
            session,
            today,
            sidebar_collapsed: false,
            screen,
        })
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self) -> &SessionConfig {
        &self.session
    }

    pub fn nav_items(&self) -> &'static [NavItem] {
        &NAV_ITEMS
    }

    pub fn active_view(&self) -> Result<View, StoreError> {
        self.store.current_view()
    }

    pub fn navigate(&mut self, view: View) -> Result<(), StoreError> {
        self.store.set_current_view(view)?;
        self.sync()?;
        Ok(())
    }

    /// Navigate by key; unknown keys land on the dashboard.
    pub fn navigate_key(&mut self, key: &str) -> Result<View, StoreError> {
        let view = View::parse_lossy(key);
        self.navigate(view)?;
        Ok(view)
    }

    /// The mounted view, remounted first if the store moved elsewhere.
    pub fn screen(&mut self) -> Result<&mut Screen, StoreError> {
        self.sync()?;
        Ok(&mut self.screen)
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_collapsed = !self.sidebar_collapsed;
        self.sidebar_collapsed
    }

    fn sync(&mut self) -> Result<(), StoreError> {
        let view = self.store.current_view()?;
        if self.screen.view() != view {
            tracing::debug!(from = %self.screen.view(), to = %view, "mounting view");
            self.screen = mount(view, &self.session, self.today);
        }
        Ok(())
    }
}

fn mount(view: View, session: &SessionConfig, today: NaiveDate) -> Screen {
    match view {
        View::Dashboard => Screen::Dashboard(DashboardView::new(session)),
        View::Clients => Screen::Clients(ClientsView::new()),
        View::Cases => Screen::Cases(CasesView::new()),
        View::Documents => Screen::Documents(DocumentsView::new(session.visible_tags)),
        View::Analytics => Screen::Analytics(AnalyticsView::new()),
        View::Search => Screen::Search(SearchView::new(session)),
        View::Calendar => Screen::Calendar(CalendarView::new(today)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::day;

    fn shell() -> Shell {
        Shell::with_today(
            Store::seeded(),
            Catalog::demo(),
            SessionConfig::default(),
            day(2024, 3, 15),
        )
        .unwrap()
    }

    #[test]
    fn nav_covers_every_view_once() {
        let shell = shell();
        let items = shell.nav_items();
        assert_eq!(items.len(), View::ALL.len());
        for view in View::ALL {
            assert_eq!(items.iter().filter(|i| i.view == *view).count(), 1);
        }
        assert_eq!(items[1].label, "Documents");
    }

    #[test]
    fn navigation_writes_through_the_store() {
        let mut shell = shell();
        let store = shell.store().clone();
        shell.navigate(View::Cases).unwrap();
        assert_eq!(store.current_view().unwrap(), View::Cases);
        assert!(matches!(shell.screen().unwrap(), Screen::Cases(_)));
    }

    #[test]
    fn unknown_key_goes_to_dashboard() {
        let mut shell = shell();
        shell.navigate(View::Search).unwrap();
        assert_eq!(shell.navigate_key("settings").unwrap(), View::Dashboard);
        assert_eq!(shell.active_view().unwrap(), View::Dashboard);
        assert_eq!(shell.navigate_key("calendar").unwrap(), View::Calendar);
    }

    #[test]
    fn remounting_resets_view_state() {
        let mut shell = shell();
        shell.navigate(View::Cases).unwrap();
        if let Screen::Cases(cases) = shell.screen().unwrap() {
            cases.set_search("court");
        }
        shell.navigate(View::Cases).unwrap();
        match shell.screen().unwrap() {
            Screen::Cases(cases) => assert_eq!(cases.search().as_str(), "court"),
            other => panic!("unexpected screen {:?}", other.view()),
        }

        shell.navigate(View::Clients).unwrap();
        shell.navigate(View::Cases).unwrap();
        match shell.screen().unwrap() {
            Screen::Cases(cases) => assert!(cases.search().is_empty()),
            other => panic!("unexpected screen {:?}", other.view()),
        }
    }

    #[test]
    fn follows_store_redirects() {
        let mut shell = shell();
        let store = shell.store().clone();
        DashboardView::default()
            .open_quick_action(&store, &crate::views::QUICK_ACTIONS[0])
            .unwrap();
        assert!(matches!(shell.screen().unwrap(), Screen::Clients(_)));
    }

    #[test]
    fn sidebar_toggles() {
        let mut shell = shell();
        assert!(!shell.sidebar_collapsed());
        assert!(shell.toggle_sidebar());
        assert!(!shell.toggle_sidebar());
    }
}
