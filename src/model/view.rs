closed_enum! {
    /// The functional areas the shell can show, one at a time.
    pub enum View("view", default = Dashboard) {
        Dashboard => "dashboard",
        Clients => "clients",
        Cases => "cases",
        Documents => "documents",
        Analytics => "analytics",
        Search => "search",
        Calendar => "calendar",
    }
}

impl View {
    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Clients => "Clients",
            View::Cases => "Cases",
            View::Documents => "Documents",
            View::Analytics => "Analytics",
            View::Search => "Search",
            View::Calendar => "Calendar",
        }
    }
}
