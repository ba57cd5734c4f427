use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyFigure {
    pub month: String,
    pub cases: u32,
    pub revenue: u64,
    pub clients: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusShare {
    pub name: String,
    pub value: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PracticeArea {
    pub area: String,
    pub cases: u32,
    pub revenue: u64,
}

/// Historical series behind the analytics page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsData {
    pub monthly: Vec<MonthlyFigure>,
    pub status_shares: Vec<StatusShare>,
    pub practice_areas: Vec<PracticeArea>,
}

fn month(month: &str, cases: u32, revenue: u64, clients: u32) -> MonthlyFigure {
    MonthlyFigure {
        month: month.into(),
        cases,
        revenue,
        clients,
    }
}

fn share(name: &str, value: u32) -> StatusShare {
    StatusShare {
        name: name.into(),
        value,
    }
}

fn area(area: &str, cases: u32, revenue: u64) -> PracticeArea {
    PracticeArea {
        area: area.into(),
        cases,
        revenue,
    }
}

impl AnalyticsData {
    pub fn demo() -> Self {
        AnalyticsData {
            monthly: vec![
                month("Jan", 12, 24_500, 8),
                month("Feb", 15, 32_000, 12),
                month("Mar", 18, 38_500, 15),
                month("Apr", 22, 45_000, 18),
                month("May", 19, 41_000, 16),
                month("Jun", 25, 52_000, 22),
            ],
            status_shares: vec![
                share("Open", 35),
                share("Closed", 45),
                share("In Review", 15),
                share("Pending", 5),
            ],
            practice_areas: vec![
                area("Corporate Law", 28, 85_000),
                area("Litigation", 22, 65_000),
                area("Real Estate", 15, 45_000),
                area("IP Law", 12, 38_000),
                area("Employment", 8, 25_000),
            ],
        }
    }
}
