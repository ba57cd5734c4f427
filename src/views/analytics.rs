use crate::catalog::{AnalyticsData, Catalog, MonthlyFigure, PracticeArea, StatusShare};
use crate::model::CaseStatus;
use crate::query::Tally;
use crate::store::{Store, StoreError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

/// Change of the latest month against the one before it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trend {
    pub change_percent: f64,
    pub direction: TrendDirection,
}

impl Trend {
    fn between(previous: f64, latest: f64) -> Option<Self> {
        if previous == 0.0 {
            return None;
        }
        let change_percent = (latest - previous) / previous * 100.0;
        let direction = if change_percent > 0.0 {
            TrendDirection::Up
        } else if change_percent < 0.0 {
            TrendDirection::Down
        } else {
            TrendDirection::Flat
        };
        Some(Trend {
            change_percent,
            direction,
        })
    }

    /// e.g. "+26.8%".
    pub fn label(&self) -> String {
        format!("{:+.1}%", self.change_percent)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnalyticsSummary {
    pub total_revenue: u64,
    pub total_cases: u32,
    pub total_new_clients: u32,
    pub revenue_trend: Option<Trend>,
    pub case_trend: Option<Trend>,
}

/// One status slice computed from the live store.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatusSlice {
    pub status: CaseStatus,
    pub count: usize,
    pub percent: f64,
}

/// Read-only projections over the catalog's analytics series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnalyticsView;

impl AnalyticsView {
    pub fn new() -> Self {
        AnalyticsView
    }

    pub fn monthly<'a>(&self, catalog: &'a Catalog) -> &'a [MonthlyFigure] {
        &catalog.analytics.monthly
    }

    pub fn practice_areas<'a>(&self, catalog: &'a Catalog) -> &'a [PracticeArea] {
        &catalog.analytics.practice_areas
    }

    /// The mock distribution shipped with the catalog.
    pub fn status_shares<'a>(&self, catalog: &'a Catalog) -> &'a [StatusShare] {
        &catalog.analytics.status_shares
    }

    pub fn summary(&self, catalog: &Catalog) -> AnalyticsSummary {
        summarize(&catalog.analytics)
    }

    /// Case status distribution computed from the store's cases right now.
    pub fn live_status_distribution(&self, store: &Store) -> Result<Vec<StatusSlice>, StoreError> {
        let tally: Tally<CaseStatus> = Tally::of(&store.cases()?);
        let total = tally.all();
        Ok(tally
            .iter()
            .map(|(status, count)| StatusSlice {
                status,
                count,
                percent: if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64 * 100.0
                },
            })
            .collect())
    }
}

fn summarize(data: &AnalyticsData) -> AnalyticsSummary {
    let monthly = &data.monthly;
    let last_two = match monthly.len() {
        n if n >= 2 => Some((&monthly[n - 2], &monthly[n - 1])),
        _ => None,
    };

    AnalyticsSummary {
        total_revenue: monthly.iter().map(|m| m.revenue).sum(),
        total_cases: monthly.iter().map(|m| m.cases).sum(),
        total_new_clients: monthly.iter().map(|m| m.clients).sum(),
        revenue_trend: last_two
            .and_then(|(prev, last)| Trend::between(prev.revenue as f64, last.revenue as f64)),
        case_trend: last_two
            .and_then(|(prev, last)| Trend::between(prev.cases as f64, last.cases as f64)),
    }
}
