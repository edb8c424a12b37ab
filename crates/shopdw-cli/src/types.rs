use shopdw_model::RunSummary;
use shopdw_report::Analytics;

/// Result of one ETL run as shown to the user.
#[derive(Debug)]
pub struct RunOutcome {
    pub summary: RunSummary,
    pub analytics: Option<Analytics>,
}
