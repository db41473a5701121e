pub mod dashboard;
pub mod lint;
pub mod rules;

use dashboard::types::Dashboard;
use lint::engine::RuleSet;
use lint::results::ResultSet;

/// Decodes one dashboard document and runs the default rule set over it.
/// Decode failures are hard errors; rule violations are collected in the
/// returned result set.
pub fn lint_dashboard(buf: &[u8]) -> Result<ResultSet, serde_json::Error> {
    let dashboard = Dashboard::new(buf)?;

    Ok(RuleSet::default().lint(&dashboard))
}
