use crate::dashboard::types::{Dashboard, Panel};
use crate::lint::engine::Rule;
use crate::lint::results::{RuleResult, Severity};

use super::panel_units::UNIT_CHECKED_PANEL_KINDS;

pub fn rule() -> Rule {
    Rule::Panel {
        name: "panel-title-description-rule",
        description: "Checks that each visualization panel has a title and a description.",
        severity: Severity::Warning,
        check: check_panel_title,
    }
}

fn check_panel_title(_dashboard: &Dashboard, panel: &Panel) -> Vec<RuleResult> {
    if !UNIT_CHECKED_PANEL_KINDS.contains(&panel.kind.as_str()) {
        return Vec::new();
    }

    let mut results = Vec::new();
    if panel.title.is_empty() {
        results.push(RuleResult::warning("has no title defined"));
    }
    if panel.description.is_empty() {
        results.push(RuleResult::warning("has no description defined"));
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(input: &str) -> Vec<RuleResult> {
        let panel: Panel = serde_json::from_str(input).expect("valid panel json");
        check_panel_title(&Dashboard::default(), &panel)
    }

    #[test]
    fn accepts_a_documented_panel() {
        let results = check(
            r#"{ "id": 1, "type": "graph", "title": "Latency", "description": "p99 latency" }"#,
        );
        assert!(results.is_empty());
    }

    #[test]
    fn reports_each_missing_field_separately() {
        let results = check(r#"{ "id": 1, "type": "graph" }"#);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].message, "has no title defined");
        assert_eq!(results[1].message, "has no description defined");
        assert!(results
            .iter()
            .all(|result| result.severity == Severity::Warning));
    }

    #[test]
    fn skips_structural_panels() {
        let results = check(r#"{ "id": 1, "type": "row" }"#);
        assert!(results.is_empty());
    }
}
