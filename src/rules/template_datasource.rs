use crate::dashboard::types::{Dashboard, Template};
use crate::lint::engine::Rule;
use crate::lint::results::{RuleResult, Severity};

pub fn rule() -> Rule {
    Rule::Template {
        name: "template-datasource-rule",
        description: "Checks that each query template has a datasource and a query defined.",
        severity: Severity::Error,
        check: check_template_datasource,
    }
}

fn check_template_datasource(_dashboard: &Dashboard, template: &Template) -> Vec<RuleResult> {
    if !template.kind.eq_ignore_ascii_case("query") {
        return Vec::new();
    }

    let mut results = Vec::new();
    if template.datasource.is_empty() {
        results.push(RuleResult::error("has no datasource defined"));
    }
    if template.query.is_empty() {
        results.push(RuleResult::error("has no query defined"));
    }
    results
}
