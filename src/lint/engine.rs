use std::collections::HashMap;

use crate::dashboard::types::{Dashboard, Panel, Template};
use crate::lint::results::{LintResult, PanelRef, ResultSet, RuleResult, Severity};

pub type PanelCheck = fn(&Dashboard, &Panel) -> Vec<RuleResult>;
pub type TemplateCheck = fn(&Dashboard, &Template) -> Vec<RuleResult>;

/// A rule is data: a name, a description, a declared severity and a pure
/// check function over one of the two entity kinds. Adding a rule is writing
/// one function plus a registry entry.
pub enum Rule {
    Panel {
        name: &'static str,
        description: &'static str,
        severity: Severity,
        check: PanelCheck,
    },
    Template {
        name: &'static str,
        description: &'static str,
        severity: Severity,
        check: TemplateCheck,
    },
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Panel { name, .. } => name,
            Rule::Template { name, .. } => name,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Rule::Panel { description, .. } => description,
            Rule::Template { description, .. } => description,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Rule::Panel { severity, .. } => *severity,
            Rule::Template { severity, .. } => *severity,
        }
    }
}

/// The registered rules for one lint pass, with optional per-rule severity
/// overrides. An override to `Quiet` disables the rule, an override to
/// `Exclude` collects its results but suppresses reporting.
pub struct RuleSet {
    rules: Vec<Rule>,
    severity_overrides: HashMap<String, Severity>,
}

impl Default for RuleSet {
    fn default() -> RuleSet {
        RuleSet::new(crate::rules::default_rules())
    }
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> RuleSet {
        RuleSet {
            rules,
            severity_overrides: HashMap::new(),
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn with_severity(mut self, rule_name: &str, severity: Severity) -> RuleSet {
        self.severity_overrides
            .insert(rule_name.to_string(), severity);
        self
    }

    /// Runs every panel-rule once per flattened panel and every template-rule
    /// once per template, in registration order. Results from one rule keep
    /// panel-flatten order.
    pub fn lint(&self, dashboard: &Dashboard) -> ResultSet {
        let panels = dashboard.flattened_panels();
        let mut results = Vec::new();

        for rule in &self.rules {
            let override_severity = self.severity_overrides.get(rule.name()).copied();
            if override_severity == Some(Severity::Quiet) {
                continue;
            }

            match *rule {
                Rule::Panel { name, check, .. } => {
                    for panel in &panels {
                        for outcome in check(dashboard, panel) {
                            results.push(LintResult {
                                rule: name,
                                severity: override_severity.unwrap_or(outcome.severity),
                                dashboard: dashboard.title.clone(),
                                panel: Some(PanelRef {
                                    id: panel.id,
                                    title: panel.title.clone(),
                                }),
                                template: None,
                                message: outcome.message,
                            });
                        }
                    }
                }
                Rule::Template { name, check, .. } => {
                    for template in &dashboard.templating.list {
                        for outcome in check(dashboard, template) {
                            results.push(LintResult {
                                rule: name,
                                severity: override_severity.unwrap_or(outcome.severity),
                                dashboard: dashboard.title.clone(),
                                panel: None,
                                template: Some(template.name.clone()),
                                message: outcome.message,
                            });
                        }
                    }
                }
            }
        }

        ResultSet::new(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flag_every_panel(_dashboard: &Dashboard, panel: &Panel) -> Vec<RuleResult> {
        vec![RuleResult::error(format!("panel {} flagged", panel.id))]
    }

    fn flag_every_template(_dashboard: &Dashboard, template: &Template) -> Vec<RuleResult> {
        vec![RuleResult::warning(format!(
            "template {} flagged",
            template.name
        ))]
    }

    fn test_rules() -> Vec<Rule> {
        vec![
            Rule::Panel {
                name: "flag-panels",
                description: "Flags every panel.",
                severity: Severity::Error,
                check: flag_every_panel,
            },
            Rule::Template {
                name: "flag-templates",
                description: "Flags every template.",
                severity: Severity::Warning,
                check: flag_every_template,
            },
        ]
    }

    fn dashboard() -> Dashboard {
        let input = r#"
            {
                "title": "Service overview",
                "templating": {
                    "list": [ { "name": "job", "type": "query", "query": "label_values(job)" } ]
                },
                "rows": [ { "panels": [ { "id": 1, "title": "Latency", "type": "graph" } ] } ],
                "panels": [ { "id": 2, "title": "Errors", "type": "graph" } ]
            }
        "#;
        Dashboard::new(input.as_bytes()).expect("valid dashboard json")
    }

    #[test]
    fn runs_rules_over_panels_and_templates_in_flatten_order() {
        let results = RuleSet::new(test_rules()).lint(&dashboard());

        let messages: Vec<&str> = results
            .results()
            .iter()
            .map(|result| result.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec![
                "panel 1 flagged",
                "panel 2 flagged",
                "template job flagged"
            ]
        );

        let first = &results.results()[0];
        assert_eq!(first.rule, "flag-panels");
        assert_eq!(first.severity, Severity::Error);
        assert_eq!(first.dashboard, "Service overview");
        assert_eq!(first.panel.as_ref().map(|p| p.id), Some(1));

        let last = &results.results()[2];
        assert_eq!(last.severity, Severity::Warning);
        assert_eq!(last.template.as_deref(), Some("job"));
    }

    #[test]
    fn quiet_override_disables_a_rule() {
        let results = RuleSet::new(test_rules())
            .with_severity("flag-panels", Severity::Quiet)
            .lint(&dashboard());

        assert_eq!(results.results().len(), 1);
        assert_eq!(results.results()[0].rule, "flag-templates");
    }

    #[test]
    fn exclude_override_collects_but_never_reports() {
        let results = RuleSet::new(test_rules())
            .with_severity("flag-panels", Severity::Exclude)
            .lint(&dashboard());

        assert_eq!(results.results().len(), 3);
        let reportable = results.reportable();
        assert_eq!(reportable.len(), 1);
        assert_eq!(reportable[0].rule, "flag-templates");
    }

    #[test]
    fn severity_override_replaces_the_emitted_severity() {
        let results = RuleSet::new(test_rules())
            .with_severity("flag-templates", Severity::Error)
            .lint(&dashboard());

        assert_eq!(results.results()[2].severity, Severity::Error);
    }
}
