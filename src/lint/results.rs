use std::fmt;

/// Severity levels, ordered least to most severe. `Exclude` marks a
/// diagnostic suppressed by an override, `Quiet` disables a rule entirely;
/// neither is ever reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Success,
    Exclude,
    Warning,
    Error,
    Quiet,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Success => "Success",
            Severity::Exclude => "Excluded",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Quiet => "Quiet",
        };
        f.write_str(label)
    }
}

/// What a rule check emits for one violation. Identity tagging (rule name,
/// dashboard, panel or template) is added by the engine.
#[derive(Debug, Clone)]
pub struct RuleResult {
    pub severity: Severity,
    pub message: String,
}

impl RuleResult {
    pub fn error(message: impl Into<String>) -> RuleResult {
        RuleResult {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> RuleResult {
        RuleResult {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PanelRef {
    pub id: i64,
    pub title: String,
}

/// One fully tagged diagnostic.
#[derive(Debug, Clone)]
pub struct LintResult {
    pub rule: &'static str,
    pub severity: Severity,
    pub dashboard: String,
    pub panel: Option<PanelRef>,
    pub template: Option<String>,
    pub message: String,
}

/// All diagnostics collected from one lint pass over one dashboard.
#[derive(Debug, Default)]
pub struct ResultSet {
    results: Vec<LintResult>,
}

impl ResultSet {
    pub fn new(results: Vec<LintResult>) -> ResultSet {
        ResultSet { results }
    }

    pub fn results(&self) -> &[LintResult] {
        &self.results
    }

    /// Results at or above the given severity. Excluded and quieted results
    /// never pass this filter.
    pub fn at_or_above(&self, min: Severity) -> Vec<&LintResult> {
        self.results
            .iter()
            .filter(|result| {
                result.severity != Severity::Exclude
                    && result.severity != Severity::Quiet
                    && result.severity >= min
            })
            .collect()
    }

    pub fn reportable(&self) -> Vec<&LintResult> {
        self.at_or_above(Severity::Warning)
    }

    pub fn is_passing(&self) -> bool {
        self.reportable().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severities_are_ordered_least_to_most_severe() {
        assert!(Severity::Success < Severity::Exclude);
        assert!(Severity::Exclude < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Quiet);
    }

    #[test]
    fn excluded_results_are_never_reportable() {
        let results = ResultSet::new(vec![
            LintResult {
                rule: "a-rule",
                severity: Severity::Exclude,
                dashboard: "d".to_string(),
                panel: None,
                template: None,
                message: "suppressed".to_string(),
            },
            LintResult {
                rule: "a-rule",
                severity: Severity::Error,
                dashboard: "d".to_string(),
                panel: None,
                template: None,
                message: "reported".to_string(),
            },
        ]);

        let reportable = results.reportable();
        assert_eq!(reportable.len(), 1);
        assert_eq!(reportable[0].message, "reported");
        assert!(!results.is_passing());

        assert_eq!(results.at_or_above(Severity::Success).len(), 1);
    }
}
