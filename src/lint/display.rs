use colored::*;

use crate::lint::results::{LintResult, Severity};

pub fn error_header(head: &str) -> String {
    format!("  {}  ", head).on_red().black().to_string()
}

pub fn severity_header(severity: Severity) -> String {
    let label = format!("  {}  ", severity);
    match severity {
        Severity::Error => label.on_red().black().to_string(),
        Severity::Warning => label.on_yellow().black().to_string(),
        _ => label.on_green().black().to_string(),
    }
}

pub fn format_result(result: &LintResult) -> String {
    let location = match (&result.panel, &result.template) {
        (Some(panel), _) => format!(
            "dashboard '{}', panel '{}' (id {})",
            result.dashboard, panel.title, panel.id
        ),
        (None, Some(template)) => {
            format!("dashboard '{}', template '{}'", result.dashboard, template)
        }
        (None, None) => format!("dashboard '{}'", result.dashboard),
    };

    format!(
        "{} {} - {} {}",
        severity_header(result.severity),
        result.rule,
        location,
        result.message
    )
}
