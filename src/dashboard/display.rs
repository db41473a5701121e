use colored::*;

use super::types::Dashboard;

fn header(head: &str) -> String {
    let padding = 16usize.saturating_sub(head.len() + 4);
    let mut header = format!("  {}  ", head);
    for _ in 0..padding {
        header.push(' ');
    }

    header.on_green().black().to_string()
}

pub fn print_dashboard(dashboard: Dashboard) {
    println!("{}  {}", header("Dashboard"), dashboard.title);

    println!("\n{}", header("Templates"));
    for template in &dashboard.templating.list {
        println!("\n  {}  {} ({})", header("Name"), template.name, template.kind);
        if !template.query.is_empty() {
            println!("  {}  {}", header("Query"), template.query);
        }
        if !template.datasource.is_empty() {
            println!("  {}  {}", header("Datasource"), template.datasource);
        }
    }

    println!("\n{}", header("Panels"));
    for panel in dashboard.flattened_panels() {
        println!(
            "\n  {}  {} (id {}, {})",
            header("Title"),
            panel.title,
            panel.id,
            panel.kind
        );
        for target in &panel.targets {
            println!("  {}  [{}] {}", header("Target"), target.idx, target.expr);
        }
    }
}
