pub mod panel_title;
pub mod panel_units;
pub mod template_datasource;

use crate::lint::engine::Rule;

pub fn default_rules() -> Vec<Rule> {
    vec![
        panel_units::rule(),
        panel_title::rule(),
        template_datasource::rule(),
    ]
}
