use serde::Deserialize;
use serde_json::value::RawValue;

// Dashboard is a deliberately incomplete representation of a dashboard
// document. Only the properties inspected by lint rules are decoded; unknown
// keys are ignored.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Dashboard {
    pub title: String,
    pub templating: Templating,
    pub rows: Vec<Row>,
    pub panels: Vec<Panel>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Templating {
    pub list: Vec<Template>,
}

// Row is the deprecated nesting form: older schema versions group panels
// under "rows" instead of the top-level "panels" property.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Row {
    pub panels: Vec<Panel>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Panel {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub targets: Vec<Target>,
    pub datasource: Datasource,
    pub panels: Vec<Panel>,
    #[serde(rename = "fieldConfig")]
    pub field_config: FieldConfig,
    pub options: serde_json::Value,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Target {
    // Position within the owning panel's target list, assigned on every
    // flatten call. Not part of the document.
    #[serde(skip)]
    pub idx: usize,
    pub expr: String,
    #[serde(rename = "panelId")]
    pub panel_id: i64,
    #[serde(rename = "refId")]
    pub ref_id: String,
    #[serde(rename = "legendFormat")]
    pub legend_format: String,
}

/// A templated variable. `query` is normalized to a single string during
/// decoding, see [`crate::dashboard::decode`].
#[derive(Debug, Default, Clone)]
pub struct Template {
    pub name: String,
    pub label: String,
    pub kind: String,
    pub query: String,
    pub datasource: Datasource,
    pub multi: bool,
    pub all_value: String,
    pub current: TemplateValue,
    pub options: Vec<TemplateOption>,
    pub refresh: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TemplateValue {
    pub text: String,
    pub value: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TemplateOption {
    pub text: String,
    pub value: String,
    pub selected: bool,
}

/// A data-source reference, normalized from its three historical JSON shapes
/// (null, plain string, object with a "uid" key) to one identifier string.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Datasource(pub String);

impl Datasource {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Datasource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct FieldConfig {
    pub defaults: Defaults,
    pub overrides: Vec<Override>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Defaults {
    pub unit: String,
    // Kept undecoded; value mappings have no fixed shape and are only
    // interpreted at rule time.
    pub mappings: Option<Box<RawValue>>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Override {
    pub properties: Vec<OverrideProperty>,
}

#[derive(Debug, Default, Clone)]
pub struct OverrideProperty {
    pub id: String,
    pub value: OverrideValue,
}

/// An override value can be a string or an integer. Overrides carrying any
/// other payload (arrays, objects) decode to `Absent` since no rule inspects
/// them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum OverrideValue {
    #[default]
    Absent,
    Text(String),
    Number(i64),
}

impl OverrideValue {
    pub fn to_value(&self) -> serde_json::Value {
        match self {
            OverrideValue::Absent => serde_json::Value::Null,
            OverrideValue::Text(text) => serde_json::Value::String(text.clone()),
            OverrideValue::Number(number) => serde_json::Value::from(*number),
        }
    }
}

impl Dashboard {
    pub fn new(buf: &[u8]) -> Result<Dashboard, serde_json::Error> {
        serde_json::from_slice(buf)
    }

    /// Returns every panel, whether nested in the deprecated "rows" property
    /// or in the top-level "panels" property, rows first. Each returned panel
    /// is a fresh copy with `Target::idx` assigned from the target's position
    /// in its owning panel.
    pub fn flattened_panels(&self) -> Vec<Panel> {
        let mut panels: Vec<Panel> = Vec::new();
        for row in &self.rows {
            panels.extend(row.flattened_panels());
        }
        for panel in &self.panels {
            panels.extend(panel.flattened_panels());
        }
        for panel in &mut panels {
            for (idx, target) in panel.targets.iter_mut().enumerate() {
                target.idx = idx;
            }
        }
        panels
    }

    /// Returns all templates matching the provided type tag. The comparison
    /// is case insensitive (Unicode case folding, not just ASCII); original
    /// relative order is preserved.
    pub fn templates_of_type(&self, kind: &str) -> Vec<&Template> {
        let kind = kind.to_lowercase();
        self.templating
            .list
            .iter()
            .filter(|template| template.kind.to_lowercase() == kind)
            .collect()
    }
}

impl Row {
    pub fn flattened_panels(&self) -> Vec<Panel> {
        self.panels
            .iter()
            .flat_map(|panel| panel.flattened_panels())
            .collect()
    }
}

impl Panel {
    /// Pre-order traversal: the panel itself, then its nested children.
    pub fn flattened_panels(&self) -> Vec<Panel> {
        let mut panels = vec![self.clone()];
        for child in &self.panels {
            panels.extend(child.flattened_panels());
        }
        panels
    }
}
