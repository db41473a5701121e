//! Decode policies for the fields whose JSON shape varies across dashboard
//! schema versions and exporters. Each polymorphic field has a single named
//! conversion function; the `Deserialize` impls below only wire those
//! functions into serde.

use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::types::{
    Datasource, OverrideProperty, OverrideValue, Template, TemplateOption, TemplateValue,
};

/// A template query is either a plain string or an object carrying the string
/// under a nested "query" key.
fn query_string(value: &Value) -> Result<String, String> {
    match value {
        Value::String(query) => Ok(query.clone()),
        Value::Object(map) => match map.get("query") {
            Some(Value::String(query)) => Ok(query.clone()),
            _ => Err(format!("invalid type for field 'query': {}", value)),
        },
        other => Err(format!("invalid type for field 'query': {}", other)),
    }
}

/// Current-value fields are either a plain string or an array whose first
/// element is the string to use. Any other shape, explicit null included,
/// is a decode error; only an absent key decodes to the empty string.
fn string_or_first(value: &Option<Value>, field: &str) -> Result<String, String> {
    match value {
        None => Ok(String::new()),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(value @ Value::Array(items)) => match items.first() {
            Some(Value::String(text)) => Ok(text.clone()),
            _ => Err(format!("invalid type for field '{}': {}", field, value)),
        },
        Some(other) => Err(format!("invalid type for field '{}': {}", field, other)),
    }
}

// Keeps an explicitly-null key distinguishable from an absent one: absence
// stays `None` through the struct-level default, a present key always
// becomes `Some`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// A datasource reference is null, a plain identifier string, or an object
/// with a string "uid" key.
fn datasource_uid(value: &Value) -> Result<String, String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(uid) => Ok(uid.clone()),
        Value::Object(map) => match map.get("uid") {
            Some(Value::String(uid)) => Ok(uid.clone()),
            Some(_) => Err(
                "invalid type for field 'datasource': invalid uid field type, should be string"
                    .to_string(),
            ),
            None => Err("invalid type for field 'datasource': missing uid field".to_string()),
        },
        other => Err(format!("invalid type for field 'datasource': {}", other)),
    }
}

impl<'de> Deserialize<'de> for Datasource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        datasource_uid(&value).map(Datasource).map_err(D::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Template {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize, Default)]
        #[serde(default)]
        struct RawTemplate {
            name: String,
            label: String,
            #[serde(rename = "type")]
            kind: String,
            query: Value,
            datasource: Datasource,
            multi: bool,
            #[serde(rename = "allValue")]
            all_value: String,
            current: TemplateValue,
            options: Vec<TemplateOption>,
            refresh: i64,
        }

        let raw = RawTemplate::deserialize(deserializer)?;

        // The 'adhoc' and 'custom' variable types carry no query, so its
        // shape is not interrogated for those.
        let query = match raw.kind.as_str() {
            "adhoc" | "custom" => String::new(),
            _ => query_string(&raw.query).map_err(D::Error::custom)?,
        };

        Ok(Template {
            name: raw.name,
            label: raw.label,
            kind: raw.kind,
            query,
            datasource: raw.datasource,
            multi: raw.multi,
            all_value: raw.all_value,
            current: raw.current,
            options: raw.options,
            refresh: raw.refresh,
        })
    }
}

impl<'de> Deserialize<'de> for TemplateValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize, Default)]
        #[serde(default)]
        struct RawValue {
            #[serde(deserialize_with = "present")]
            text: Option<Value>,
            #[serde(deserialize_with = "present")]
            value: Option<Value>,
        }

        let raw = RawValue::deserialize(deserializer)?;

        Ok(TemplateValue {
            text: string_or_first(&raw.text, "text").map_err(D::Error::custom)?,
            value: string_or_first(&raw.value, "value").map_err(D::Error::custom)?,
        })
    }
}

impl<'de> Deserialize<'de> for TemplateOption {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize, Default)]
        #[serde(default)]
        struct RawOption {
            #[serde(deserialize_with = "present")]
            text: Option<Value>,
            #[serde(deserialize_with = "present")]
            value: Option<Value>,
            selected: bool,
        }

        let raw = RawOption::deserialize(deserializer)?;

        Ok(TemplateOption {
            text: string_or_first(&raw.text, "text").map_err(D::Error::custom)?,
            value: string_or_first(&raw.value, "value").map_err(D::Error::custom)?,
            selected: raw.selected,
        })
    }
}

impl<'de> Deserialize<'de> for OverrideProperty {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawText {
            id: String,
            value: String,
        }

        #[derive(Deserialize)]
        struct RawNumber {
            id: String,
            value: i64,
        }

        let value = Value::deserialize(deserializer)?;

        // Override values come in many shapes (strings, integers, arrays of
        // mapping objects). Only string and integer payloads are inspected by
        // rules; everything else decodes to the empty no-op property.
        if let Ok(raw) = serde_json::from_value::<RawText>(value.clone()) {
            return Ok(OverrideProperty {
                id: raw.id,
                value: OverrideValue::Text(raw.value),
            });
        }
        if let Ok(raw) = serde_json::from_value::<RawNumber>(value) {
            return Ok(OverrideProperty {
                id: raw.id,
                value: OverrideValue::Number(raw.value),
            });
        }

        Ok(OverrideProperty::default())
    }
}
