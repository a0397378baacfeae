//! The normalized metadata model and its conversions from each format.

use std::{collections::BTreeMap, fmt};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// A single front matter value, independent of the format it came from.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Map(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<toml::Value> for Value {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => Value::String(s),
            toml::Value::Integer(i) => Value::Integer(i),
            toml::Value::Float(x) => Value::Float(x),
            toml::Value::Boolean(b) => Value::Bool(b),
            toml::Value::Datetime(dt) => Value::String(dt.to_string()),
            toml::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            toml::Value::Table(table) => {
                Value::Map(table.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<serde_yaml::Value> for Value {
    fn from(value: serde_yaml::Value) -> Self {
        match value {
            serde_yaml::Value::Null => Value::Null,
            serde_yaml::Value::Bool(b) => Value::Bool(b),
            serde_yaml::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            serde_yaml::Value::String(s) => Value::String(s),
            serde_yaml::Value::Sequence(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_yaml::Value::Mapping(mapping) => Value::Map(yaml_mapping(mapping)),
            serde_yaml::Value::Tagged(tagged) => tagged.value.into(),
        }
    }
}

/// Converts a YAML mapping into string-keyed variables.
///
/// Scalar keys are stringified; entries keyed by a sequence or mapping are
/// dropped since they can't be addressed by name. When two keys stringify
/// the same, the later entry wins.
pub(crate) fn yaml_mapping(mapping: serde_yaml::Mapping) -> BTreeMap<String, Value> {
    let mut map = BTreeMap::new();

    for (key, value) in mapping {
        let key = match key {
            serde_yaml::Value::String(s) => s,
            serde_yaml::Value::Number(n) => n.to_string(),
            serde_yaml::Value::Bool(b) => b.to_string(),
            serde_yaml::Value::Null => "null".to_string(),
            other => {
                tracing::debug!("skipping front matter entry with non-scalar key {other:?}");
                continue;
            }
        };
        if let Some(previous) = map.insert(key.clone(), value.into()) {
            tracing::debug!("front matter key {key:?} appears more than once, dropping {previous:?}");
        }
    }

    map
}

/// Normalized metadata of one front matter block.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Metadata {
    pub title: String,
    pub template: String,
    pub date: Option<DateTime<FixedOffset>>,
    /// Every key of the block, including the ones hoisted above.
    pub variables: BTreeMap<String, Value>,
}

impl Metadata {
    pub fn new(variables: BTreeMap<String, Value>) -> Self {
        let string_var = |key: &str| {
            variables
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        let title = string_var("title");
        let template = string_var("template");
        let date = variables
            .get("date")
            .and_then(Value::as_str)
            .and_then(parse_date);

        Self {
            title,
            template,
            date,
            variables,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.variables.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

const DATETIME_LAYOUTS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parses the date formats accepted in front matter. Dates without an
/// offset are UTC.
pub fn parse_date(input: &str) -> Option<DateTime<FixedOffset>> {
    let input = input.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(input) {
        return Some(date);
    }

    if let Ok(date) = DateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S%z") {
        return Some(date);
    }

    for layout in DATETIME_LAYOUTS {
        if let Ok(date) = NaiveDateTime::parse_from_str(input, layout) {
            return Some(date.and_utc().fixed_offset());
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|d| d.and_utc().fixed_offset())
}
