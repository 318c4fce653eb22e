//! Folder type schema: the declarative list of folder kinds, their allowed
//! children and their property fields.

use rustc_hash::FxHashMap;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::fmt;
use std::path::PathBuf;

const DEFAULT_ROOT_TYPE: &str = "Project";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSpec {
    Input(String),
    Dropdown(Vec<String>),
    Checkbox(bool),
    /// Read-only cross reference; its value is picked through a search.
    Reference(String),
}

impl FieldSpec {
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldSpec::Input(_) => "input",
            FieldSpec::Dropdown(_) => "dropdown",
            FieldSpec::Checkbox(_) => "checkbox",
            FieldSpec::Reference(_) => "nav",
        }
    }
}

/// Ordered property fields of one folder type, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    fields: Vec<(String, FieldSpec)>,
}

impl Properties {
    pub fn new(fields: Vec<(String, FieldSpec)>) -> Self {
        Self { fields }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDefinition {
    pub name: String,
    pub description: String,
    pub icon_light: String,
    pub icon_dark: String,
    pub root: bool,
    allowed_children: Vec<String>,
    properties: Option<Properties>,
}

impl TypeDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            icon_light: String::new(),
            icon_dark: String::new(),
            root: false,
            allowed_children: Vec::new(),
            properties: None,
        }
    }

    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_children = children.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = Some(properties);
        self
    }

    pub fn allowed_children(&self) -> &[String] {
        &self.allowed_children
    }

    /// `None` when the type declares no property schema at all.
    pub fn properties(&self) -> Option<&Properties> {
        self.properties.as_ref()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(String),
    Empty,
    MissingField { index: usize, field: &'static str },
    DuplicateType(String),
    InvalidField {
        type_name: String,
        field: String,
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "cannot read config {}: {}", path.display(), source)
            }
            ConfigError::Parse(msg) => write!(f, "malformed config: {}", msg),
            ConfigError::Empty => write!(f, "config defines no folder types"),
            ConfigError::MissingField { index, field } => {
                write!(f, "type entry #{} is missing required field `{}`", index, field)
            }
            ConfigError::DuplicateType(name) => write!(f, "duplicate folder type `{}`", name),
            ConfigError::InvalidField {
                type_name,
                field,
                reason,
            } => write!(
                f,
                "invalid property `{}` on type `{}`: {}",
                field, type_name, reason
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A node refers to a folder type the config does not define.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupError {
    pub type_name: String,
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown folder type `{}`", self.type_name)
    }
}

impl std::error::Error for LookupError {}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawChild {
    Name(String),
    Entry { name: String },
}

impl RawChild {
    fn into_name(self) -> String {
        match self {
            RawChild::Name(name) | RawChild::Entry { name } => name,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawTypeDefinition {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    light_ico: Option<String>,
    #[serde(default)]
    dark_ico: Option<String>,
    #[serde(default)]
    root: Option<bool>,
    #[serde(default)]
    children: Option<Vec<RawChild>>,
    #[serde(default)]
    properties: Option<Mapping>,
}

#[derive(Debug, Clone)]
pub struct Schema {
    types: Vec<TypeDefinition>,
    index: FxHashMap<String, usize>,
    root: usize,
}

impl Schema {
    pub fn new(types: Vec<TypeDefinition>) -> Result<Self, ConfigError> {
        if types.is_empty() {
            return Err(ConfigError::Empty);
        }

        let mut index = FxHashMap::default();
        for (i, def) in types.iter().enumerate() {
            if def.name.trim().is_empty() {
                return Err(ConfigError::MissingField {
                    index: i,
                    field: "name",
                });
            }
            if index.insert(def.name.clone(), i).is_some() {
                return Err(ConfigError::DuplicateType(def.name.clone()));
            }
        }

        for def in &types {
            for child in &def.allowed_children {
                if !index.contains_key(child) {
                    tracing::warn!(
                        type_name = %def.name,
                        child = %child,
                        "allowed child refers to an unknown type"
                    );
                }
            }
        }

        let root = types
            .iter()
            .position(|t| t.root)
            .or_else(|| index.get(DEFAULT_ROOT_TYPE).copied())
            .unwrap_or(0);

        Ok(Self { types, index, root })
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let doc: Value =
            serde_yaml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        let entries = match doc {
            Value::Null => return Err(ConfigError::Empty),
            Value::Sequence(entries) => entries,
            _ => {
                return Err(ConfigError::Parse(
                    "expected a list of folder type definitions".to_string(),
                ))
            }
        };

        let mut types = Vec::with_capacity(entries.len());
        for (i, entry) in entries.into_iter().enumerate() {
            let raw: RawTypeDefinition = serde_yaml::from_value(entry)
                .map_err(|e| ConfigError::Parse(format!("type entry #{}: {}", i, e)))?;
            types.push(convert_type(i, raw)?);
        }

        Self::new(types)
    }

    pub fn types(&self) -> &[TypeDefinition] {
        &self.types
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|t| t.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&TypeDefinition> {
        self.index.get(name).map(|&i| &self.types[i])
    }

    pub fn lookup(&self, name: &str) -> Result<&TypeDefinition, LookupError> {
        self.get(name).ok_or_else(|| LookupError {
            type_name: name.to_string(),
        })
    }

    pub fn root_type(&self) -> &TypeDefinition {
        &self.types[self.root]
    }

    /// Child types a folder of `type_name` may hold, restricted to known types
    /// and listed in schema order.
    pub fn allowed_children(&self, type_name: &str) -> Vec<String> {
        let Some(def) = self.get(type_name) else {
            return Vec::new();
        };
        self.types
            .iter()
            .filter(|t| def.allowed_children.iter().any(|c| c == &t.name))
            .map(|t| t.name.clone())
            .collect()
    }
}

fn convert_type(index: usize, raw: RawTypeDefinition) -> Result<TypeDefinition, ConfigError> {
    let name = raw
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .ok_or(ConfigError::MissingField {
            index,
            field: "name",
        })?;

    let properties = match raw.properties {
        Some(mapping) => Some(convert_properties(&name, mapping)?),
        None => None,
    };

    Ok(TypeDefinition {
        description: raw.description.unwrap_or_default(),
        icon_light: raw.light_ico.unwrap_or_default(),
        icon_dark: raw.dark_ico.unwrap_or_default(),
        root: raw.root.unwrap_or(false),
        allowed_children: raw
            .children
            .unwrap_or_default()
            .into_iter()
            .map(RawChild::into_name)
            .collect(),
        properties,
        name,
    })
}

fn convert_properties(type_name: &str, mapping: Mapping) -> Result<Properties, ConfigError> {
    let mut fields = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
        let Some(key) = scalar_to_string(&key).filter(|k| !k.is_empty()) else {
            return Err(ConfigError::InvalidField {
                type_name: type_name.to_string(),
                field: format!("{:?}", key),
                reason: "property names must be non-empty scalars".to_string(),
            });
        };
        if fields.iter().any(|(k, _): &(String, FieldSpec)| k == &key) {
            return Err(invalid(type_name, &key, "declared twice"));
        }
        let spec = convert_field(type_name, &key, value)?;
        fields.push((key, spec));
    }
    Ok(Properties::new(fields))
}

fn convert_field(type_name: &str, key: &str, value: Value) -> Result<FieldSpec, ConfigError> {
    let Value::Mapping(entry) = value else {
        return Err(invalid(type_name, key, "expected a mapping with `type` and `value`"));
    };

    let kind = entry
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| invalid(type_name, key, "missing field kind `type`"))?;
    let value = entry.get("value").cloned().unwrap_or(Value::Null);
    let value = &value;

    match kind {
        "input" => scalar_to_string(value)
            .map(FieldSpec::Input)
            .ok_or_else(|| invalid(type_name, key, "input value must be a scalar")),
        "nav" | "reference" => scalar_to_string(value)
            .map(FieldSpec::Reference)
            .ok_or_else(|| invalid(type_name, key, "nav value must be a scalar")),
        "checkbox" => match value {
            Value::Null => Ok(FieldSpec::Checkbox(false)),
            Value::Bool(checked) => Ok(FieldSpec::Checkbox(*checked)),
            _ => Err(invalid(type_name, key, "checkbox value must be a boolean")),
        },
        "dropdown" => match value {
            Value::Null => Ok(FieldSpec::Dropdown(Vec::new())),
            Value::Sequence(items) => items
                .iter()
                .map(scalar_to_string)
                .collect::<Option<Vec<_>>>()
                .map(FieldSpec::Dropdown)
                .ok_or_else(|| invalid(type_name, key, "dropdown options must be scalars")),
            _ => Err(invalid(type_name, key, "dropdown value must be a list")),
        },
        other => Err(invalid(
            type_name,
            key,
            &format!("unknown field kind `{}`", other),
        )),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn invalid(type_name: &str, field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidField {
        type_name: type_name.to_string(),
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/schema.rs"]
mod tests;
