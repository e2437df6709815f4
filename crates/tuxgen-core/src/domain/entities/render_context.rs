use std::collections::HashMap;

use serde::Serialize;

use crate::domain::entities::resolved_config::ResolvedConfig;

/// Context for template rendering.
///
/// A flat variable map built from a serialized value. Keys are the
/// top-level field names (`entityName`, `pathToEntity`, ...). Strings are
/// used verbatim, booleans and numbers via their JSON text, and `null`
/// fields are left out.
///
/// Immutable after creation - transformations create new instances (see
/// `with_variable`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten any serializable struct into a context.
    ///
    /// Fails when the value does not serialize to a JSON object, or when a
    /// field cannot be represented (e.g. a non UTF-8 path).
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        let object = match serde_json::to_value(value)? {
            serde_json::Value::Object(map) => map,
            other => {
                return Err(serde::ser::Error::custom(format!(
                    "render context must be an object, got {other}"
                )));
            }
        };

        let variables = object
            .into_iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    serde_json::Value::Null => return None,
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                Some((key, text))
            })
            .collect();

        Ok(Self { variables })
    }

    /// Context exposing every field of a resolved configuration.
    pub fn for_config(config: &ResolvedConfig) -> Result<Self, serde_json::Error> {
        Self::from_serialize(config)
    }

    /// Add a custom variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
