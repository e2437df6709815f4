use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{
    paths::DEFAULT_BASE_PATH,
    value_objects::{EntityType, ViewEngine},
};

/// Default entity name offered by the answer phase.
pub const DEFAULT_ENTITY_NAME: &str = "tux-element";

/// Default version offered by the answer phase.
pub const DEFAULT_VERSION: &str = "0.0.0";

/// One answer per question, exactly as collected.
///
/// Nothing is validated here. The answer transport fills every field (with
/// its own defaults where a question was skipped) and the resolver decides
/// which values survive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAnswers {
    pub entity_name: String,
    pub entity_type: EntityType,
    /// Only asked for elements.
    pub generate_element_behavior: bool,
    pub version: String,
    /// Only asked when an elements registry exists.
    pub add_to_elements: bool,
    pub view_engine: ViewEngine,
    pub base_path: PathBuf,
    pub skip_install: bool,
}

impl RawAnswers {
    /// Answers for `entity_name` with every other question at its default.
    pub fn new(entity_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            ..Self::default()
        }
    }

    pub fn with_entity_type(mut self, entity_type: EntityType) -> Self {
        self.entity_type = entity_type;
        self
    }

    pub fn with_behavior(mut self, generate: bool) -> Self {
        self.generate_element_behavior = generate;
        self
    }

    pub fn with_base_path(mut self, base_path: impl Into<PathBuf>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn with_view_engine(mut self, view_engine: ViewEngine) -> Self {
        self.view_engine = view_engine;
        self
    }
}

impl Default for RawAnswers {
    fn default() -> Self {
        Self {
            entity_name: DEFAULT_ENTITY_NAME.to_string(),
            entity_type: EntityType::Element,
            generate_element_behavior: false,
            version: DEFAULT_VERSION.to_string(),
            add_to_elements: false,
            view_engine: ViewEngine::Ejs,
            base_path: PathBuf::from(DEFAULT_BASE_PATH),
            skip_install: true,
        }
    }
}
