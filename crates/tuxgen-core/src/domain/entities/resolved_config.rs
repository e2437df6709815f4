//! The fully resolved configuration ("props") handed to the materializer.

use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use crate::domain::{
    entities::answers::RawAnswers,
    naming::{NameForms, derive_behavior_name},
    paths::{PATH_TO_BOWER, resolve_entity_stem, resolve_relative},
    value_objects::{EntityType, ViewEngine},
};

/// Behavior name and its derived forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BehaviorNames {
    pub name: String,
    pub forms: NameForms,
}

impl BehaviorNames {
    fn for_entity(entity_name: &str) -> Self {
        let name = derive_behavior_name(entity_name);
        let forms = NameForms::derive(&name);
        Self { name, forms }
    }
}

/// Immutable configuration built once per run from [`RawAnswers`].
///
/// Every derived field is computed inside [`ResolvedConfig::resolve`]; there
/// are no setters. Serializes with the camelCase keys templates reference
/// (`entityNameCamel`, `pathToEntity`, ...), omitting absent behavior fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    entity_name: String,
    entity_type: EntityType,
    entity_forms: NameForms,
    behavior: Option<BehaviorNames>,
    generate_element_behavior: bool,
    version: String,
    view_engine: ViewEngine,
    base_path: PathBuf,
    path_to_entity: PathBuf,
    path_to_base: PathBuf,
    skip_install: bool,
}

impl ResolvedConfig {
    /// Resolve raw answers against what the host project recorded.
    ///
    /// * `manifest_engine`: view engine recorded in the host manifest, if
    ///   any. It wins over the answered engine.
    /// * `cwd`: invocation root; relative asset paths are computed against it.
    ///
    /// The answered `add_to_elements` is discarded: see
    /// [`ResolvedConfig::add_to_elements`].
    pub fn resolve(answers: RawAnswers, manifest_engine: Option<ViewEngine>, cwd: &Path) -> Self {
        let RawAnswers {
            entity_name,
            entity_type,
            generate_element_behavior,
            version,
            add_to_elements: _,
            view_engine,
            base_path,
            skip_install,
        } = answers;

        let view_engine = manifest_engine.unwrap_or(view_engine);

        let behavior = (entity_type.is_behavior() || generate_element_behavior)
            .then(|| BehaviorNames::for_entity(&entity_name));

        let entity_forms = NameForms::derive(&entity_name);

        let path_to_entity = resolve_entity_stem(&base_path, &entity_name);
        let path_to_base = resolve_relative(&path_to_entity, &base_path, cwd);

        Self {
            entity_name,
            entity_type,
            entity_forms,
            behavior,
            generate_element_behavior,
            version,
            view_engine,
            base_path,
            path_to_entity,
            path_to_base,
            skip_install,
        }
    }

    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    pub fn entity_name_camel(&self) -> &str {
        &self.entity_forms.camel
    }

    pub fn entity_name_capital(&self) -> &str {
        &self.entity_forms.capital
    }

    pub fn behavior(&self) -> Option<&BehaviorNames> {
        self.behavior.as_ref()
    }

    pub fn behavior_name(&self) -> Option<&str> {
        self.behavior.as_ref().map(|b| b.name.as_str())
    }

    pub fn behavior_name_camel(&self) -> Option<&str> {
        self.behavior.as_ref().map(|b| b.forms.camel.as_str())
    }

    pub fn behavior_name_capital(&self) -> Option<&str> {
        self.behavior.as_ref().map(|b| b.forms.capital.as_str())
    }

    /// Whether the behavior file is materialized.
    pub fn generate_element_behavior(&self) -> bool {
        self.generate_element_behavior
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn view_engine(&self) -> ViewEngine {
        self.view_engine
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// `base/name/name`, the stem every generated file shares.
    pub fn path_to_entity(&self) -> &Path {
        &self.path_to_entity
    }

    /// Relative path from the entity directory back to the base path.
    pub fn path_to_elements(&self) -> &Path {
        &self.path_to_base
    }

    /// Same value as [`Self::path_to_elements`]; templates use both names.
    pub fn path_to_scripts(&self) -> &Path {
        &self.path_to_base
    }

    pub const fn path_to_bower(&self) -> &'static str {
        PATH_TO_BOWER
    }

    /// Always `false`.
    ///
    /// The question is asked when an elements registry exists, but the
    /// answer is dropped during resolution and nothing ever edits the
    /// registry. Likely a latent defect; kept so generated output does not
    /// change.
    pub const fn add_to_elements(&self) -> bool {
        false
    }

    pub fn skip_install(&self) -> bool {
        self.skip_install
    }

    fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            entity_name: &self.entity_name,
            entity_type: self.entity_type,
            entity_name_camel: self.entity_name_camel(),
            entity_name_capital: self.entity_name_capital(),
            behavior_name: self.behavior_name(),
            behavior_name_camel: self.behavior_name_camel(),
            behavior_name_capital: self.behavior_name_capital(),
            generate_element_behavior: self.generate_element_behavior,
            version: &self.version,
            view_engine: self.view_engine,
            base_path: &self.base_path,
            path_to_entity: &self.path_to_entity,
            path_to_bower: PATH_TO_BOWER,
            path_to_elements: self.path_to_elements(),
            path_to_scripts: self.path_to_scripts(),
            add_to_elements: self.add_to_elements(),
            skip_install: self.skip_install,
        }
    }
}

impl Serialize for ResolvedConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.snapshot().serialize(serializer)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<'a> {
    entity_name: &'a str,
    entity_type: EntityType,
    entity_name_camel: &'a str,
    entity_name_capital: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    behavior_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    behavior_name_camel: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    behavior_name_capital: Option<&'a str>,
    generate_element_behavior: bool,
    version: &'a str,
    view_engine: ViewEngine,
    base_path: &'a Path,
    path_to_entity: &'a Path,
    path_to_bower: &'static str,
    path_to_elements: &'a Path,
    path_to_scripts: &'a Path,
    add_to_elements: bool,
    skip_install: bool,
}
