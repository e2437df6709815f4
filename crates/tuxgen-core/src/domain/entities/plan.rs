//! Which files get written, and from which template.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::{
    entities::resolved_config::ResolvedConfig, error::DomainError, paths::with_suffix,
    value_objects::EntityType,
};

/// Identifier of one of the named templates.
///
/// Names follow the entity type: `element`, `element-style`, `behavior`,
/// `behavior-style`. The behavior file of an element is rendered from the
/// same `behavior` template a behavior entity uses for its view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    View(EntityType),
    Style(EntityType),
}

impl TemplateId {
    pub const ALL: [TemplateId; 4] = [
        Self::View(EntityType::Element),
        Self::Style(EntityType::Element),
        Self::View(EntityType::Behavior),
        Self::Style(EntityType::Behavior),
    ];

    /// Template for an element's companion behavior file.
    pub const fn behavior() -> Self {
        Self::View(EntityType::Behavior)
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::View(EntityType::Element) => "element",
            Self::Style(EntityType::Element) => "element-style",
            Self::View(EntityType::Behavior) => "behavior",
            Self::Style(EntityType::Behavior) => "behavior-style",
        }
    }

    /// File name of the template inside a template directory.
    pub fn file_name(&self) -> String {
        format!("{}.html", self.name())
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TemplateId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| DomainError::UnknownTemplate(s.to_string()))
    }
}

/// Role of a generated file within the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileRole {
    View,
    Style,
    Behavior,
}

impl FileRole {
    /// Suffix appended to the entity stem.
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::View => ".html",
            Self::Style => "-style.html",
            Self::Behavior => "-behavior.html",
        }
    }
}

/// One file the materializer will render and write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub role: FileRole,
    pub template: TemplateId,
    /// Destination, relative to the invocation root.
    pub destination: PathBuf,
}

/// Ordered list of files for one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializationPlan {
    files: Vec<PlannedFile>,
}

impl MaterializationPlan {
    /// Decide which files to emit for a resolved configuration.
    ///
    /// View and style are always written. The behavior file is written iff
    /// `generate_element_behavior` is set, regardless of the entity type:
    /// a behavior entity never has the flag, so it gets two files.
    pub fn for_config(config: &ResolvedConfig) -> Self {
        let entity_type = config.entity_type();
        let stem = config.path_to_entity();

        let mut files = vec![
            PlannedFile {
                role: FileRole::View,
                template: TemplateId::View(entity_type),
                destination: with_suffix(stem, FileRole::View.suffix()),
            },
            PlannedFile {
                role: FileRole::Style,
                template: TemplateId::Style(entity_type),
                destination: with_suffix(stem, FileRole::Style.suffix()),
            },
        ];

        if config.generate_element_behavior() {
            files.push(PlannedFile {
                role: FileRole::Behavior,
                template: TemplateId::behavior(),
                destination: with_suffix(stem, FileRole::Behavior.suffix()),
            });
        }

        Self { files }
    }

    pub fn files(&self) -> &[PlannedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl IntoIterator for MaterializationPlan {
    type Item = PlannedFile;
    type IntoIter = std::vec::IntoIter<PlannedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}
