//! Templates read from a user directory.
//!
//! Layout is flat: one `<id>.html` per template identifier.
//!
//! ```text
//! my-templates/
//! ├── element.html
//! ├── element-style.html
//! ├── behavior.html
//! └── behavior-style.html
//! ```

use std::{io, path::PathBuf};

use tracing::debug;
use tuxgen_core::{
    application::{
        ApplicationError,
        ports::{LoadedTemplate, TemplateOrigin, TemplateStore},
    },
    domain::TemplateId,
    error::TuxResult,
};

/// Store reading `<id>.html` files from one directory on every lookup.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path a template would be read from.
    pub fn path_for(&self, id: TemplateId) -> PathBuf {
        self.root.join(id.file_name())
    }
}

impl TemplateStore for DirectoryStore {
    fn get(&self, id: TemplateId) -> TuxResult<LoadedTemplate> {
        let path = self.path_for(id);
        debug!(template = %id, path = %path.display(), "Reading template");

        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(LoadedTemplate {
                id,
                origin: TemplateOrigin::File(path),
                content,
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(ApplicationError::TemplateNotFound {
                    id: id.to_string(),
                    location: self.location(),
                }
                .into())
            }
            Err(e) => Err(ApplicationError::FilesystemError {
                path,
                reason: format!("Failed to read template: {}", e),
            }
            .into()),
        }
    }

    fn location(&self) -> String {
        self.root.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tuxgen_core::{domain::EntityType, error::TuxError};

    #[test]
    fn reads_template_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("element.html"), "<?= entityName ?>").unwrap();

        let template = DirectoryStore::new(dir.path())
            .get(TemplateId::View(EntityType::Element))
            .unwrap();

        assert_eq!(template.content, "<?= entityName ?>");
        assert_eq!(
            template.origin,
            TemplateOrigin::File(dir.path().join("element.html"))
        );
    }

    #[test]
    fn missing_file_is_template_not_found() {
        let dir = TempDir::new().unwrap();
        let err = DirectoryStore::new(dir.path())
            .get(TemplateId::Style(EntityType::Behavior))
            .unwrap_err();

        match err {
            TuxError::Application(ApplicationError::TemplateNotFound { id, .. }) => {
                assert_eq!(id, "behavior-style");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
