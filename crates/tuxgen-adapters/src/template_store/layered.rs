//! Stores stacked on top of each other.

use std::path::PathBuf;

use tracing::trace;
use tuxgen_core::{
    application::{
        ApplicationError,
        ports::{LoadedTemplate, TemplateStore},
    },
    domain::TemplateId,
    error::{TuxError, TuxResult},
};

use super::{BuiltinStore, DirectoryStore};

/// Tries each layer in order; the first layer that has the template wins.
///
/// Only `TemplateNotFound` falls through to the next layer. Any other error
/// (an unreadable file, say) is returned as is.
pub struct LayeredStore {
    layers: Vec<Box<dyn TemplateStore>>,
}

impl LayeredStore {
    pub fn new(layers: Vec<Box<dyn TemplateStore>>) -> Self {
        Self { layers }
    }

    /// A user directory with the built-in templates as fallback.
    pub fn over_builtin(dir: impl Into<PathBuf>) -> Self {
        Self::new(vec![
            Box::new(DirectoryStore::new(dir)),
            Box::new(BuiltinStore::new()),
        ])
    }
}

impl TemplateStore for LayeredStore {
    fn get(&self, id: TemplateId) -> TuxResult<LoadedTemplate> {
        for layer in &self.layers {
            match layer.get(id) {
                Err(TuxError::Application(ApplicationError::TemplateNotFound { .. })) => {
                    trace!(template = %id, layer = %layer.location(), "Not in layer");
                }
                other => return other,
            }
        }

        Err(ApplicationError::TemplateNotFound {
            id: id.to_string(),
            location: self.location(),
        }
        .into())
    }

    fn location(&self) -> String {
        self.layers
            .iter()
            .map(|l| l.location())
            .collect::<Vec<_>>()
            .join(", then ")
    }
}
