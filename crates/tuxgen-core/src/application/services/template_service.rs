//! Template Service - template listing.
//!
//! Separated from `Materializer` for single responsibility.

use crate::{
    application::ports::{LoadedTemplate, TemplateStore},
    domain::{FileRole, TemplateId},
    error::TuxResult,
};

/// Information about a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInfo {
    pub id: String,
    pub file_name: String,
    /// `built-in` or the file the template was read from.
    pub origin: String,
    /// Suffix of the generated file this template produces.
    pub produces: &'static str,
}

impl TemplateInfo {
    fn from_loaded(template: &LoadedTemplate) -> Self {
        let produces = match template.id {
            TemplateId::View(_) => FileRole::View.suffix(),
            TemplateId::Style(_) => FileRole::Style.suffix(),
        };
        Self {
            id: template.id.to_string(),
            file_name: template.id.file_name(),
            origin: template.origin.to_string(),
            produces,
        }
    }
}

/// Service for template queries.
pub struct TemplateService {
    store: Box<dyn TemplateStore>,
}

impl TemplateService {
    /// Create a new template service.
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// Get a template by identifier.
    pub fn get(&self, id: TemplateId) -> TuxResult<LoadedTemplate> {
        self.store.get(id)
    }

    /// Where templates are looked up.
    pub fn location(&self) -> String {
        self.store.location()
    }

    /// All known templates, in identifier order.
    ///
    /// Fails on the first template the store cannot provide.
    pub fn list(&self) -> TuxResult<Vec<TemplateInfo>> {
        TemplateId::ALL
            .into_iter()
            .map(|id| self.store.get(id).map(|t| TemplateInfo::from_loaded(&t)))
            .collect()
    }
}
