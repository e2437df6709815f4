//! Materializer - renders the planned files and writes them.
//!
//! Workflow per file, in plan order:
//! 1. Load the template from the store
//! 2. Render it with the full resolved configuration as context
//! 3. Create the parent directory and write the file
//!
//! There is no rollback: when a later file fails, the files already written
//! stay on disk. Existing files are overwritten.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, TemplateRenderer, TemplateStore},
    domain::{MaterializationPlan, PlannedFile, RenderContext, ResolvedConfig},
    error::{Context, TuxResult},
};

/// Outcome of a successful materialization.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MaterializationReport {
    /// Absolute destinations, in write order.
    pub written: Vec<PathBuf>,
}

impl MaterializationReport {
    pub fn len(&self) -> usize {
        self.written.len()
    }

    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
    }
}

/// Writes an entity's files into the host project.
pub struct Materializer {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl Materializer {
    /// Create a materializer with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use tuxgen_core::application::{Materializer, ports::*};
    ///
    /// let materializer = Materializer::new(
    ///     store,      // impl TemplateStore
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
        }
    }

    /// Files that [`Self::materialize`] would write, without writing them.
    pub fn plan(&self, config: &ResolvedConfig) -> MaterializationPlan {
        MaterializationPlan::for_config(config)
    }

    /// Render and write every planned file under `root`.
    #[instrument(
        skip_all,
        fields(
            entity = %config.entity_name(),
            entity_type = %config.entity_type(),
            root = %root.display()
        )
    )]
    pub fn materialize(
        &self,
        config: &ResolvedConfig,
        root: &Path,
    ) -> TuxResult<MaterializationReport> {
        let plan = self.plan(config);
        info!(files = plan.len(), "Materializing {}", config.entity_name());

        let context =
            RenderContext::for_config(config).context("Building render context from configuration")?;
        debug!(variables = context.len(), "Render context ready");

        let mut report = MaterializationReport::default();
        for file in plan {
            let destination = self.write_one(&file, &context, root)?;
            report.written.push(destination);
        }

        info!(written = report.len(), "Materialization completed");
        Ok(report)
    }

    fn write_one(
        &self,
        file: &PlannedFile,
        context: &RenderContext,
        root: &Path,
    ) -> TuxResult<PathBuf> {
        let template = self.store.get(file.template)?;
        let rendered = self.renderer.render(&template, context)?;

        let destination = root.join(&file.destination);
        if let Some(parent) = destination.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&destination, &rendered)?;

        debug!(
            template = %file.template,
            origin = %template.origin,
            path = %destination.display(),
            "Wrote file"
        );
        Ok(destination)
    }
}
