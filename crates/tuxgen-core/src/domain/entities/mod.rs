pub mod answers;
pub mod plan;
pub mod render_context;
pub mod resolved_config;

pub use answers::RawAnswers;
pub use plan::{MaterializationPlan, PlannedFile, TemplateId};
pub use render_context::RenderContext;
pub use resolved_config::ResolvedConfig;
