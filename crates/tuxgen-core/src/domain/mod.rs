//! Core domain layer for tuxgen.
//!
//! Pure logic only: name derivation, lexical path resolution, the resolved
//! configuration and the materialization plan. Filesystem access, template
//! loading and rendering live behind the ports in `crate::application`.
//!
//! - **No I/O**: probing and manifest reads happen in application services
//! - **Immutable entities**: `ResolvedConfig` has no setters
//! - **Total functions**: deriving names or paths never fails

pub mod entities;
pub mod error;
pub mod naming;
pub mod paths;
pub mod value_objects;

pub use entities::{
    answers::{DEFAULT_ENTITY_NAME, DEFAULT_VERSION, RawAnswers},
    plan::{FileRole, MaterializationPlan, PlannedFile, TemplateId},
    render_context::RenderContext,
    resolved_config::{BehaviorNames, ResolvedConfig},
};

pub use error::{DomainError, ErrorCategory};

pub use naming::{NameForms, camel_case, capitalize, derive_behavior_name};

pub use value_objects::{EntityType, ViewEngine};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn entity_type_parses_correctly() {
        assert_eq!(EntityType::from_str("element").unwrap(), EntityType::Element);
        assert_eq!(EntityType::from_str("Behavior").unwrap(), EntityType::Behavior);
        assert_eq!(EntityType::from_str("behaviour").unwrap(), EntityType::Behavior);
        assert!(matches!(
            EntityType::from_str("widget"),
            Err(DomainError::UnknownEntityType(_))
        ));
    }

    #[test]
    fn view_engine_parses_correctly() {
        assert_eq!(ViewEngine::from_str("HTML").unwrap(), ViewEngine::Html);
        assert_eq!(ViewEngine::from_str(" ejs ").unwrap(), ViewEngine::Ejs);
        assert_eq!(ViewEngine::from_str("pug").unwrap(), ViewEngine::Jade);
        assert!(ViewEngine::from_str("handlebars").is_err());
    }

    #[test]
    fn defaults_match_first_run_answers() {
        assert_eq!(EntityType::default(), EntityType::Element);
        assert_eq!(ViewEngine::default(), ViewEngine::Ejs);
    }

    #[test]
    fn display_matches_as_str() {
        for t in EntityType::ALL {
            assert_eq!(t.to_string(), t.as_str());
        }
        for e in ViewEngine::ALL {
            assert_eq!(e.to_string(), e.as_str());
        }
    }

    #[test]
    fn domain_errors_carry_suggestions() {
        let err = DomainError::UnknownViewEngine("hbs".into());
        assert!(err.suggestions().iter().any(|s| s.contains("ejs")));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
