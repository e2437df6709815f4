//! Templates compiled into the binary.

use tuxgen_core::{
    application::ports::{LoadedTemplate, TemplateOrigin, TemplateStore},
    domain::{EntityType, TemplateId},
    error::TuxResult,
};

const ELEMENT: &str = include_str!("../../templates/element.html");
const ELEMENT_STYLE: &str = include_str!("../../templates/element-style.html");
const BEHAVIOR: &str = include_str!("../../templates/behavior.html");
const BEHAVIOR_STYLE: &str = include_str!("../../templates/behavior-style.html");

/// Store serving the embedded templates. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinStore;

impl BuiltinStore {
    pub fn new() -> Self {
        Self
    }

    /// Raw text of an embedded template.
    pub fn content(id: TemplateId) -> &'static str {
        match id {
            TemplateId::View(EntityType::Element) => ELEMENT,
            TemplateId::Style(EntityType::Element) => ELEMENT_STYLE,
            TemplateId::View(EntityType::Behavior) => BEHAVIOR,
            TemplateId::Style(EntityType::Behavior) => BEHAVIOR_STYLE,
        }
    }
}

impl TemplateStore for BuiltinStore {
    fn get(&self, id: TemplateId) -> TuxResult<LoadedTemplate> {
        Ok(LoadedTemplate {
            id,
            origin: TemplateOrigin::Builtin,
            content: Self::content(id).to_string(),
        })
    }

    fn location(&self) -> String {
        "built-in templates".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_is_embedded() {
        let store = BuiltinStore::new();
        for id in TemplateId::ALL {
            let template = store.get(id).unwrap();
            assert_eq!(template.origin, TemplateOrigin::Builtin);
            assert!(template.content.contains("<?"), "{id} has no placeholders");
        }
    }

    #[test]
    fn behavior_template_uses_behavior_names() {
        assert!(BuiltinStore::content(TemplateId::behavior()).contains("behaviorNameCapital"));
    }
}
