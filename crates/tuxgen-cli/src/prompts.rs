//! Answer collection for `tuxgen new`.
//!
//! Questions are asked in a fixed order. A question answered by a flag is
//! skipped, and two are conditional: the behavior question is only asked for
//! elements, the registry question only when `elements/elements.html`
//! exists. The view engine question is skipped when the host manifest
//! records an engine, since that engine wins anyway.

use std::path::PathBuf;

use tuxgen_core::domain::{EntityType, RawAnswers, ViewEngine};

use crate::{cli::NewArgs, config::Defaults, error::CliResult};

/// Facts about the host project the questions depend on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostFacts {
    pub probed_base_path: PathBuf,
    pub registry_present: bool,
    pub manifest_engine: Option<ViewEngine>,
}

/// Something that can ask the user a question.
pub trait Asker {
    fn text(&self, prompt: &str, default: &str) -> CliResult<String>;

    /// Index of the chosen item.
    fn choose(&self, prompt: &str, items: &[&str], default: usize) -> CliResult<usize>;

    fn confirm(&self, prompt: &str, default: bool) -> CliResult<bool>;
}

/// Answers from flags and config defaults only; nothing is asked.
pub fn from_flags(args: &NewArgs, defaults: &Defaults, facts: &HostFacts) -> RawAnswers {
    let entity_type = args
        .entity_type
        .map(EntityType::from)
        .unwrap_or(defaults.entity_type);

    RawAnswers {
        entity_name: args
            .entity_name
            .clone()
            .unwrap_or_else(|| defaults.entity_name.clone()),
        entity_type,
        generate_element_behavior: !entity_type.is_behavior()
            && !args.no_behavior
            && defaults.generate_behavior,
        version: args
            .version_tag
            .clone()
            .unwrap_or_else(|| defaults.version.clone()),
        add_to_elements: facts.registry_present && args.add_to_elements,
        view_engine: args
            .view_engine
            .map(ViewEngine::from)
            .unwrap_or(defaults.view_engine),
        base_path: args
            .base_path
            .clone()
            .unwrap_or_else(|| facts.probed_base_path.clone()),
        skip_install: !args.install && defaults.skip_install,
    }
}

/// Ask every question no flag answered.
pub fn ask(
    args: &NewArgs,
    defaults: &Defaults,
    facts: &HostFacts,
    asker: &dyn Asker,
) -> CliResult<RawAnswers> {
    let entity_name = match &args.entity_name {
        Some(name) => name.clone(),
        None => asker.text("Please enter the name of your entity", &defaults.entity_name)?,
    };

    let entity_type = match args.entity_type {
        Some(arg) => arg.into(),
        None => {
            let items: Vec<&str> = EntityType::ALL.iter().map(|t| t.as_str()).collect();
            let default = index_of(&EntityType::ALL, defaults.entity_type);
            EntityType::ALL[asker.choose(
                "Please select the type of entity you're generating",
                &items,
                default,
            )?]
        }
    };

    let generate_element_behavior = match entity_type {
        EntityType::Behavior => false,
        EntityType::Element if args.no_behavior => false,
        EntityType::Element => asker.confirm(
            "Would you like me to generate a corresponding behavior for this element (recommended)?",
            defaults.generate_behavior,
        )?,
    };

    let version = match &args.version_tag {
        Some(version) => version.clone(),
        None => asker.text("Give your element a version number", &defaults.version)?,
    };

    let add_to_elements = if !facts.registry_present {
        false
    } else if args.add_to_elements {
        true
    } else {
        asker.confirm(
            &format!(
                "I can automatically add {entity_name} into elements/elements.html, would you like me to do that?"
            ),
            false,
        )?
    };

    let view_engine = match (args.view_engine, facts.manifest_engine) {
        (Some(arg), _) => arg.into(),
        (None, Some(_)) => defaults.view_engine,
        (None, None) => {
            let items: Vec<&str> = ViewEngine::ALL.iter().map(|e| e.as_str()).collect();
            let default = index_of(&ViewEngine::ALL, defaults.view_engine);
            ViewEngine::ALL[asker.choose(
                "Which templating (view) engine do you want to use?",
                &items,
                default,
            )?]
        }
    };

    let base_path = match &args.base_path {
        Some(path) => path.clone(),
        None => PathBuf::from(asker.text(
            "Please give me a base-path where you want the module to be generated",
            &facts.probed_base_path.display().to_string(),
        )?),
    };

    let skip_install = if args.install {
        false
    } else {
        asker.confirm(
            "Would you like me to skip running npm install & bower install?",
            defaults.skip_install,
        )?
    };

    Ok(RawAnswers {
        entity_name,
        entity_type,
        generate_element_behavior,
        version,
        add_to_elements,
        view_engine,
        base_path,
        skip_install,
    })
}

fn index_of<T: PartialEq>(all: &[T], value: T) -> usize {
    all.iter().position(|v| *v == value).unwrap_or(0)
}

/// Terminal prompts via `dialoguer`.
#[cfg(feature = "interactive")]
pub struct TerminalAsker {
    theme: dialoguer::theme::ColorfulTheme,
}

#[cfg(feature = "interactive")]
impl TerminalAsker {
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

#[cfg(feature = "interactive")]
impl Asker for TerminalAsker {
    fn text(&self, prompt: &str, default: &str) -> CliResult<String> {
        Ok(dialoguer::Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()?)
    }

    fn choose(&self, prompt: &str, items: &[&str], default: usize) -> CliResult<usize> {
        Ok(dialoguer::Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()?)
    }

    fn confirm(&self, prompt: &str, default: bool) -> CliResult<bool> {
        Ok(dialoguer::Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }
}
