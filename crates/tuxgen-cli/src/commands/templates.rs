//! Implementation of the `tuxgen templates` command.

use std::path::PathBuf;

use serde_json::json;
use tracing::instrument;

use tuxgen_adapters::{BuiltinStore, LayeredStore};
use tuxgen_core::{
    application::{TemplateService, TemplateStore},
    domain::TemplateId,
};

use crate::{
    cli::TemplatesArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Template store for a run: the user directory over the built-ins, or the
/// built-ins alone.
pub fn template_store(dir: Option<PathBuf>) -> Box<dyn TemplateStore> {
    match dir {
        Some(dir) => Box::new(LayeredStore::over_builtin(dir)),
        None => Box::new(BuiltinStore::new()),
    }
}

/// `--templates` wins over the configured directory.
pub fn template_dir(flag: Option<PathBuf>, config: &AppConfig) -> CliResult<Option<PathBuf>> {
    if flag.is_some() {
        return Ok(flag);
    }
    let cwd = std::env::current_dir().with_cli_context(|| "Failed to read current directory")?;
    Ok(config.template_dir(&cwd))
}

#[instrument(skip_all)]
pub fn execute(args: TemplatesArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let dir = template_dir(args.templates, &config)?;
    let service = TemplateService::new(template_store(dir));

    if let Some(raw) = args.show {
        let id: TemplateId = raw.parse().map_err(|e| CliError::InvalidInput {
            message: format!("unknown template '{raw}'"),
            source: Some(Box::new(e)),
        })?;
        let template = service.get(id)?;

        if output.is_json() {
            output.json(&json!({
                "id": template.id.to_string(),
                "origin": template.origin.to_string(),
                "content": template.content,
            }))?;
        } else {
            // raw text, even in quiet mode
            print!("{}", template.content);
        }
        return Ok(());
    }

    let templates = service.list()?;

    if output.is_json() {
        let items: Vec<_> = templates
            .iter()
            .map(|t| {
                json!({
                    "id": t.id,
                    "file": t.file_name,
                    "origin": t.origin,
                    "produces": t.produces,
                })
            })
            .collect();
        output.json(&items)?;
        return Ok(());
    }

    output.header("Available Templates:")?;
    output.print(&format!("  Looking in {}", service.location()))?;
    output.print("")?;
    for t in &templates {
        output.print(&format!(
            "  {:<16} *{:<16} {}",
            t.id, t.produces, t.origin
        ))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_store_without_directory() {
        assert_eq!(template_store(None).location(), "built-in templates");
    }

    #[test]
    fn directory_is_layered_over_builtin() {
        let store = template_store(Some(PathBuf::from("/tpl")));
        assert_eq!(store.location(), "/tpl, then built-in templates");
    }

    #[test]
    fn flag_wins_over_config() {
        let mut config = AppConfig::default();
        config.templates.local_path = Some(PathBuf::from("from-config"));

        let dir = template_dir(Some(PathBuf::from("from-flag")), &config).unwrap();
        assert_eq!(dir, Some(PathBuf::from("from-flag")));
    }

    #[test]
    fn missing_directory_falls_back_to_builtin_templates() {
        let service = TemplateService::new(template_store(Some(PathBuf::from(
            "/definitely/not/a/template/dir",
        ))));
        let templates = service.list().unwrap();
        assert_eq!(templates.len(), 4);
        assert!(templates.iter().all(|t| t.origin == "built-in"));
    }
}
