//! Tag substitution with a configurable delimiter.
//!
//! With the default delimiter `?`:
//!
//! | Tag               | Output                              |
//! |-------------------|-------------------------------------|
//! | `<?= name ?>`     | value of `name`, HTML-escaped       |
//! | `<?- name ?>`     | value of `name`, unescaped          |
//! | `<??`             | a literal `<?`                      |
//!
//! There is no scripting: any other tag is an error, as is a variable the
//! context does not define.

use thiserror::Error;
use tracing::instrument;
use tuxgen_core::{
    application::{
        ApplicationError,
        ports::{LoadedTemplate, TemplateRenderer},
    },
    domain::RenderContext,
    error::TuxResult,
};

/// Delimiter the generator's templates are written with.
pub const DEFAULT_DELIMITER: char = '?';

#[derive(Debug, Error, PartialEq, Eq)]
enum TagError {
    #[error("unterminated tag opened on line {line}")]
    Unterminated { line: usize },

    #[error("unknown variable '{name}' on line {line}")]
    UnknownVariable { name: String, line: usize },

    #[error("unsupported tag on line {line}; expected '=' or '-' after the opening delimiter")]
    Unsupported { line: usize },
}

/// Renders `<?= ... ?>` / `<?- ... ?>` tags.
#[derive(Debug, Clone)]
pub struct DelimiterRenderer {
    open: String,
    close: String,
}

impl DelimiterRenderer {
    /// Renderer using [`DEFAULT_DELIMITER`].
    pub fn new() -> Self {
        Self::with_delimiter(DEFAULT_DELIMITER)
    }

    pub fn with_delimiter(delimiter: char) -> Self {
        Self {
            open: format!("<{delimiter}"),
            close: format!("{delimiter}>"),
        }
    }

    /// Render raw text against a context.
    fn render_str(&self, source: &str, context: &RenderContext) -> Result<String, TagError> {
        let mut out = String::with_capacity(source.len());
        let mut rest = source;
        // byte offset of `rest` within `source`, for line numbers
        let mut offset = 0;

        while let Some(start) = rest.find(&self.open) {
            out.push_str(&rest[..start]);
            let line = line_of(source, offset + start);
            let after_open = &rest[start + self.open.len()..];

            let escape = match after_open.chars().next() {
                Some('=') => true,
                Some('-') => false,
                // `<??` is a literal opening delimiter
                Some(c) if self.open.ends_with(c) => {
                    out.push_str(&self.open);
                    let consumed = start + self.open.len() + c.len_utf8();
                    offset += consumed;
                    rest = &rest[consumed..];
                    continue;
                }
                _ => return Err(TagError::Unsupported { line }),
            };

            let body = &after_open[1..];
            let end = body
                .find(&self.close)
                .ok_or(TagError::Unterminated { line })?;

            let name = body[..end].trim();
            let value = context
                .get(name)
                .ok_or_else(|| TagError::UnknownVariable {
                    name: name.to_string(),
                    line,
                })?;

            if escape {
                push_escaped(&mut out, value);
            } else {
                out.push_str(value);
            }

            let consumed = start + self.open.len() + 1 + end + self.close.len();
            offset += consumed;
            rest = &rest[consumed..];
        }

        out.push_str(rest);
        Ok(out)
    }
}

impl Default for DelimiterRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for DelimiterRenderer {
    #[instrument(skip_all, fields(template = %template.id))]
    fn render(&self, template: &LoadedTemplate, context: &RenderContext) -> TuxResult<String> {
        self.render_str(&template.content, context).map_err(|e| {
            ApplicationError::RenderingFailed {
                template: format!("{} ({})", template.id, template.origin),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

fn line_of(source: &str, byte_offset: usize) -> usize {
    source[..byte_offset].matches('\n').count() + 1
}

fn push_escaped(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
}
