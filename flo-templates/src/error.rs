//! Error types for flo-templates.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from rendering a template.
///
/// The engine's error stays reachable through `source()` but never appears
/// in the variant shapes.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The template failed to parse.
    #[error("syntax error in template `{name}`{}: {detail}", at_line(.line))]
    Syntax {
        name: String,
        line: Option<usize>,
        detail: String,
        #[source]
        source: minijinja::Error,
    },

    /// No template with this name under the template directory.
    #[error("template `{name}` not found in {dir}")]
    NotFound {
        name: String,
        dir: PathBuf,
        #[source]
        source: minijinja::Error,
    },

    /// The template parsed but failed while rendering.
    #[error("failed to render template `{name}`: {source}")]
    Render {
        name: String,
        #[source]
        source: minijinja::Error,
    },
}

impl TemplateError {
    /// Name of the template the error came from.
    pub fn template_name(&self) -> &str {
        match self {
            TemplateError::Syntax { name, .. }
            | TemplateError::NotFound { name, .. }
            | TemplateError::Render { name, .. } => name,
        }
    }
}

fn at_line(line: &Option<usize>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}
