//! Render-from-string and render-from-file entry points.

use std::path::{Path, PathBuf};

use minijinja::{Environment, ErrorKind};
use serde::Serialize;

use crate::error::TemplateError;

/// Name reported in errors for templates rendered from a string.
pub const STRING_TEMPLATE_NAME: &str = "<string>";

// Built-in templates baked into the binary, used when `template_dir()` is not
// on disk (installed or relocated binaries).
const EMBEDDED_TEMPLATES: &[(&str, &str)] =
    &[("flo.yaml.j2", include_str!("../templates/flo.yaml.j2"))];

/// Directory holding flo's built-in templates, shipped next to this crate.
///
/// Files here take precedence; names missing from it fall back to the copies
/// embedded at compile time.
pub fn template_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/templates"))
}

fn embedded_template(name: &str) -> Option<&'static str> {
    EMBEDDED_TEMPLATES
        .iter()
        .find(|(embedded, _)| *embedded == name)
        .map(|(_, source)| *source)
}

/// Compile `source` in a fresh environment and render it with `ctx`.
///
/// Undefined variables render as empty. A parse failure comes back as
/// [`TemplateError::Syntax`] carrying the engine's message and line.
pub fn render_from_string<S: Serialize>(source: &str, ctx: S) -> Result<String, TemplateError> {
    let mut env = Environment::new();
    env.add_template(STRING_TEMPLATE_NAME, source)
        .map_err(|e| translate(e, STRING_TEMPLATE_NAME, None))?;
    let template = env
        .get_template(STRING_TEMPLATE_NAME)
        .map_err(|e| translate(e, STRING_TEMPLATE_NAME, None))?;
    template
        .render(ctx)
        .map_err(|e| translate(e, STRING_TEMPLATE_NAME, None))
}

/// Render the built-in template `name` (relative to [`template_dir`], then
/// the embedded copies).
pub fn render_from_file<S: Serialize>(name: &str, ctx: S) -> Result<String, TemplateError> {
    render_builtin(&template_dir(), name, ctx)
}

/// Render template `name` loaded from `dir`, in a fresh environment whose
/// loader is rooted at `dir`. Includes and extends resolve against the same
/// directory.
pub fn render_from_dir<S: Serialize>(
    dir: &Path,
    name: &str,
    ctx: S,
) -> Result<String, TemplateError> {
    render_with_loader(dir, name, ctx, minijinja::path_loader(dir))
}

fn render_builtin<S: Serialize>(dir: &Path, name: &str, ctx: S) -> Result<String, TemplateError> {
    let from_disk = minijinja::path_loader(dir);
    render_with_loader(dir, name, ctx, move |name: &str| match from_disk(name)? {
        Some(source) => Ok(Some(source)),
        None => Ok(embedded_template(name).map(str::to_string)),
    })
}

fn render_with_loader<S, F>(
    dir: &Path,
    name: &str,
    ctx: S,
    loader: F,
) -> Result<String, TemplateError>
where
    S: Serialize,
    F: Fn(&str) -> Result<Option<String>, minijinja::Error> + Send + Sync + 'static,
{
    let name = normalize_template_name(name);
    tracing::debug!(template = %name, dir = %dir.display(), "loading template");

    let mut env = Environment::new();
    env.set_loader(loader);
    let template = env
        .get_template(&name)
        .map_err(|e| translate(e, &name, Some(dir)))?;
    template.render(ctx).map_err(|e| translate(e, &name, Some(dir)))
}

fn normalize_template_name(name: &str) -> String {
    name.replace('\\', "/")
}

/// Map an engine error onto [`TemplateError`], preferring the template name
/// the engine reports (it differs from `name` for included templates).
fn translate(err: minijinja::Error, name: &str, dir: Option<&Path>) -> TemplateError {
    let name = err.name().unwrap_or(name).to_string();
    match (err.kind(), dir) {
        (ErrorKind::SyntaxError, _) => {
            let line = err.line();
            let detail = err
                .detail()
                .map(str::to_string)
                .unwrap_or_else(|| err.kind().to_string());
            TemplateError::Syntax {
                name,
                line,
                detail,
                source: err,
            }
        }
        (ErrorKind::TemplateNotFound, Some(dir)) => TemplateError::NotFound {
            name,
            dir: dir.to_path_buf(),
            source: err,
        },
        _ => TemplateError::Render { name, source: err },
    }
}
