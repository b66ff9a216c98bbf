//! Jinja-style template rendering over a file-system search path.
//!
//! This layer is unaware of OpenAPI semantics; it loads templates from the
//! directories of the files it is given and substitutes the variables it is
//! handed, nothing more.

use std::fs;
use std::path::{Path, PathBuf};

use minijinja::{Environment, ErrorKind, UndefinedBehavior};
use serde::Serialize;

use crate::error::{Error, Result};

/// Render a template file with the given variables.
///
/// The fragment search path is the primary template's directory followed by the
/// child template's directory (if any). `include`/`import` names resolve against
/// those directories in order and a name collision resolves to the first match.
/// Block trimming is enabled so lines produced purely by `{% %}` control markers
/// are stripped and rendered YAML stays well-formed.
///
/// # Errors
///
/// Returns [`Error::TemplateNotFound`] if either input path does not exist or a
/// referenced fragment cannot be resolved, [`Error::TemplateSyntax`] for
/// malformed control syntax and [`Error::UndefinedVariable`] if the template
/// references a variable absent from `variables`.
pub fn render_template<S: Serialize>(
    template_path: &Path,
    child_template_path: Option<&Path>,
    variables: S,
) -> Result<String> {
    if !template_path.is_file() {
        return Err(Error::TemplateNotFound(template_path.display().to_string()));
    }
    if let Some(child) = child_template_path {
        if !child.is_file() {
            return Err(Error::TemplateNotFound(child.display().to_string()));
        }
    }

    let mut search_paths = vec![parent_dir(template_path)];
    if let Some(child) = child_template_path {
        search_paths.push(parent_dir(child));
    }

    let name = template_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::TemplateNotFound(template_path.display().to_string()))?
        .to_string();

    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_loader(search_path_loader(search_paths));

    let template = env.get_template(&name)?;
    Ok(template.render(variables)?)
}

/// Directory containing `path`, falling back to `.` for bare file names.
fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Loader resolving template names against the search directories in order.
fn search_path_loader(
    search_paths: Vec<PathBuf>,
) -> impl Fn(&str) -> std::result::Result<Option<String>, minijinja::Error> + Send + Sync + 'static
{
    move |name| {
        for dir in &search_paths {
            let candidate = dir.join(name);
            if candidate.is_file() {
                return fs::read_to_string(&candidate).map(Some).map_err(|err| {
                    minijinja::Error::new(
                        ErrorKind::InvalidOperation,
                        format!("failed to read template {}: {err}", candidate.display()),
                    )
                });
            }
        }
        Ok(None)
    }
}
