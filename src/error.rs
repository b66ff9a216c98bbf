//! Error types for the apibase toolkit.

use thiserror::Error;

use crate::validator::ValidationIssue;

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by template rendering and specification validation.
///
/// Every failure is a hard stop propagated to the immediate caller; nothing in
/// this crate retries or suppresses an error.
#[derive(Error, Debug)]
pub enum Error {
    /// A template file or an included fragment could not be located.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// The template contains malformed control syntax.
    #[error("template syntax error: {0}")]
    TemplateSyntax(#[source] minijinja::Error),

    /// The template referenced a variable that was not provided.
    #[error("undefined template variable: {0}")]
    UndefinedVariable(#[source] minijinja::Error),

    /// Any other failure reported by the template engine.
    #[error("template rendering failed: {0}")]
    Render(#[source] minijinja::Error),

    /// The usage mode is not a member of the closed enumeration.
    #[error("invalid usage mode `{0}`, expected one of: cloud_endpoints, backend, openapi_generator")]
    InvalidUsageMode(String),

    /// The rendered document does not conform to the OpenAPI v2 schema.
    #[error("OpenAPI document failed schema validation with {} issue(s)", .0.len())]
    SchemaValidation(Vec<ValidationIssue>),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<minijinja::Error> for Error {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;
        match err.kind() {
            ErrorKind::TemplateNotFound => Error::TemplateNotFound(err.to_string()),
            ErrorKind::SyntaxError => Error::TemplateSyntax(err),
            ErrorKind::UndefinedError => Error::UndefinedVariable(err),
            _ => Error::Render(err),
        }
    }
}
