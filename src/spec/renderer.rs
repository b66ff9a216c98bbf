use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use serde_yaml::Mapping;
use tracing::debug;

use crate::error::Result;
use crate::spec::UsageMode;
use crate::template::render_template;
use crate::validator;

/// Name of the shared blocks template shipped under `fixtures/`.
const BLOCKS_TEMPLATE: &str = "openapi_blocks.yaml.j2";

/// Absolute path to the shared blocks template shipped with the crate.
///
/// The blocks file supplies the reusable fragments the OpenAPI templates
/// `import`; resolving it from the crate manifest directory keeps rendering
/// independent of the current working directory.
pub fn blocks_template_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(BLOCKS_TEMPLATE)
}

/// Renders the OpenAPI 2.0 template for a single usage mode.
///
/// A renderer is constructed once and is stateless afterwards: every call is a
/// pure function of the template file contents and the mode, so instances are
/// safe to reuse and to share across threads.
#[derive(Debug, Clone)]
pub struct SpecRenderer {
    template_path: PathBuf,
    mode: UsageMode,
}

impl SpecRenderer {
    pub fn new(template_path: impl Into<PathBuf>, mode: UsageMode) -> Self {
        SpecRenderer {
            template_path: template_path.into(),
            mode,
        }
    }

    /// Construct from a raw mode string.
    ///
    /// Anything outside the three-member enumeration is rejected here, before
    /// any file I/O or rendering happens.
    pub fn from_parts(template_path: impl Into<PathBuf>, mode: &str) -> Result<Self> {
        Ok(SpecRenderer::new(template_path, mode.parse::<UsageMode>()?))
    }

    pub fn mode(&self) -> UsageMode {
        self.mode
    }

    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    /// Render the OpenAPI document for this renderer's usage mode.
    ///
    /// The mode is the only variable injected into the template; the shared
    /// blocks template is added to the fragment search path behind the primary
    /// template's own directory.
    pub fn render(&self) -> Result<String> {
        debug!(
            template = %self.template_path.display(),
            mode = %self.mode,
            "rendering OpenAPI template"
        );
        let blocks_path = blocks_template_path();
        render_template(
            &self.template_path,
            Some(&blocks_path),
            json!({ "type": self.mode.as_str() }),
        )
    }

    /// Render and parse the document into a YAML mapping.
    ///
    /// Only the backend flavor is free of gateway placeholder tokens such as
    /// `${host}`, so only it has a meaningful structured form.
    ///
    /// # Panics
    ///
    /// Panics if the usage mode is not [`UsageMode::Backend`]; requesting the
    /// structured form for another mode is a programming error, not a
    /// recoverable condition.
    pub fn to_structured(&self) -> Result<Mapping> {
        assert_eq!(
            self.mode,
            UsageMode::Backend,
            "structured output is only supported for the backend usage mode"
        );
        Ok(serde_yaml::from_str(&self.render()?)?)
    }

    /// Render, substitute and validate against the OpenAPI v2 schema.
    ///
    /// `replacements` maps literal tokens (e.g. `${host}`) to the strings that
    /// stand in for environment-specific values; the pass is a plain text
    /// replace over the rendered document, applied before the document is
    /// written to a transient file and checked against the schema.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::SchemaValidation`] with the validator's
    /// diagnostics when the document does not conform.
    pub fn validate(&self, replacements: &BTreeMap<String, String>) -> Result<()> {
        let mut rendered = self.render()?;
        for (token, value) in replacements {
            rendered = rendered.replace(token.as_str(), value.as_str());
        }

        let staging = tempfile::tempdir()?;
        let spec_path = staging.path().join("openapi.yaml");
        fs::write(&spec_path, &rendered)?;

        let document: serde_json::Value = serde_yaml::from_str(&fs::read_to_string(&spec_path)?)?;
        validator::validate_v2_document(&document)
    }
}
