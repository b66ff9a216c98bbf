//! OpenAPI 2.0 schema validation.
//!
//! The Swagger 2.0 JSON schema ships with the crate and is compiled once; every
//! violation is reported as a [`ValidationIssue`] carrying the document location
//! and the validator's message.

use jsonschema::Validator;
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::error::{Error, Result};

/// Swagger 2.0 JSON schema (draft-04), bundled with the crate.
const OPENAPI_V2_SCHEMA: &str = include_str!("../schemas/openapi-v2.json");

#[allow(clippy::expect_used)]
static SCHEMA_VALIDATOR: Lazy<Validator> = Lazy::new(|| {
    let schema: Value =
        serde_json::from_str(OPENAPI_V2_SCHEMA).expect("bundled OpenAPI v2 schema is valid JSON");
    jsonschema::validator_for(&schema).expect("bundled OpenAPI v2 schema compiles")
});

/// A single schema violation reported by the validator.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// JSON pointer into the document where the violation occurred.
    pub location: String,
    /// The validator's message for this violation.
    pub message: String,
}

impl ValidationIssue {
    pub fn new(location: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationIssue {
            location: location.into(),
            message: message.into(),
        }
    }
}

/// Validate a parsed OpenAPI document against the Swagger 2.0 schema.
///
/// # Errors
///
/// Returns [`Error::SchemaValidation`] with one issue per violation; conforming
/// documents succeed silently.
pub fn validate_v2_document(document: &Value) -> Result<()> {
    let issues: Vec<ValidationIssue> = SCHEMA_VALIDATOR
        .iter_errors(document)
        .map(|err| ValidationIssue::new(err.instance_path().to_string(), err.to_string()))
        .collect();

    if issues.is_empty() {
        Ok(())
    } else {
        Err(Error::SchemaValidation(issues))
    }
}

/// Print validation issues for CLI display.
pub fn print_issues(issues: &[ValidationIssue]) {
    eprintln!(
        "\n❌ OpenAPI spec validation failed. {} issue(s) found:\n",
        issues.len()
    );
    for issue in issues {
        let location = if issue.location.is_empty() {
            "<root>"
        } else {
            issue.location.as_str()
        };
        eprintln!("{location}: {}", issue.message);
    }
    eprintln!();
}
