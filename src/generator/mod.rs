//! Wrapper around the external `openapi-generator-cli` tool.
//!
//! The generator pipeline renders the `openapi_generator` flavor of the
//! specification into a staging directory, invokes the third-party generator on
//! it and relocates the generated client crate and its documentation into their
//! final directories. Installation of the generator launcher is handled on
//! demand.

mod install;
mod invoke;
mod relocate;

pub use install::{
    default_installation_dir, generator_exists, install_generator, GENERATOR_VERSION,
};
pub use invoke::{call_generator, generator_args, generator_config_dir};
pub use relocate::move_client_files;

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::spec::{SpecRenderer, UsageMode};

/// Run the full client-generation pipeline for `template_file`.
///
/// The API package directory's name doubles as the client package name, exactly
/// as the docs directory receives the rendered specification for the REST API
/// reference.
pub fn run_generator(
    template_file: &Path,
    api_package_dir: &Path,
    api_docs_dir: &Path,
) -> anyhow::Result<()> {
    let package_name = api_package_dir
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("invalid API package directory: {api_package_dir:?}"))?
        .to_string();

    let installation_dir = default_installation_dir()?;
    if !generator_exists(&installation_dir) {
        install_generator(&installation_dir)?;
    }

    let staging = tempfile::tempdir().context("failed to create staging directory")?;
    let openapi_path = staging.path().join("openapi.yaml");
    let specification = SpecRenderer::new(template_file, UsageMode::OpenapiGenerator).render()?;
    fs::write(&openapi_path, &specification)
        .with_context(|| format!("failed to write specification to {openapi_path:?}"))?;

    fs::copy(&openapi_path, api_docs_dir.join("openapi.yaml"))
        .with_context(|| format!("failed to copy specification into {api_docs_dir:?}"))?;

    call_generator(&installation_dir, staging.path(), &openapi_path, &package_name)?;
    move_client_files(staging.path(), api_package_dir, api_docs_dir, &package_name)?;

    println!("✅ Generated client for {package_name} → {api_package_dir:?}");
    Ok(())
}
