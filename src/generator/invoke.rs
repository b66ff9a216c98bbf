use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;

use super::install::GENERATOR_VERSION;

/// Directory with the generator configuration shipped with the crate.
pub fn generator_config_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("openapi-generator")
}

/// Build the argument vector for an `openapi-generator-cli generate` call.
///
/// The generated client is a Rust crate configured by the bundled
/// `api-config.yaml` and the custom templates directory.
pub fn generator_args(openapi_path: &Path, package_name: &str, output_dir: &Path) -> Vec<String> {
    let config_dir = generator_config_dir();
    let config_path = config_dir.join("api-config.yaml");
    let templates_dir = config_dir.join("templates");
    vec![
        "generate".to_string(),
        "-i".to_string(),
        openapi_path.display().to_string(),
        "-g".to_string(),
        "rust".to_string(),
        "-c".to_string(),
        config_path.display().to_string(),
        "-t".to_string(),
        templates_dir.display().to_string(),
        format!("--additional-properties=packageName={package_name}_client"),
        "-o".to_string(),
        output_dir.display().to_string(),
    ]
}

/// Invoke the generator on a rendered specification.
///
/// Runs from the installation directory (the launcher script expects that),
/// writing its output under `<staging_dir>/output`. Generator stdout is
/// forwarded so its progress remains visible.
pub fn call_generator(
    installation_dir: &Path,
    staging_dir: &Path,
    openapi_path: &Path,
    package_name: &str,
) -> anyhow::Result<()> {
    let output_dir = staging_dir.join("output");
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create {output_dir:?}"))?;

    let output = Command::new("./openapi-generator-cli")
        .current_dir(installation_dir)
        .env("OPENAPI_GENERATOR_VERSION", GENERATOR_VERSION)
        .args(generator_args(openapi_path, package_name, &output_dir))
        .output()
        .context("failed to run openapi-generator-cli")?;

    println!("{}", String::from_utf8_lossy(&output.stdout));
    if !output.status.success() {
        anyhow::bail!(
            "openapi-generator-cli exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(())
}
