use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;
use tracing::{info, warn};

/// Launcher version pinned via `OPENAPI_GENERATOR_VERSION` in every invocation.
pub const GENERATOR_VERSION: &str = "5.3.0";

const LAUNCHER_NAME: &str = "openapi-generator-cli";
const LAUNCHER_URL: &str = "https://raw.githubusercontent.com/OpenAPITools/openapi-generator/master/bin/utils/openapi-generator-cli.sh";

/// Default installation directory for the generator launcher.
pub fn default_installation_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var_os("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join("bin").join("openapitools"))
}

/// Whether a working generator launcher is installed in `installation_dir`.
///
/// Probes `./openapi-generator-cli version`; any spawn failure or empty output
/// counts as not installed.
pub fn generator_exists(installation_dir: &Path) -> bool {
    let output = Command::new(format!("./{LAUNCHER_NAME}"))
        .current_dir(installation_dir)
        .env("OPENAPI_GENERATOR_VERSION", GENERATOR_VERSION)
        .arg("version")
        .output();
    match output {
        Ok(out) => !out.stdout.is_empty(),
        Err(_) => false,
    }
}

/// Download and install the generator launcher script.
///
/// Returns whether the installation ended up usable; download and filesystem
/// failures are errors, a launcher that installs but does not run is reported
/// as `false`, mirroring the probe in [`generator_exists`].
pub fn install_generator(installation_dir: &Path) -> anyhow::Result<bool> {
    info!("installing openapi-generator-cli");
    fs::create_dir_all(installation_dir)
        .with_context(|| format!("failed to create {installation_dir:?}"))?;
    let launcher_path = installation_dir.join(LAUNCHER_NAME);

    let response = reqwest::blocking::get(LAUNCHER_URL)
        .context("failed to download the openapi-generator-cli launcher")?
        .error_for_status()
        .context("openapi-generator-cli launcher download was rejected")?;
    let body = response
        .bytes()
        .context("failed to read the openapi-generator-cli launcher body")?;
    fs::write(&launcher_path, &body)
        .with_context(|| format!("failed to write {launcher_path:?}"))?;
    make_executable(&launcher_path)?;

    if generator_exists(installation_dir) {
        info!("successfully installed openapi-generator-cli");
        Ok(true)
    } else {
        warn!("error installing openapi-generator-cli");
        Ok(false)
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(perms.mode() | 0o111);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
