use std::fs;
use std::path::Path;

use anyhow::Context;
use walkdir::WalkDir;

/// Relocate generated client files into their final package and docs layout.
///
/// The generator writes everything under `<tmp_dir>/output`. The top-level
/// README becomes the client chapter of the API docs, the per-model markdown
/// under `docs/` merges into the docs directory and the remaining crate files
/// land under `<api_dir>/client`.
pub fn move_client_files(
    tmp_dir: &Path,
    api_dir: &Path,
    docs_dir: &Path,
    package_name: &str,
) -> anyhow::Result<()> {
    let source_dir = tmp_dir.join("output");

    // Read-the-docs files first: README and generated model/API markdown.
    let readme = source_dir.join("README.md");
    fs::copy(&readme, docs_dir.join("api_client.md"))
        .with_context(|| format!("failed to copy client README from {readme:?}"))?;
    fs::remove_file(&readme)?;

    let generated_docs = source_dir.join("docs");
    if generated_docs.is_dir() {
        copy_tree(&generated_docs, docs_dir)?;
        fs::remove_dir_all(&generated_docs)?;
    }

    // Remaining client crate files move into the package directory.
    let client_dir = api_dir.join("client");
    copy_tree(&source_dir, &client_dir)
        .with_context(|| format!("failed to install client files for {package_name}"))?;
    Ok(())
}

/// Recursively copy `src` into `dst`, merging with existing directories.
fn copy_tree(src: &Path, dst: &Path) -> anyhow::Result<()> {
    for entry in WalkDir::new(src) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(src)?;
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
