#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::Path;

use apibase::generator::{generator_args, generator_exists, move_client_files};

#[test]
fn test_generator_args_shape() {
    let args = generator_args(
        Path::new("/tmp/staging/openapi.yaml"),
        "observatory",
        Path::new("/tmp/staging/output"),
    );

    assert_eq!(args[0], "generate");
    assert_eq!(args[1], "-i");
    assert_eq!(args[2], "/tmp/staging/openapi.yaml");
    assert_eq!(args[3], "-g");
    assert_eq!(args[4], "rust");

    let config = &args[args.iter().position(|a| a == "-c").unwrap() + 1];
    assert!(config.ends_with("api-config.yaml"));
    let templates = &args[args.iter().position(|a| a == "-t").unwrap() + 1];
    assert!(templates.ends_with("templates"));

    assert!(args.contains(
        &"--additional-properties=packageName=observatory_client".to_string()
    ));
    assert_eq!(args[args.len() - 2], "-o");
    assert_eq!(args[args.len() - 1], "/tmp/staging/output");
}

#[test]
fn test_generator_exists_without_installation() {
    let dir = tempfile::tempdir().unwrap();
    assert!(!generator_exists(dir.path()));
}

#[test]
fn test_move_client_files() {
    // Synthetic generator output tree, shaped like `openapi-generator -g rust`.
    let staging = tempfile::tempdir().unwrap();
    let output = staging.path().join("output");
    fs::create_dir_all(output.join("docs")).unwrap();
    fs::create_dir_all(output.join("src").join("apis")).unwrap();
    fs::write(output.join("README.md"), "# generated client\n").unwrap();
    fs::write(output.join("Cargo.toml"), "[package]\n").unwrap();
    fs::write(output.join("docs").join("SearchResponse.md"), "model\n").unwrap();
    fs::write(output.join("docs").join("DefaultApi.md"), "api\n").unwrap();
    fs::write(output.join("src").join("lib.rs"), "pub mod apis;\n").unwrap();
    fs::write(output.join("src").join("apis").join("mod.rs"), "\n").unwrap();

    let root = tempfile::tempdir().unwrap();
    let api_dir = root.path().join("package");
    let docs_dir = root.path().join("docs");
    fs::create_dir_all(&api_dir).unwrap();
    fs::create_dir_all(&docs_dir).unwrap();

    move_client_files(staging.path(), &api_dir, &docs_dir, "package").unwrap();

    // Docs directory: client README chapter plus generated markdown.
    assert!(docs_dir.join("api_client.md").is_file());
    assert!(docs_dir.join("SearchResponse.md").is_file());
    assert!(docs_dir.join("DefaultApi.md").is_file());

    // Package directory: the client crate, without README or docs.
    assert!(api_dir.join("client").join("Cargo.toml").is_file());
    assert!(api_dir.join("client").join("src").join("lib.rs").is_file());
    assert!(api_dir
        .join("client")
        .join("src")
        .join("apis")
        .join("mod.rs")
        .is_file());
    assert!(!api_dir.join("client").join("docs").exists());
    assert!(!api_dir.join("client").join("README.md").exists());
}

#[test]
fn test_move_client_files_without_readme_fails() {
    let staging = tempfile::tempdir().unwrap();
    fs::create_dir_all(staging.path().join("output")).unwrap();

    let root = tempfile::tempdir().unwrap();
    let api_dir = root.path().join("package");
    let docs_dir = root.path().join("docs");
    fs::create_dir_all(&api_dir).unwrap();
    fs::create_dir_all(&docs_dir).unwrap();

    assert!(move_client_files(staging.path(), &api_dir, &docs_dir, "package").is_err());
}
