#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::PathBuf;
use std::process::Command;

const USAGE_TYPES: [&str; 3] = ["cloud_endpoints", "backend", "openapi_generator"];

fn fixture_template() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("openapi.yaml.j2")
}

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_apibase-gen"))
}

#[test]
fn test_cli_generate_openapi_spec() {
    let dir = tempfile::tempdir().unwrap();
    for usage_type in USAGE_TYPES {
        let output_file = dir.path().join(format!("openapi_{usage_type}.yaml"));
        let status = cli()
            .arg("generate-openapi-spec")
            .arg(fixture_template())
            .arg(&output_file)
            .arg("--usage-type")
            .arg(usage_type)
            .status()
            .expect("run cli");
        assert!(status.success(), "generation failed for {usage_type}");
        assert!(output_file.is_file());

        let contents = std::fs::read_to_string(&output_file).unwrap();
        assert!(contents.starts_with("swagger: \"2.0\""));
    }
}

#[test]
fn test_cli_generate_rejects_invalid_usage_type() {
    let dir = tempfile::tempdir().unwrap();
    let output_file = dir.path().join("openapi_invalid.yaml");
    let status = cli()
        .arg("generate-openapi-spec")
        .arg(fixture_template())
        .arg(&output_file)
        .arg("--usage-type")
        .arg("invalid")
        .status()
        .expect("run cli");
    assert_eq!(status.code(), Some(2));
    assert!(!output_file.exists());
}

#[test]
fn test_cli_validate_backend() {
    let status = cli()
        .arg("validate-openapi-spec")
        .arg(fixture_template())
        .arg("--usage-type")
        .arg("backend")
        .status()
        .expect("run cli");
    assert!(status.success());
}

#[test]
fn test_cli_validate_cloud_endpoints_with_replacements() {
    let status = cli()
        .arg("validate-openapi-spec")
        .arg(fixture_template())
        .arg("--usage-type")
        .arg("cloud_endpoints")
        .arg("--replace")
        .arg("${host}=api.example.org")
        .arg("--replace")
        .arg("${backend_address}=192.168.1.1")
        .status()
        .expect("run cli");
    assert!(status.success());
}

#[test]
fn test_cli_validate_failure_exits_nonzero() {
    // Unresolved ${host} placeholders do not pass schema validation.
    let status = cli()
        .arg("validate-openapi-spec")
        .arg(fixture_template())
        .arg("--usage-type")
        .arg("cloud_endpoints")
        .status()
        .expect("run cli");
    assert_eq!(status.code(), Some(1));
}
