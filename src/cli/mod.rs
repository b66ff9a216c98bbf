//! Command-line interface for the `apibase-gen` binary.
//!
//! Commands:
//! - `generate-openapi-spec` - render one flavor of the OpenAPI specification
//!   and write it to a file.
//! - `validate-openapi-spec` - render, apply literal placeholder substitutions
//!   and validate against the OpenAPI v2 schema.
//! - `run-openapi-generator` - produce the API client library and docs with
//!   `openapi-generator-cli`.

mod commands;


pub use commands::{run_cli, Cli, Commands};
