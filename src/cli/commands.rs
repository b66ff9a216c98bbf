use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::error::Error;
use crate::spec::{SpecRenderer, UsageMode};
use crate::validator;

/// Command-line interface for the apibase toolkit.
#[derive(Parser)]
#[command(name = "apibase-gen")]
#[command(about = "OpenAPI template rendering and client generation", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Render an OpenAPI specification for a usage mode and write it to a file
    GenerateOpenapiSpec {
        /// Path to the OpenAPI Jinja template
        template_file: PathBuf,

        /// Where to write the rendered specification
        output_file: PathBuf,

        /// Target consumer of the rendered specification
        #[arg(long, value_enum)]
        usage_type: UsageMode,
    },
    /// Render an OpenAPI specification and validate it against the v2 schema
    ValidateOpenapiSpec {
        /// Path to the OpenAPI Jinja template
        template_file: PathBuf,

        /// Target consumer of the rendered specification
        #[arg(long, value_enum)]
        usage_type: UsageMode,

        /// Literal TOKEN=VALUE substitutions applied before validation
        #[arg(long = "replace", value_parser = parse_replacement)]
        replace: Vec<(String, String)>,
    },
    /// Generate the API client library and docs with openapi-generator-cli
    RunOpenapiGenerator {
        /// Path to the OpenAPI Jinja template
        template_file: PathBuf,

        /// Package directory the client crate is installed into; its name
        /// doubles as the client package name
        api_package_dir: PathBuf,

        /// Directory receiving the specification copy and client documentation
        api_docs_dir: PathBuf,
    },
}

fn parse_replacement(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(token, value)| (token.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected TOKEN=VALUE, got `{raw}`"))
}

/// Execute the CLI command provided by the user.
///
/// # Errors
///
/// Returns an error if rendering fails, the rendered document does not conform
/// to the OpenAPI v2 schema or the external generator pipeline fails.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_command(cli.command)
}

pub(crate) fn run_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::GenerateOpenapiSpec {
            template_file,
            output_file,
            usage_type,
        } => {
            let rendered = SpecRenderer::new(&template_file, usage_type).render()?;
            fs::write(&output_file, rendered)
                .with_context(|| format!("failed to write {output_file:?}"))?;
            println!("✅ Wrote {usage_type} spec → {output_file:?}");
            Ok(())
        }
        Commands::ValidateOpenapiSpec {
            template_file,
            usage_type,
            replace,
        } => {
            let replacements: BTreeMap<String, String> = replace.into_iter().collect();
            match SpecRenderer::new(&template_file, usage_type).validate(&replacements) {
                Ok(()) => {
                    println!("✅ {usage_type} spec is valid");
                    Ok(())
                }
                Err(Error::SchemaValidation(issues)) => {
                    validator::print_issues(&issues);
                    anyhow::bail!("specification failed validation");
                }
                Err(err) => Err(err.into()),
            }
        }
        Commands::RunOpenapiGenerator {
            template_file,
            api_package_dir,
            api_docs_dir,
        } => crate::generator::run_generator(&template_file, &api_package_dir, &api_docs_dir),
    }
}
