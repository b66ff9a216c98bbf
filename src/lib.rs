//! # apibase
//!
//! Developer tooling for OpenAPI-first REST APIs. A single Jinja-style template
//! carries the API description for three distinct consumers; `apibase` renders
//! the flavor each one needs, validates it against the OpenAPI 2.0 schema and
//! drives the external `openapi-generator-cli` tool to produce a client library
//! and its documentation.
//!
//! ## Usage modes
//!
//! Every rendering operation is keyed on a [`UsageMode`]:
//!
//! - `cloud_endpoints` - gateway configuration, with `${host}`-style
//!   environment placeholders and gateway security definitions.
//! - `backend` - the flavor an in-process web framework registers; the only
//!   one with a meaningful structured (parsed-mapping) form.
//! - `openapi_generator` - the input handed to the client-code generator.
//!
//! ## Modules
//!
//! - [`template`] - Jinja-style file rendering with a fragment search path
//! - [`spec`] - usage-mode selection, rendering and validation
//! - [`validator`] - OpenAPI 2.0 JSON-schema validation
//! - [`app`] - backend app factory (structured document + route table)
//! - [`generator`] - installation and invocation of `openapi-generator-cli`
//!   plus relocation of its output
//! - [`cli`] - the `apibase-gen` command-line interface
//!
//! ## Quick start
//!
//! ```no_run
//! use std::collections::BTreeMap;
//! use apibase::{SpecRenderer, UsageMode};
//!
//! let renderer = SpecRenderer::new("openapi.yaml.j2", UsageMode::Backend);
//! let text = renderer.render().expect("failed to render spec");
//! renderer
//!     .validate(&BTreeMap::new())
//!     .expect("spec does not conform to OpenAPI v2");
//! ```

pub mod app;
pub mod cli;
mod error;
pub mod generator;
pub mod spec;
pub mod template;
pub mod validator;

pub use error::{Error, Result};
pub use spec::{SpecRenderer, UsageMode};
pub use template::render_template;
