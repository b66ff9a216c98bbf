//! Thin factory that prepares a backend specification for framework
//! registration.
//!
//! The factory renders the backend flavor of the OpenAPI template, keeps the
//! structured document a web framework merges into its specification
//! registration call and derives a route table from it for introspection.

use std::path::Path;

use serde_yaml::{Mapping, Value};
use tracing::info;

use crate::error::Result;
use crate::spec::{SpecRenderer, UsageMode};

/// HTTP verbs that may appear as path-item keys.
const METHODS: [&str; 8] = [
    "get", "post", "put", "delete", "patch", "options", "head", "trace",
];

/// An operation extracted from the backend specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteBinding {
    pub method: String,
    pub path: String,
    pub operation_id: Option<String>,
}

/// A backend application description: the structured OpenAPI document plus the
/// route table derived from it.
#[derive(Debug, Clone)]
pub struct App {
    pub document: Mapping,
    pub routes: Vec<RouteBinding>,
}

/// Render the backend flavor of `template_path` and derive the route table a
/// web framework needs for specification registration.
pub fn create_app(template_path: &Path) -> Result<App> {
    info!(template = %template_path.display(), "creating app from OpenAPI template");
    let renderer = SpecRenderer::new(template_path, UsageMode::Backend);
    let document = renderer.to_structured()?;
    let routes = extract_routes(&document);
    Ok(App { document, routes })
}

/// Walk `paths`, keeping only entries keyed by a legal HTTP verb.
fn extract_routes(document: &Mapping) -> Vec<RouteBinding> {
    let mut routes = Vec::new();
    let Some(Value::Mapping(paths)) = document.get("paths") else {
        return routes;
    };
    for (path, item) in paths {
        let (Value::String(path), Value::Mapping(item)) = (path, item) else {
            continue;
        };
        for (key, operation) in item {
            let Value::String(method) = key else {
                continue;
            };
            if !METHODS.contains(&method.as_str()) {
                continue;
            }
            let operation_id = operation
                .as_mapping()
                .and_then(|op| op.get("operationId"))
                .and_then(Value::as_str)
                .map(str::to_string);
            routes.push(RouteBinding {
                method: method.clone(),
                path: path.clone(),
                operation_id,
            });
        }
    }
    routes
}
