use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::Error;

/// The target consumer of a rendered OpenAPI document.
///
/// The enumeration is closed: anything outside these three members is rejected
/// when parsing, before any file I/O happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum UsageMode {
    /// Cloud API-gateway configuration, with environment placeholders and
    /// gateway security definitions.
    #[value(name = "cloud_endpoints")]
    CloudEndpoints,
    /// In-process web framework registration.
    #[value(name = "backend")]
    Backend,
    /// Input for the external client-code generator.
    #[value(name = "openapi_generator")]
    OpenapiGenerator,
}

impl UsageMode {
    /// All legal usage modes, in declaration order.
    pub const ALL: [UsageMode; 3] = [
        UsageMode::CloudEndpoints,
        UsageMode::Backend,
        UsageMode::OpenapiGenerator,
    ];

    /// The snake_case name used in templates and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            UsageMode::CloudEndpoints => "cloud_endpoints",
            UsageMode::Backend => "backend",
            UsageMode::OpenapiGenerator => "openapi_generator",
        }
    }
}

impl fmt::Display for UsageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UsageMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "cloud_endpoints" => Ok(UsageMode::CloudEndpoints),
            "backend" => Ok(UsageMode::Backend),
            "openapi_generator" => Ok(UsageMode::OpenapiGenerator),
            other => Err(Error::InvalidUsageMode(other.to_string())),
        }
    }
}
