//! OpenAPI specification rendering per usage mode.
//!
//! A single shared template carries conditional blocks for every consumer of the
//! specification; [`SpecRenderer`] selects the flavor for one [`UsageMode`] and
//! can parse or validate what it rendered.

mod mode;
mod renderer;

pub use mode::UsageMode;
pub use renderer::{blocks_template_path, SpecRenderer};
