//! Configuration module
//!
//! Settings are loaded from a YAML file when one is present and can be
//! overridden through `SERPSCOUT_*` environment variables.

mod settings;

pub use settings::*;
