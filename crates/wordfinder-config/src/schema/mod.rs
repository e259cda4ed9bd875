//! Configuration schema types for the word finder.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod scroll;
mod search;
mod visibility;

pub use logging::*;
pub use scroll::*;
pub use search::*;
pub use visibility::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FinderConfig {
    pub search: SearchConfig,
    pub visibility: VisibilityConfig,
    pub scroll: ScrollConfig,
    pub logging: LoggingConfig,
}
