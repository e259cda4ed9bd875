use serde::{Deserialize, Serialize};

/// Visibility classification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VisibilityConfig {
    /// Margin added around the viewport, in pixels (valid range: 0-1000).
    pub buffer_px: f64,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self { buffer_px: 50.0 }
    }
}
