use serde::{Deserialize, Serialize};

/// Scroll handling settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScrollConfig {
    /// Quiet period before reclassifying, in milliseconds (valid range: 1-5000).
    pub debounce_ms: u64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { debounce_ms: 100 }
    }
}

impl ScrollConfig {
    pub fn debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.debounce_ms)
    }
}
