//! Occurrence search settings.

use serde::{Deserialize, Serialize};

/// Characters of surrounding text kept on each side of a match.
pub const DEFAULT_CONTEXT_RADIUS: usize = 30;

/// CSS class marking the finder's own panel.
pub const DEFAULT_PANEL_CLASS: &str = "word-finder-panel";

/// Search configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Context radius in characters (valid range: 1-500).
    pub context_radius: usize,
    /// Text inside an element with this class is never matched.
    pub panel_class: String,
    /// Element tags whose text content is not rendered.
    pub excluded_tags: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            context_radius: DEFAULT_CONTEXT_RADIUS,
            panel_class: DEFAULT_PANEL_CLASS.into(),
            excluded_tags: vec!["script".into(), "style".into()],
        }
    }
}
