//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r#"# Word finder configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[search]
# context_radius = 30                 # 1-500 characters each side
# panel_class = "word-finder-panel"   # text under this class is ignored
# excluded_tags = ["script", "style"]

[visibility]
# buffer_px = 50.0                    # 0-1000

[scroll]
# debounce_ms = 100                   # 1-5000

[logging]
# level = "info"                      # trace, debug, info, warn, error
"#
}
