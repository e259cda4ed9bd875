//! Full configuration validation.
//!
//! Validates numeric ranges and required strings.

use crate::schema::FinderConfig;
use wordfinder_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &FinderConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range(
        &mut errors,
        "search.context_radius",
        config.search.context_radius as u64,
        1,
        500,
    );
    if config.search.panel_class.trim().is_empty() {
        errors.push("search.panel_class must not be empty".into());
    }
    if config.search.excluded_tags.iter().any(|t| t.trim().is_empty()) {
        errors.push("search.excluded_tags must not contain empty tags".into());
    }

    validate_range_f64(
        &mut errors,
        "visibility.buffer_px",
        config.visibility.buffer_px,
        0.0,
        1000.0,
    );

    validate_range(&mut errors, "scroll.debounce_ms", config.scroll.debounce_ms, 1, 5000);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_range(errors: &mut Vec<String>, name: &str, value: u64, min: u64, max: u64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

fn validate_range_f64(errors: &mut Vec<String>, name: &str, value: f64, min: f64, max: f64) {
    // NaN fails both comparisons, so check it explicitly.
    if value.is_nan() || value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(validate(&FinderConfig::default()).is_ok());
    }

    #[test]
    fn catches_zero_context_radius() {
        let mut config = FinderConfig::default();
        config.search.context_radius = 0;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("search.context_radius"));
    }

    #[test]
    fn catches_negative_buffer() {
        let mut config = FinderConfig::default();
        config.visibility.buffer_px = -1.0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn catches_nan_buffer() {
        let mut config = FinderConfig::default();
        config.visibility.buffer_px = f64::NAN;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn catches_empty_panel_class() {
        let mut config = FinderConfig::default();
        config.search.panel_class = "  ".into();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("panel_class"));
    }

    #[test]
    fn collects_multiple_errors() {
        let mut config = FinderConfig::default();
        config.scroll.debounce_ms = 0;
        config.search.context_radius = 10_000;
        let msg = validate(&config).unwrap_err().to_string();
        assert!(msg.contains("scroll.debounce_ms"));
        assert!(msg.contains("search.context_radius"));
        assert!(msg.contains("; "));
    }
}
