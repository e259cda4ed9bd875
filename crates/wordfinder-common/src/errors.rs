use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum FinderError {
    /// The query was empty after trimming.
    #[error("please enter a word to search for")]
    EmptyQuery,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("search.context_radius = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: search.context_radius = 0"
        );
    }

    #[test]
    fn empty_query_display() {
        assert_eq!(
            FinderError::EmptyQuery.to_string(),
            "please enter a word to search for"
        );
    }

    #[test]
    fn finder_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: FinderError = config_err.into();
        assert!(matches!(err, FinderError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn finder_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: FinderError = io_err.into();
        assert!(matches!(err, FinderError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }
}
