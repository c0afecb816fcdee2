use crate::config::ConfigError;

/// Everything that can end a seeding run early.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Connection failed: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_number() {
        let err = SeedError::InvalidNumber("abc".to_string());
        assert_eq!(err.to_string(), "Invalid number: \"abc\"");
    }

    #[test]
    fn config_errors_are_prefixed() {
        let err = SeedError::from(ConfigError::Missing("PGHOST"));
        assert_eq!(
            err.to_string(),
            "Configuration error: PGHOST must be set in the environment"
        );
    }
}
