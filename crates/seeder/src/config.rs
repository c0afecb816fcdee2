//! Connection settings loaded from the standard libpq environment variables.

use olay_db::ConnectParams;

/// Required environment variables, in the order they are reported.
pub const REQUIRED_VARS: [&str; 5] = ["PGHOST", "PGPORT", "PGUSER", "PGPASSWORD", "PGDATABASE"];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set in the environment")]
    Missing(&'static str),

    #[error("{var} must be a valid port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },
}

/// Seeder configuration.
///
/// | Env Var      | Required | Notes                          |
/// |--------------|----------|--------------------------------|
/// | `PGHOST`     | **yes**  | must not be empty              |
/// | `PGPORT`     | **yes**  | `u16`                          |
/// | `PGUSER`     | **yes**  | must not be empty              |
/// | `PGPASSWORD` | **yes**  | may be empty (trust auth)      |
/// | `PGDATABASE` | **yes**  | must not be empty              |
#[derive(Debug, Clone)]
pub struct SeederConfig {
    pub db: ConnectParams,
}

impl SeederConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| -> Result<String, ConfigError> {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let host = required("PGHOST")?;

        let raw_port = required("PGPORT")?;
        let port: u16 = raw_port
            .parse()
            .ok()
            .filter(|p| *p != 0)
            .ok_or(ConfigError::InvalidPort {
                var: "PGPORT",
                value: raw_port.clone(),
            })?;

        let user = required("PGUSER")?;
        let password = lookup("PGPASSWORD").ok_or(ConfigError::Missing("PGPASSWORD"))?;
        let database = required("PGDATABASE")?;

        Ok(Self {
            db: ConnectParams {
                host,
                port,
                user,
                password,
                database,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn full() -> Vec<(&'static str, &'static str)> {
        vec![
            ("PGHOST", "localhost"),
            ("PGPORT", "5432"),
            ("PGUSER", "postgres"),
            ("PGPASSWORD", "secret"),
            ("PGDATABASE", "ankara"),
        ]
    }

    #[test]
    fn loads_all_variables() {
        let config = SeederConfig::from_lookup(env(&full())).unwrap();
        assert_eq!(config.db.host, "localhost");
        assert_eq!(config.db.port, 5432);
        assert_eq!(config.db.user, "postgres");
        assert_eq!(config.db.password, "secret");
        assert_eq!(config.db.database, "ankara");
    }

    #[test]
    fn each_missing_variable_is_named() {
        for var in REQUIRED_VARS {
            let pairs: Vec<_> = full().into_iter().filter(|(k, _)| *k != var).collect();
            let err = SeederConfig::from_lookup(env(&pairs)).unwrap_err();
            assert_eq!(err, ConfigError::Missing(var));
        }
    }

    #[test]
    fn blank_host_is_missing() {
        let mut pairs = full();
        pairs[0] = ("PGHOST", "   ");
        let err = SeederConfig::from_lookup(env(&pairs)).unwrap_err();
        assert_eq!(err, ConfigError::Missing("PGHOST"));
    }

    #[test]
    fn empty_password_is_allowed() {
        let mut pairs = full();
        pairs[3] = ("PGPASSWORD", "");
        let config = SeederConfig::from_lookup(env(&pairs)).unwrap();
        assert!(config.db.password.is_empty());
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        for bad in ["abc", "70000", "0", "-1"] {
            let mut pairs = full();
            pairs[1] = ("PGPORT", bad);
            let err = SeederConfig::from_lookup(env(&pairs)).unwrap_err();
            assert_eq!(
                err,
                ConfigError::InvalidPort {
                    var: "PGPORT",
                    value: bad.to_string()
                }
            );
            assert!(err.to_string().contains("PGPORT"));
        }
    }
}
