//! Process configuration read from environment variables.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `HOST` | `127.0.0.1` | bind host |
//! | `PORT` | `3000` | bind port |
//! | `TODO_DEFAULT_FIRST_N` | `3` | `first_n` used when a list request omits it |
//! | `TODO_SEED` | `true` | start with the example todos |

use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub default_first_n: i64,
    pub seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            default_first_n: 3,
            seed: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Missing keys take their
    /// default; present but unparseable keys are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let default_first_n = parse(&lookup, "TODO_DEFAULT_FIRST_N", defaults.default_first_n)?;
        if default_first_n < 0 {
            return Err(ConfigError::Invalid {
                key: "TODO_DEFAULT_FIRST_N",
                value: default_first_n.to_string(),
            });
        }
        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse(&lookup, "PORT", defaults.port)?,
            default_first_n,
            seed: parse(&lookup, "TODO_SEED", defaults.seed)?,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
