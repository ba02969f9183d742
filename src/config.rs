use anyhow::{Context, Result};
use std::env;
use thiserror::Error;

pub const JSON_API_CONTENT_TYPE: &str = "application/vnd.api+json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a boolean (true/false/1/0/yes/no/on/off), got {value:?}")]
    InvalidBool { name: String, value: String },

    #[error("{name} must not be empty")]
    Empty { name: String },
}

/// Controls what an error payload carries when it leaves the process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Keep `debug` members (off in production)
    pub include_debug: bool,
    /// Keep `meta` members
    pub include_meta: bool,
    /// Content type used by the HTTP adapter
    pub content_type: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            include_debug: false,
            include_meta: true,
            content_type: JSON_API_CONTENT_TYPE.to_string(),
        }
    }
}

impl RenderConfig {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
            .context("Failed to load error rendering configuration")
    }

    /// Build the config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            include_debug: match lookup("JSONAPI_ERRORS_INCLUDE_DEBUG") {
                Some(value) => parse_bool("JSONAPI_ERRORS_INCLUDE_DEBUG", &value)?,
                None => defaults.include_debug,
            },
            include_meta: match lookup("JSONAPI_ERRORS_INCLUDE_META") {
                Some(value) => parse_bool("JSONAPI_ERRORS_INCLUDE_META", &value)?,
                None => defaults.include_meta,
            },
            content_type: match lookup("JSONAPI_ERRORS_CONTENT_TYPE") {
                Some(value) if value.trim().is_empty() => {
                    return Err(ConfigError::Empty {
                        name: "JSONAPI_ERRORS_CONTENT_TYPE".to_string(),
                    })
                }
                Some(value) => value.trim().to_string(),
                None => defaults.content_type,
            },
        })
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = RenderConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, RenderConfig::default());
        assert!(!config.include_debug);
        assert!(config.include_meta);
        assert_eq!(config.content_type, "application/vnd.api+json");
    }

    #[test]
    fn test_overrides() {
        let config = RenderConfig::from_lookup(lookup_from(&[
            ("JSONAPI_ERRORS_INCLUDE_DEBUG", "Yes"),
            ("JSONAPI_ERRORS_INCLUDE_META", "0"),
            ("JSONAPI_ERRORS_CONTENT_TYPE", " application/json "),
        ]))
        .unwrap();

        assert!(config.include_debug);
        assert!(!config.include_meta);
        assert_eq!(config.content_type, "application/json");
    }

    #[test]
    fn test_invalid_bool() {
        let err = RenderConfig::from_lookup(lookup_from(&[(
            "JSONAPI_ERRORS_INCLUDE_DEBUG",
            "maybe",
        )]))
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidBool {
                name: "JSONAPI_ERRORS_INCLUDE_DEBUG".to_string(),
                value: "maybe".to_string(),
            }
        );
        assert!(err.to_string().contains("maybe"));
    }

    #[test]
    fn test_empty_content_type() {
        let err = RenderConfig::from_lookup(lookup_from(&[("JSONAPI_ERRORS_CONTENT_TYPE", "  ")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Empty { .. }));
    }
}
