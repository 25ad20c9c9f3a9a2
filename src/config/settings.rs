//! Panel settings and Telegram session configuration.

use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

use crate::ui::Locale;

/// Telegram Mini App session configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebAppConfig {
    /// Raw `initData` string handed over by the Telegram client.
    ///
    /// `None` when the panel was not launched through Telegram.
    #[serde(default)]
    pub init_data: Option<String>,
}

impl WebAppConfig {
    /// Creates a session configuration from a raw `initData` string.
    #[must_use]
    pub fn new(init_data: impl Into<String>) -> Self {
        Self {
            init_data: Some(init_data.into()),
        }
    }

    /// Creates configuration from environment variables.
    ///
    /// Reads `TG_INIT_DATA`; a missing or blank value leaves the session empty.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            init_data: std::env::var("TG_INIT_DATA")
                .ok()
                .filter(|s| !s.trim().is_empty()),
        }
    }
}

/// Panel client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelSettings {
    /// Base URL of the panel backend (`/get_userbot` etc. are resolved against it).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Language of user-visible strings.
    #[serde(default)]
    pub locale: Locale,

    /// Whether rendered pages use ANSI colours.
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_owned()
}

const fn default_color() -> bool {
    true
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            locale: Locale::default(),
            color: default_color(),
        }
    }
}

impl PanelSettings {
    /// Creates panel settings from environment variables with defaults.
    #[must_use]
    pub fn from_env_with_defaults() -> Self {
        Self {
            base_url: std::env::var("PANEL_BASE_URL").unwrap_or_else(|_| default_base_url()),
            locale: locale_or_default(std::env::var("PANEL_LOCALE").ok()),
            color: std::env::var("PANEL_COLOR")
                .ok()
                .and_then(|s| parse_bool(&s))
                .unwrap_or_else(default_color),
        }
    }

    /// Parses and validates the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed or not http(s).
    pub fn parsed_base_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| ConfigError::InvalidBaseUrl(format!("{}: {e}", self.base_url)))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::InvalidBaseUrl(format!(
                "unsupported scheme '{other}' in {}",
                self.base_url
            ))),
        }
    }
}

fn locale_or_default(value: Option<String>) -> Locale {
    let Some(value) = value else {
        return Locale::default();
    };
    value.parse::<Locale>().unwrap_or_else(|e| {
        warn!("{}, using '{}'", e, Locale::default());
        Locale::default()
    })
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid panel base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Unknown locale '{0}' (expected 'ru' or 'en')")]
    UnknownLocale(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = PanelSettings::default();
        assert_eq!(settings.base_url, "http://127.0.0.1:8000");
        assert_eq!(settings.locale, Locale::Ru);
        assert!(settings.color);
    }

    #[test]
    fn test_webapp_config_new() {
        let config = WebAppConfig::new("query_id=abc&hash=def");
        assert_eq!(config.init_data.as_deref(), Some("query_id=abc&hash=def"));
    }

    #[test]
    fn test_parsed_base_url_accepts_http() {
        let settings = PanelSettings {
            base_url: "https://panel.example.com/app/".to_owned(),
            ..PanelSettings::default()
        };
        let url = settings.parsed_base_url().unwrap();
        assert_eq!(url.host_str(), Some("panel.example.com"));
    }

    #[test]
    fn test_parsed_base_url_rejects_garbage() {
        let settings = PanelSettings {
            base_url: "not a url".to_owned(),
            ..PanelSettings::default()
        };
        assert!(settings.parsed_base_url().is_err());

        let settings = PanelSettings {
            base_url: "ftp://panel.example.com".to_owned(),
            ..PanelSettings::default()
        };
        assert!(matches!(
            settings.parsed_base_url(),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_locale_from_env_value() {
        assert_eq!(locale_or_default(None), Locale::Ru);
        assert_eq!(locale_or_default(Some("en".to_owned())), Locale::En);
        assert_eq!(locale_or_default(Some("de".to_owned())), Locale::Ru);
        assert!(matches!(
            "de".parse::<Locale>(),
            Err(ConfigError::UnknownLocale(_))
        ));
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("yes"), Some(true));
        assert_eq!(parse_bool(" OFF "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
