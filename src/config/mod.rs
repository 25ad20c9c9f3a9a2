//! Configuration module for the panel client.
//!
//! Handles loading of the backend location, display preferences,
//! and the Telegram Mini App session token.

mod settings;

pub use settings::{ConfigError, PanelSettings, WebAppConfig};
