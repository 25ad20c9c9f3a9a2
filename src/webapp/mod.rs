//! Telegram Mini App session module.
//!
//! The Telegram client hands the panel an opaque `initData` string that the
//! backend uses to authenticate the user. The [`WebApp`] trait is the only
//! way the rest of the crate reaches that session, so tests can swap in a fake.

mod init_data;

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info};

pub use init_data::{InitData, InitDataError, WebAppUser};

use crate::config::WebAppConfig;

/// Capability exposed by the Telegram Mini App host.
pub trait WebApp: Send + Sync {
    /// Signals the host that the panel has finished loading.
    fn ready(&self);

    /// Returns the session token, or `None` when not launched inside Telegram.
    fn init_data(&self) -> Option<String>;
}

/// [`WebApp`] backed by a session token captured at startup.
#[derive(Debug, Default)]
pub struct StaticWebApp {
    init_data: Option<String>,
    is_ready: AtomicBool,
}

impl StaticWebApp {
    /// Creates a session from an optional raw token. Blank tokens count as absent.
    #[must_use]
    pub fn new(init_data: Option<String>) -> Self {
        Self {
            init_data: init_data.filter(|s| !s.trim().is_empty()),
            is_ready: AtomicBool::new(false),
        }
    }

    /// Creates a session from configuration.
    #[must_use]
    pub fn from_config(config: &WebAppConfig) -> Self {
        let app = Self::new(config.init_data.clone());
        if app.init_data.is_some() {
            debug!("Telegram session token loaded");
        } else {
            debug!("No Telegram session token configured");
        }
        app
    }

    /// Whether [`WebApp::ready`] has been signalled.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.is_ready.load(Ordering::Acquire)
    }
}

impl WebApp for StaticWebApp {
    fn ready(&self) {
        if !self.is_ready.swap(true, Ordering::AcqRel) {
            info!("Telegram WebApp ready");
        }
    }

    fn init_data(&self) -> Option<String> {
        self.init_data.clone()
    }
}
