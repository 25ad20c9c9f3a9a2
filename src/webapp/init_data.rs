//! Parsing of the Telegram `initData` query string.
//!
//! The panel only reads these fields for display. Signature verification
//! needs the bot token and is done by the backend.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while parsing `initData`.
#[derive(Debug, Error)]
pub enum InitDataError {
    #[error("initData is empty")]
    Empty,

    #[error("initData has no 'user' field")]
    MissingUser,

    #[error("initData 'user' field is not valid JSON: {0}")]
    InvalidUser(#[from] serde_json::Error),
}

/// Telegram user the Mini App session belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WebAppUser {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
}

impl WebAppUser {
    /// Returns the user's full display name.
    #[must_use]
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last) if !last.is_empty() => format!("{} {last}", self.first_name),
            _ => self.first_name.clone(),
        }
    }
}

/// Decoded view of an `initData` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitData {
    pub user: WebAppUser,
    pub auth_date: Option<DateTime<Utc>>,
    pub query_id: Option<String>,
    pub hash: Option<String>,
}

impl InitData {
    /// Parses a URL-encoded `initData` string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty or carries no readable user.
    pub fn parse(raw: &str) -> Result<Self, InitDataError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(InitDataError::Empty);
        }

        let mut user = None;
        let mut auth_date = None;
        let mut query_id = None;
        let mut hash = None;

        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                "user" => user = Some(serde_json::from_str::<WebAppUser>(&value)?),
                "auth_date" => {
                    auth_date = value
                        .parse::<i64>()
                        .ok()
                        .and_then(|secs| DateTime::from_timestamp(secs, 0));
                }
                "query_id" => query_id = Some(value.into_owned()),
                "hash" => hash = Some(value.into_owned()),
                _ => {}
            }
        }

        Ok(Self {
            user: user.ok_or(InitDataError::MissingUser)?,
            auth_date,
            query_id,
            hash,
        })
    }
}
