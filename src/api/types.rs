//! Request and response types of the panel backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state reported for a userbot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum BotStatus {
    Running,
    Stopped,
    /// Any state other than running or stopped, including a null or missing one.
    #[default]
    Error,
}

impl BotStatus {
    /// Returns the wire name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Stopped => "stopped",
            Self::Error => "error",
        }
    }
}

impl From<Option<String>> for BotStatus {
    fn from(s: Option<String>) -> Self {
        match s.as_deref() {
            Some("running") => Self::Running,
            Some("stopped") => Self::Stopped,
            _ => Self::Error,
        }
    }
}

impl From<BotStatus> for String {
    fn from(status: BotStatus) -> Self {
        status.as_str().to_owned()
    }
}

/// Current state of the user's userbot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserbotStatus {
    pub ub_username: String,

    #[serde(default)]
    pub status: BotStatus,

    #[serde(default)]
    pub server_ip: String,

    /// Userbot flavour (`hikka`, `heroku`, `fox`, `legacy`).
    #[serde(default)]
    pub ub_type: Option<String>,

    /// Installation path on the host server.
    #[serde(default)]
    pub hikka_path: Option<String>,

    #[serde(default)]
    pub blocked: bool,
}

/// A single server statistic as reported by the backend.
///
/// The backend mixes numbers and preformatted strings (`"1.5G"`, `"50%"`,
/// `"N/A"`), so values are kept as-is and displayed verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(serde_json::Number),
    Text(String),
    #[default]
    Missing,
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Missing => f.write_str("N/A"),
        }
    }
}

impl From<&str> for StatValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<u64> for StatValue {
    fn from(n: u64) -> Self {
        Self::Number(n.into())
    }
}

/// Resource usage of one host server.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServerStats {
    #[serde(default)]
    pub cpu_usage: StatValue,
    #[serde(default)]
    pub ram_used: StatValue,
    #[serde(default)]
    pub ram_total: StatValue,
    #[serde(default)]
    pub ram_percent: StatValue,
    #[serde(default)]
    pub disk_used: StatValue,
    #[serde(default)]
    pub disk_total: StatValue,
    #[serde(default)]
    pub disk_percent: StatValue,
    #[serde(default)]
    pub uptime: StatValue,
}

/// A host server entry of the servers list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerStatus {
    pub ip: String,

    #[serde(default)]
    pub stats: ServerStats,
}

/// Lifecycle command for the userbot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotAction {
    Start,
    Stop,
    Restart,
    Delete,
}

impl BotAction {
    /// All actions in button order.
    pub const ALL: [Self; 4] = [Self::Start, Self::Stop, Self::Restart, Self::Delete];

    /// Returns the wire name of the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Restart => "restart",
            Self::Delete => "delete",
        }
    }

    /// Whether the action must be confirmed by the user before it is sent.
    #[must_use]
    pub const fn needs_confirmation(self) -> bool {
        matches!(self, Self::Delete)
    }
}

impl fmt::Display for BotAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /get_userbot`.
#[derive(Debug, Clone, Serialize)]
pub struct UserbotRequest<'a> {
    #[serde(rename = "initData")]
    pub init_data: &'a str,
}

/// Body of `POST /manage_userbot`.
#[derive(Debug, Clone, Serialize)]
pub struct ManageRequest<'a> {
    #[serde(rename = "initData")]
    pub init_data: &'a str,
    pub action: BotAction,
}

/// Response of `POST /get_userbot`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserbotResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub userbot: Option<UserbotStatus>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `POST /manage_userbot`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ManageResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `GET /get_servers_status`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServersResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub servers: Option<Vec<ServerStatus>>,
    #[serde(default)]
    pub message: Option<String>,
}
