//! Panel view state.
//!
//! `ViewState` is the whole visible surface of the panel: pages, the bot
//! info/actions/error panels, the action buttons and the servers list.
//! Fetch handlers receive it as `&mut` and apply their outcome to it.

use super::{Navigator, Strings};
use crate::api::{
    ApiError, BotAction, BotStatus, ServerStatus, ServersResponse, UserbotResponse, UserbotStatus,
};
use crate::webapp::InitData;

/// A `label: value` line of the bot info panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoField {
    pub label: &'static str,
    pub value: String,
}

/// Panel showing the userbot record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoPanel {
    pub hidden: bool,
    pub fields: Vec<InfoField>,
}

/// A lifecycle action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionButton {
    pub action: BotAction,
    pub disabled: bool,
}

/// Panel holding the start/stop/restart/delete buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionsPanel {
    pub hidden: bool,
    pub buttons: [ActionButton; 4],
}

impl ActionsPanel {
    /// Returns the button for `action`.
    #[must_use]
    pub fn button(&self, action: BotAction) -> &ActionButton {
        &self.buttons[Self::index(action)]
    }

    fn button_mut(&mut self, action: BotAction) -> &mut ActionButton {
        &mut self.buttons[Self::index(action)]
    }

    const fn index(action: BotAction) -> usize {
        match action {
            BotAction::Start => 0,
            BotAction::Stop => 1,
            BotAction::Restart => 2,
            BotAction::Delete => 3,
        }
    }

    /// Sets button states for the given bot status.
    fn set_for_status(&mut self, status: BotStatus) {
        self.button_mut(BotAction::Start).disabled = status == BotStatus::Running;
        self.button_mut(BotAction::Stop).disabled = status == BotStatus::Stopped;
        self.button_mut(BotAction::Restart).disabled = status != BotStatus::Running;
    }
}

/// Panel showing the last bot-related error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPanel {
    pub hidden: bool,
    pub text: String,
}

/// A host server card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerCard {
    pub title: String,
    pub lines: Vec<String>,
}

/// Contents of the servers list container.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ServersList {
    /// Nothing fetched yet.
    #[default]
    Pending,
    Cards(Vec<ServerCard>),
    Error(String),
}

/// Everything the panel currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub navigator: Navigator,
    pub bot_info: InfoPanel,
    pub bot_actions: ActionsPanel,
    pub bot_error: ErrorPanel,
    pub servers_list: ServersList,
    pub session: Option<InitData>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            navigator: Navigator::default(),
            bot_info: InfoPanel {
                hidden: true,
                fields: Vec::new(),
            },
            bot_actions: ActionsPanel {
                hidden: true,
                buttons: BotAction::ALL.map(|action| ActionButton {
                    action,
                    disabled: false,
                }),
            },
            bot_error: ErrorPanel {
                hidden: true,
                text: String::new(),
            },
            servers_list: ServersList::default(),
            session: None,
        }
    }
}

impl ViewState {
    /// Creates an empty view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `text` in the error panel.
    pub fn show_error(&mut self, text: impl Into<String>) {
        self.bot_error.text = text.into();
        self.bot_error.hidden = false;
    }

    /// Hides the error panel.
    pub fn hide_error(&mut self) {
        self.bot_error.hidden = true;
    }

    /// Shows the "launch via Telegram" error.
    pub fn show_missing_session(&mut self, strings: &Strings) {
        self.show_error(strings.launch_via_telegram);
    }

    /// Shows a transport or parse failure.
    pub fn show_transport_error(&mut self, err: &ApiError, strings: &Strings) {
        self.show_error(error_text(err, strings));
    }

    /// Applies the outcome of a bot info fetch.
    pub fn apply_userbot(&mut self, result: Result<UserbotResponse, ApiError>, strings: &Strings) {
        match result {
            Ok(UserbotResponse {
                success: true,
                userbot: Some(userbot),
                ..
            }) => {
                self.bot_info.fields = info_fields(&userbot, strings);
                self.bot_info.hidden = false;
                self.bot_actions.hidden = false;
                self.hide_error();
                self.bot_actions.set_for_status(userbot.status);
            }
            Ok(response) => {
                self.bot_info.hidden = true;
                self.bot_actions.hidden = true;
                self.show_error(
                    response
                        .message
                        .unwrap_or_else(|| strings.userbot_not_found.to_owned()),
                );
            }
            Err(e) => self.show_transport_error(&e, strings),
        }
    }

    /// Applies the outcome of a servers status fetch. Always replaces the list.
    pub fn apply_servers(&mut self, result: Result<ServersResponse, ApiError>, strings: &Strings) {
        self.servers_list = match result {
            Ok(ServersResponse {
                success: true,
                servers: Some(servers),
                ..
            }) if !servers.is_empty() => {
                ServersList::Cards(servers.iter().map(|s| server_card(s, strings)).collect())
            }
            Ok(response) => ServersList::Error(
                response
                    .message
                    .unwrap_or_else(|| strings.servers_load_failed.to_owned()),
            ),
            Err(e) => ServersList::Error(error_text(&e, strings)),
        };
    }
}

/// Formats an API error for display.
#[must_use]
pub fn error_text(err: &ApiError, strings: &Strings) -> String {
    format!("{}: {err}", strings.error_prefix)
}

fn info_fields(userbot: &UserbotStatus, strings: &Strings) -> Vec<InfoField> {
    let status = match userbot.status {
        BotStatus::Running => strings.status_running,
        BotStatus::Stopped => strings.status_stopped,
        BotStatus::Error => strings.status_error,
    };
    let blocked = if userbot.blocked {
        strings.blocked_yes
    } else {
        strings.blocked_no
    };
    let or_na = |v: &Option<String>| {
        v.clone()
            .unwrap_or_else(|| strings.not_available.to_owned())
    };

    vec![
        InfoField {
            label: strings.label_username,
            value: format!("@{}", userbot.ub_username),
        },
        InfoField {
            label: strings.label_status,
            value: status.to_owned(),
        },
        InfoField {
            label: strings.label_server,
            value: userbot.server_ip.clone(),
        },
        InfoField {
            label: strings.label_type,
            value: or_na(&userbot.ub_type),
        },
        InfoField {
            label: strings.label_path,
            value: or_na(&userbot.hikka_path),
        },
        InfoField {
            label: strings.label_blocked,
            value: blocked.to_owned(),
        },
    ]
}

fn server_card(server: &ServerStatus, strings: &Strings) -> ServerCard {
    let s = &server.stats;
    ServerCard {
        title: format!("{}: {}", strings.server_title, server.ip),
        lines: vec![
            format!("CPU: {}%", s.cpu_usage),
            format!("RAM: {} / {} ({}%)", s.ram_used, s.ram_total, s.ram_percent),
            format!(
                "{}: {} / {} ({})",
                strings.label_disk, s.disk_used, s.disk_total, s.disk_percent
            ),
            format!("{}: {}", strings.label_uptime, s.uptime),
        ],
    }
}
