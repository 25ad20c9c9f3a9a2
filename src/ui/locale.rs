//! User-visible strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Language of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl Locale {
    /// Returns the string table for this locale.
    #[must_use]
    pub fn strings(self) -> &'static Strings {
        match self {
            Self::Ru => &RU,
            Self::En => &EN,
        }
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ru" => Ok(Self::Ru),
            "en" => Ok(Self::En),
            other => Err(ConfigError::UnknownLocale(other.to_owned())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ru => "ru",
            Self::En => "en",
        })
    }
}

/// Table of every user-visible string.
#[derive(Debug)]
pub struct Strings {
    pub error_prefix: &'static str,
    pub launch_via_telegram: &'static str,
    pub userbot_not_found: &'static str,
    pub action_failed: &'static str,
    pub servers_load_failed: &'static str,
    pub confirm_delete: &'static str,
    pub action_cancelled: &'static str,

    pub page_home: &'static str,
    pub page_servers: &'static str,
    pub page_profile: &'static str,

    pub label_username: &'static str,
    pub label_status: &'static str,
    pub label_server: &'static str,
    pub label_type: &'static str,
    pub label_path: &'static str,
    pub label_blocked: &'static str,

    pub status_running: &'static str,
    pub status_stopped: &'static str,
    pub status_error: &'static str,
    pub blocked_yes: &'static str,
    pub blocked_no: &'static str,

    pub button_start: &'static str,
    pub button_stop: &'static str,
    pub button_restart: &'static str,
    pub button_delete: &'static str,

    pub server_title: &'static str,
    pub label_disk: &'static str,
    pub label_uptime: &'static str,
    pub servers_loading: &'static str,

    pub label_user_id: &'static str,
    pub label_name: &'static str,
    pub label_language: &'static str,
    pub label_auth_date: &'static str,
    pub no_session: &'static str,
    pub not_available: &'static str,
}

static RU: Strings = Strings {
    error_prefix: "Ошибка",
    launch_via_telegram: "Ошибка: Запустите приложение через Telegram",
    userbot_not_found: "Юзербот не найден",
    action_failed: "Ошибка выполнения действия",
    servers_load_failed: "Ошибка загрузки данных",
    confirm_delete: "Вы уверены, что хотите удалить юзербот?",
    action_cancelled: "Действие отменено",

    page_home: "Главная",
    page_servers: "Серверы",
    page_profile: "Профиль",

    label_username: "Юзернейм",
    label_status: "Статус",
    label_server: "Сервер",
    label_type: "Тип",
    label_path: "Путь",
    label_blocked: "Блокировка",

    status_running: "Запущен",
    status_stopped: "Остановлен",
    status_error: "Ошибка",
    blocked_yes: "Заблокирован",
    blocked_no: "Активен",

    button_start: "Запустить",
    button_stop: "Остановить",
    button_restart: "Перезапустить",
    button_delete: "Удалить",

    server_title: "Сервер",
    label_disk: "Диск",
    label_uptime: "Время работы",
    servers_loading: "Загрузка...",

    label_user_id: "ID",
    label_name: "Имя",
    label_language: "Язык",
    label_auth_date: "Вход",
    no_session: "Сессия Telegram не найдена",
    not_available: "N/A",
};

static EN: Strings = Strings {
    error_prefix: "Error",
    launch_via_telegram: "Error: Launch the app via Telegram",
    userbot_not_found: "Userbot not found",
    action_failed: "Action failed",
    servers_load_failed: "Failed to load data",
    confirm_delete: "Are you sure you want to delete the userbot?",
    action_cancelled: "Action cancelled",

    page_home: "Home",
    page_servers: "Servers",
    page_profile: "Profile",

    label_username: "Username",
    label_status: "Status",
    label_server: "Server",
    label_type: "Type",
    label_path: "Path",
    label_blocked: "Blocking",

    status_running: "Running",
    status_stopped: "Stopped",
    status_error: "Error",
    blocked_yes: "Blocked",
    blocked_no: "Active",

    button_start: "Start",
    button_stop: "Stop",
    button_restart: "Restart",
    button_delete: "Delete",

    server_title: "Server",
    label_disk: "Disk",
    label_uptime: "Uptime",
    servers_loading: "Loading...",

    label_user_id: "ID",
    label_name: "Name",
    label_language: "Language",
    label_auth_date: "Signed in",
    no_session: "No Telegram session",
    not_available: "N/A",
};
