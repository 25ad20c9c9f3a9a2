//! Command types and definitions.

use std::fmt;

use crate::api::BotAction;

/// Commands accepted by the panel shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelCommand {
    /// Switch to a page by id.
    Page(String),

    /// Re-fetch bot info and servers status.
    Refresh,

    /// Press one of the lifecycle buttons.
    Action(BotAction),

    /// Render the active page again.
    Show,

    /// Show help information.
    Help,

    /// Leave the shell.
    Quit,
}

impl PanelCommand {
    /// Parses a command from a line of input.
    ///
    /// A leading `/` is optional. Returns `None` if the line is not a
    /// valid command.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let text = text.strip_prefix('/').unwrap_or(text).trim_start();

        let (cmd, args) = match text.split_once(char::is_whitespace) {
            Some((cmd, args)) => (cmd.to_lowercase(), Some(args.trim())),
            None => (text.to_lowercase(), None),
        };

        match cmd.as_str() {
            "page" | "go" | "tab" => args
                .filter(|a| !a.is_empty())
                .map(|a| Self::Page(a.to_owned())),
            "home" | "servers" | "profile" => Some(Self::Page(cmd)),
            "refresh" | "reload" | "r" => Some(Self::Refresh),
            "start" | "run" => Some(Self::Action(BotAction::Start)),
            "stop" => Some(Self::Action(BotAction::Stop)),
            "restart" => Some(Self::Action(BotAction::Restart)),
            "delete" | "remove" | "rm" => Some(Self::Action(BotAction::Delete)),
            "show" | "s" => Some(Self::Show),
            "help" | "h" | "?" => Some(Self::Help),
            "quit" | "exit" | "q" => Some(Self::Quit),
            _ => None,
        }
    }

    /// Returns the command name as it appears in help.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Page(_) => "page",
            Self::Refresh => "refresh",
            Self::Action(action) => action.as_str(),
            Self::Show => "show",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }

    /// Returns all available commands with their aliases and descriptions.
    #[must_use]
    pub fn all_commands() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            ("page <id>", "(go, tab)", "Switch to a page: home, servers, profile"),
            ("home | servers | profile", "", "Shortcut for page <id>"),
            ("refresh", "(r)", "Reload userbot info and servers status"),
            ("start", "", "Start the userbot"),
            ("stop", "", "Stop the userbot"),
            ("restart", "", "Restart the userbot"),
            ("delete", "(rm)", "Delete the userbot (asks for confirmation)"),
            ("show", "(s)", "Show the current page again"),
            ("help", "(h, ?)", "Show this help message"),
            ("quit", "(q, exit)", "Leave the panel"),
        ]
    }
}

impl fmt::Display for PanelCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(id) => write!(f, "page {id}"),
            _ => write!(f, "{}", self.name()),
        }
    }
}

/// Result of command execution.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Whether the command was successful.
    pub success: bool,

    /// Text to show the user.
    pub message: String,

    /// Whether the shell should exit.
    pub quit: bool,
}

impl CommandResult {
    /// Creates a successful result.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            quit: false,
        }
    }

    /// Creates an error result.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            quit: false,
        }
    }

    /// Creates a result that ends the shell.
    #[must_use]
    pub fn quit() -> Self {
        Self {
            success: true,
            message: String::new(),
            quit: true,
        }
    }
}
