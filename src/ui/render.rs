//! Terminal rendering of the view state.

use std::fmt::Write as _;

use crossterm::style::Stylize;

use super::view::{ActionButton, ServersList, ViewState};
use super::{Page, Strings};
use crate::api::BotAction;

/// Renders views to terminal text.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    strings: &'static Strings,
    color: bool,
}

impl Renderer {
    #[must_use]
    pub const fn new(strings: &'static Strings, color: bool) -> Self {
        Self { strings, color }
    }

    /// Renders the nav bar followed by the active page.
    #[must_use]
    pub fn render(&self, view: &ViewState) -> String {
        let mut out = self.nav_bar(view);
        out.push('\n');

        match view.navigator.active_page().and_then(|id| id.parse::<Page>().ok()) {
            Some(Page::Home) => self.home(view, &mut out),
            Some(Page::Servers) => self.servers(view, &mut out),
            Some(Page::Profile) => self.profile(view, &mut out),
            None => {}
        }

        out
    }

    fn nav_bar(&self, view: &ViewState) -> String {
        let mut parts = Vec::with_capacity(view.navigator.buttons().len());
        for button in view.navigator.buttons() {
            let title = button
                .page
                .parse::<Page>()
                .map_or(button.page.as_str(), |p| p.title(self.strings));
            if button.active {
                parts.push(self.paint_active(&format!("[{title}]")));
            } else {
                parts.push(format!(" {title} "));
            }
        }
        let bar = parts.join(" ");
        let rule = "─".repeat(bar.chars().count().max(24));
        format!("{bar}\n{}", self.paint_dim(&rule))
    }

    fn home(&self, view: &ViewState, out: &mut String) {
        if !view.bot_info.hidden {
            for field in &view.bot_info.fields {
                let _ = writeln!(out, "{}: {}", self.paint_bold(field.label), field.value);
            }
        }

        if !view.bot_actions.hidden {
            let buttons: Vec<String> = view
                .bot_actions
                .buttons
                .iter()
                .map(|b| self.button(b))
                .collect();
            let _ = writeln!(out, "\n{}", buttons.join("  "));
        }

        if !view.bot_error.hidden {
            let _ = writeln!(out, "{}", self.paint_error(&view.bot_error.text));
        }
    }

    fn servers(&self, view: &ViewState, out: &mut String) {
        match &view.servers_list {
            ServersList::Pending => {
                let _ = writeln!(out, "{}", self.paint_dim(self.strings.servers_loading));
            }
            ServersList::Cards(cards) => {
                for (i, card) in cards.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    let _ = writeln!(out, "{}", self.paint_bold(&card.title));
                    for line in &card.lines {
                        let _ = writeln!(out, "  {line}");
                    }
                }
            }
            ServersList::Error(message) => {
                let _ = writeln!(out, "{}", self.paint_error(message));
            }
        }
    }

    fn profile(&self, view: &ViewState, out: &mut String) {
        let s = self.strings;
        let Some(session) = &view.session else {
            let _ = writeln!(out, "{}", self.paint_dim(s.no_session));
            return;
        };

        let user = &session.user;
        let username = user
            .username
            .as_ref()
            .map_or_else(|| s.not_available.to_owned(), |u| format!("@{u}"));
        let language = user.language_code.as_deref().unwrap_or(s.not_available);
        let auth_date = session.auth_date.map_or_else(
            || s.not_available.to_owned(),
            |d| d.format("%Y-%m-%d %H:%M UTC").to_string(),
        );

        let _ = writeln!(out, "{}: {}", self.paint_bold(s.label_user_id), user.id);
        let _ = writeln!(out, "{}: {}", self.paint_bold(s.label_name), user.full_name());
        let _ = writeln!(out, "{}: {username}", self.paint_bold(s.label_username));
        let _ = writeln!(out, "{}: {language}", self.paint_bold(s.label_language));
        let _ = writeln!(out, "{}: {auth_date}", self.paint_bold(s.label_auth_date));
    }

    fn button(&self, button: &ActionButton) -> String {
        let label = match button.action {
            BotAction::Start => self.strings.button_start,
            BotAction::Stop => self.strings.button_stop,
            BotAction::Restart => self.strings.button_restart,
            BotAction::Delete => self.strings.button_delete,
        };
        if button.disabled {
            self.paint_dim(&format!("({label})"))
        } else {
            format!("[{label}]")
        }
    }

    fn paint_active(&self, text: &str) -> String {
        if self.color {
            text.bold().cyan().to_string()
        } else {
            text.to_owned()
        }
    }

    fn paint_bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_owned()
        }
    }

    fn paint_dim(&self, text: &str) -> String {
        if self.color {
            text.dim().to_string()
        } else {
            text.to_owned()
        }
    }

    fn paint_error(&self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text.to_owned()
        }
    }
}
