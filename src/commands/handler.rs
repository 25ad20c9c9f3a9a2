//! Command handler implementation.

use std::sync::Arc;

use tracing::{debug, info};

use super::types::{CommandResult, PanelCommand};
use crate::api::{BotAction, PanelApi};
use crate::controller::{ActionOutcome, Confirm, PanelController};
use crate::ui::{Page, Renderer};
use crate::webapp::WebApp;

/// Executes shell commands against the panel controller.
pub struct CommandHandler<A, W, C> {
    controller: Arc<PanelController<A, W, C>>,
    renderer: Renderer,
}

impl<A, W, C> CommandHandler<A, W, C>
where
    A: PanelApi,
    W: WebApp,
    C: Confirm,
{
    /// Creates a new command handler.
    #[must_use]
    pub fn new(controller: Arc<PanelController<A, W, C>>, renderer: Renderer) -> Self {
        Self {
            controller,
            renderer,
        }
    }

    /// Tries to parse and execute a command from a line of input.
    ///
    /// Returns `None` if the line is not a command.
    pub async fn try_handle(&self, line: &str) -> Option<CommandResult> {
        let command = PanelCommand::parse(line)?;

        debug!("Handling command: {}", command);
        let result = self.execute(command).await;
        info!(
            "Command result: success={}, quit={}",
            result.success, result.quit
        );

        Some(result)
    }

    /// Executes a parsed command.
    pub async fn execute(&self, command: PanelCommand) -> CommandResult {
        match command {
            PanelCommand::Page(id) => self.handle_page(&id).await,
            PanelCommand::Refresh => self.handle_refresh().await,
            PanelCommand::Action(action) => self.handle_action(action).await,
            PanelCommand::Show => CommandResult::success(self.render().await),
            PanelCommand::Help => Self::handle_help(),
            PanelCommand::Quit => CommandResult::quit(),
        }
    }

    /// Renders the active page.
    pub async fn render(&self) -> String {
        let view = self.controller.view().read().await;
        self.renderer.render(&view)
    }

    async fn handle_page(&self, id: &str) -> CommandResult {
        self.controller.switch_page(id).await;
        let page = self.render().await;

        if id.parse::<Page>().is_ok() {
            CommandResult::success(page)
        } else {
            CommandResult::error(page)
        }
    }

    async fn handle_refresh(&self) -> CommandResult {
        self.controller.fetch_bot_info().await;
        self.controller.fetch_servers_status().await;
        CommandResult::success(self.render().await)
    }

    async fn handle_action(&self, action: BotAction) -> CommandResult {
        // Action buttons live on the home page.
        self.controller.switch_page(Page::Home.id()).await;

        let outcome = self.controller.request_action(action).await;
        let page = self.render().await;

        match outcome {
            ActionOutcome::Accepted => CommandResult::success(page),
            ActionOutcome::Declined => {
                CommandResult::error(self.controller.strings().action_cancelled)
            }
            ActionOutcome::NoSession | ActionOutcome::Failed => CommandResult::error(page),
        }
    }

    fn handle_help() -> CommandResult {
        let mut lines = vec!["Panel commands:".to_owned(), String::new()];

        for (cmd, aliases, desc) in PanelCommand::all_commands() {
            let alias_str = if aliases.is_empty() {
                String::new()
            } else {
                format!(" {aliases}")
            };
            lines.push(format!("  {cmd}{alias_str} - {desc}"));
        }

        CommandResult::success(lines.join("\n"))
    }
}
