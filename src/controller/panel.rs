//! Panel controller.
//!
//! Every operation follows the same cycle:
//! 1. Issue a request token for its resource
//! 2. Read the session token (fail fast without it)
//! 3. Call the backend with no locks held
//! 4. Take the view lock and apply the outcome, unless a newer request
//!    for the same resource was issued meanwhile
//!
//! Failures never escape: they end up as text in the view.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::{Confirm, RequestSequencer};
use crate::api::{BotAction, PanelApi};
use crate::ui::{Page, Strings, ViewState};
use crate::webapp::{InitData, WebApp};

/// Result of a lifecycle button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The user declined the confirmation; nothing was sent.
    Declined,
    /// No session token; nothing was sent.
    NoSession,
    /// The backend accepted the command.
    Accepted,
    /// The backend rejected the command or could not be reached.
    Failed,
}

impl ActionOutcome {
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Drives the panel: navigation, fetches and lifecycle commands.
pub struct PanelController<A, W, C> {
    api: A,
    webapp: W,
    confirm: C,
    strings: &'static Strings,
    view: Arc<RwLock<ViewState>>,
    bot_requests: RequestSequencer,
    manage_requests: RequestSequencer,
    servers_requests: RequestSequencer,
}

impl<A, W, C> PanelController<A, W, C>
where
    A: PanelApi,
    W: WebApp,
    C: Confirm,
{
    /// Creates a controller with an empty view.
    #[must_use]
    pub fn new(api: A, webapp: W, confirm: C, strings: &'static Strings) -> Self {
        Self {
            api,
            webapp,
            confirm,
            strings,
            view: Arc::new(RwLock::new(ViewState::new())),
            bot_requests: RequestSequencer::new(),
            manage_requests: RequestSequencer::new(),
            servers_requests: RequestSequencer::new(),
        }
    }

    /// Returns the shared view state.
    #[must_use]
    pub fn view(&self) -> &Arc<RwLock<ViewState>> {
        &self.view
    }

    /// Returns a copy of the current view.
    pub async fn snapshot(&self) -> ViewState {
        self.view.read().await.clone()
    }

    /// Returns the string table in use.
    #[must_use]
    pub const fn strings(&self) -> &'static Strings {
        self.strings
    }

    /// Startup sequence: signal readiness, open the home page, load everything.
    pub async fn start(&self) {
        self.webapp.ready();

        {
            let mut view = self.view.write().await;
            view.session = self
                .webapp
                .init_data()
                .and_then(|raw| InitData::parse(&raw).ok());
            view.navigator.switch_page(Page::Home.id());
        }

        self.fetch_bot_info().await;
        self.fetch_servers_status().await;
    }

    /// Switches to the page with the given id.
    pub async fn switch_page(&self, page_id: &str) {
        debug!("Switching to page '{}'", page_id);
        self.view.write().await.navigator.switch_page(page_id);
    }

    /// Handles a click on the nav button at `index`.
    pub async fn click_nav(&self, index: usize) -> Option<String> {
        self.view.write().await.navigator.click(index)
    }

    /// Fetches the user's userbot and renders it.
    pub async fn fetch_bot_info(&self) {
        let token = self.bot_requests.issue();

        let Some(init_data) = self.session_token() else {
            warn!("Not launched via Telegram, skipping userbot fetch");
            let mut view = self.view.write().await;
            if self.bot_requests.is_current(token) {
                view.show_missing_session(self.strings);
            }
            return;
        };

        let result = self.api.get_userbot(&init_data).await;
        match &result {
            Ok(response) if response.success && response.userbot.is_some() => {
                debug!("Userbot fetched");
            }
            Ok(response) => info!(
                "Userbot not available: {}",
                response.message.as_deref().unwrap_or("no message")
            ),
            Err(e) => warn!("Failed to fetch userbot: {}", e),
        }

        let mut view = self.view.write().await;
        if !self.bot_requests.is_current(token) {
            debug!("Discarding stale userbot response");
            return;
        }
        view.apply_userbot(result, self.strings);
    }

    /// Sends a lifecycle command and refreshes the bot info on success.
    pub async fn manage_bot(&self, action: BotAction) -> ActionOutcome {
        let token = self.manage_requests.issue();

        let Some(init_data) = self.session_token() else {
            warn!("Not launched via Telegram, not sending '{}'", action);
            let mut view = self.view.write().await;
            if self.manage_requests.is_current(token) {
                view.show_missing_session(self.strings);
            }
            return ActionOutcome::NoSession;
        };

        info!("Sending '{}' command", action);

        match self.api.manage_userbot(&init_data, action).await {
            Ok(response) if response.success => {
                info!("Command '{}' accepted", action);
                self.fetch_bot_info().await;

                let mut view = self.view.write().await;
                if self.manage_requests.is_current(token) {
                    view.hide_error();
                }
                ActionOutcome::Accepted
            }
            Ok(response) => {
                warn!(
                    "Command '{}' rejected: {}",
                    action,
                    response.message.as_deref().unwrap_or("no message")
                );
                let mut view = self.view.write().await;
                if self.manage_requests.is_current(token) {
                    view.show_error(
                        response
                            .message
                            .unwrap_or_else(|| self.strings.action_failed.to_owned()),
                    );
                }
                ActionOutcome::Failed
            }
            Err(e) => {
                warn!("Command '{}' failed: {}", action, e);
                let mut view = self.view.write().await;
                if self.manage_requests.is_current(token) {
                    view.show_transport_error(&e, self.strings);
                }
                ActionOutcome::Failed
            }
        }
    }

    /// Handles a press of an action button; `delete` asks for confirmation first.
    pub async fn request_action(&self, action: BotAction) -> ActionOutcome {
        if action.needs_confirmation() && !self.confirm.confirm(self.strings.confirm_delete) {
            info!("'{}' cancelled by user", action);
            return ActionOutcome::Declined;
        }
        self.manage_bot(action).await
    }

    /// Fetches host server statistics and replaces the servers list.
    pub async fn fetch_servers_status(&self) {
        let token = self.servers_requests.issue();

        let result = self.api.get_servers_status().await;
        match &result {
            Ok(response) => debug!(
                "Servers status fetched: success={}, servers={}",
                response.success,
                response.servers.as_ref().map_or(0, Vec::len)
            ),
            Err(e) => warn!("Failed to fetch servers status: {}", e),
        }

        let mut view = self.view.write().await;
        if !self.servers_requests.is_current(token) {
            debug!("Discarding stale servers response");
            return;
        }
        view.apply_servers(result, self.strings);
    }

    fn session_token(&self) -> Option<String> {
        self.webapp.init_data().filter(|s| !s.is_empty())
    }
}

impl<A, W, C> std::fmt::Debug for PanelController<A, W, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelController")
            .field("bot_requests", &self.bot_requests)
            .field("servers_requests", &self.servers_requests)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tokio::sync::oneshot;

    use super::*;
    use crate::api::{ApiError, ManageResponse, ServersResponse, UserbotResponse};
    use crate::controller::AutoConfirm;
    use crate::testing::{FakeApi, FakeWebApp};
    use crate::ui::{Locale, ServersList};

    type TestController = PanelController<Arc<FakeApi>, FakeWebApp, AutoConfirm>;

    fn controller(session: Option<&str>, confirm: bool) -> (TestController, Arc<FakeApi>) {
        let api = Arc::new(FakeApi::default());
        let controller = PanelController::new(
            Arc::clone(&api),
            FakeWebApp::with_token(session),
            AutoConfirm(confirm),
            Locale::Ru.strings(),
        );
        (controller, api)
    }

    fn userbot(status: &str) -> UserbotResponse {
        serde_json::from_value(json!({
            "success": true,
            "userbot": {
                "ub_username": "ub42",
                "status": status,
                "server_ip": "10.0.0.1",
                "ub_type": "hikka",
                "hikka_path": "/home/ub42/Hikka",
                "blocked": false
            }
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_missing_session_makes_no_call() {
        let (controller, api) = controller(None, true);
        controller.fetch_bot_info().await;

        assert!(api.calls().is_empty());
        let view = controller.snapshot().await;
        assert!(!view.bot_error.hidden);
        assert_eq!(
            view.bot_error.text,
            "Ошибка: Запустите приложение через Telegram"
        );
    }

    #[tokio::test]
    async fn test_empty_session_makes_no_call() {
        let (controller, api) = controller(Some(""), true);
        assert_eq!(
            controller.manage_bot(BotAction::Start).await,
            ActionOutcome::NoSession
        );
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_startup_sequence() {
        let (controller, api) = controller(Some("hash=abc"), true);
        api.userbot.lock().unwrap().push_back(Ok(userbot("running")));

        controller.start().await;

        assert!(controller.webapp.is_ready());
        assert_eq!(
            api.calls(),
            vec!["get_userbot:hash=abc".to_owned(), "get_servers_status".to_owned()]
        );
        let view = controller.snapshot().await;
        assert_eq!(view.navigator.active_page(), Some("home"));
        assert_eq!(view.navigator.active_button(), Some("home"));
        assert!(!view.bot_info.hidden);
        assert!(view.session.is_none());
    }

    #[tokio::test]
    async fn test_successful_action_refetches_info() {
        let (controller, api) = controller(Some("hash=abc"), true);
        {
            let mut queue = api.userbot.lock().unwrap();
            queue.push_back(Ok(userbot("stopped")));
            queue.push_back(Ok(userbot("running")));
        }
        api.manage.lock().unwrap().push_back(Ok(ManageResponse {
            success: true,
            message: None,
        }));

        controller.fetch_bot_info().await;
        let outcome = controller.request_action(BotAction::Start).await;

        assert_eq!(outcome, ActionOutcome::Accepted);
        assert_eq!(api.count("get_userbot"), 2);
        assert_eq!(api.count("manage_userbot:start"), 1);

        let view = controller.snapshot().await;
        assert!(view.bot_error.hidden);
        assert!(view.bot_actions.button(BotAction::Start).disabled);
    }

    #[tokio::test]
    async fn test_rejected_action_shows_message() {
        let (controller, api) = controller(Some("hash=abc"), true);
        api.manage.lock().unwrap().push_back(Ok(ManageResponse {
            success: false,
            message: Some("Сервер недоступен".to_owned()),
        }));

        let outcome = controller.manage_bot(BotAction::Restart).await;

        assert_eq!(outcome, ActionOutcome::Failed);
        assert_eq!(api.count("get_userbot"), 0);
        let view = controller.snapshot().await;
        assert_eq!(view.bot_error.text, "Сервер недоступен");
    }

    #[tokio::test]
    async fn test_rejected_action_default_message() {
        let (controller, _api) = controller(Some("hash=abc"), true);
        controller.manage_bot(BotAction::Stop).await;
        assert_eq!(
            controller.snapshot().await.bot_error.text,
            "Ошибка выполнения действия"
        );
    }

    #[tokio::test]
    async fn test_action_transport_error() {
        let (controller, api) = controller(Some("hash=abc"), true);
        api.manage
            .lock()
            .unwrap()
            .push_back(Err(ApiError::Transport("connection reset".to_owned())));

        controller.manage_bot(BotAction::Stop).await;
        assert_eq!(
            controller.snapshot().await.bot_error.text,
            "Ошибка: connection reset"
        );
    }

    #[tokio::test]
    async fn test_delete_declined_sends_nothing() {
        let (controller, api) = controller(Some("hash=abc"), false);
        let outcome = controller.request_action(BotAction::Delete).await;

        assert_eq!(outcome, ActionOutcome::Declined);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_delete_confirmed_sends_once() {
        let (controller, api) = controller(Some("hash=abc"), true);
        controller.request_action(BotAction::Delete).await;

        assert_eq!(api.count("manage_userbot"), 1);
        assert_eq!(api.count("manage_userbot:delete"), 1);
    }

    #[tokio::test]
    async fn test_other_actions_skip_confirmation() {
        let (controller, api) = controller(Some("hash=abc"), false);
        controller.request_action(BotAction::Stop).await;
        assert_eq!(api.count("manage_userbot:stop"), 1);
    }

    #[tokio::test]
    async fn test_stale_userbot_response_is_discarded() {
        let (controller, api) = controller(Some("hash=abc"), true);
        let (tx_first, rx_first) = oneshot::channel();
        let (tx_second, rx_second) = oneshot::channel();
        {
            let mut gates = api.gated_userbot.lock().unwrap();
            gates.push_back(rx_first);
            gates.push_back(rx_second);
        }

        tokio::join!(
            controller.fetch_bot_info(),
            controller.fetch_bot_info(),
            async {
                tx_second.send(userbot("stopped")).unwrap();
                tokio::task::yield_now().await;
                tx_first.send(userbot("running")).unwrap();
            },
        );

        assert_eq!(api.count("get_userbot"), 2);
        let view = controller.snapshot().await;
        assert!(view.bot_actions.button(BotAction::Stop).disabled);
        assert!(!view.bot_actions.button(BotAction::Start).disabled);
    }

    #[tokio::test]
    async fn test_stale_servers_response_is_discarded() {
        let (controller, api) = controller(None, true);
        let (tx_first, rx_first) = oneshot::channel();
        let (tx_second, rx_second) = oneshot::channel();
        {
            let mut gates = api.gated_servers.lock().unwrap();
            gates.push_back(rx_first);
            gates.push_back(rx_second);
        }

        let servers = |ip: &str| -> ServersResponse {
            serde_json::from_value(json!({
                "success": true,
                "servers": [{ "ip": ip, "stats": {} }]
            }))
            .unwrap()
        };

        tokio::join!(
            controller.fetch_servers_status(),
            controller.fetch_servers_status(),
            async {
                tx_second.send(servers("2.2.2.2")).unwrap();
                tokio::task::yield_now().await;
                tx_first.send(servers("1.1.1.1")).unwrap();
            },
        );

        assert_eq!(api.count("get_servers_status"), 2);
        let ServersList::Cards(cards) = controller.snapshot().await.servers_list else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Сервер: 2.2.2.2");
    }

    #[tokio::test]
    async fn test_servers_fetch_renders_cards() {
        let (controller, api) = controller(None, true);
        api.servers.lock().unwrap().push_back(Ok(serde_json::from_value(json!({
            "success": true,
            "servers": [
                { "ip": "1.2.3.4", "stats": { "cpu_usage": 10 } },
                { "ip": "5.6.7.8", "stats": { "cpu_usage": "N/A" } }
            ]
        }))
        .unwrap()));

        controller.fetch_servers_status().await;

        let ServersList::Cards(cards) = controller.snapshot().await.servers_list else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "Сервер: 1.2.3.4");
        assert_eq!(cards[1].lines[0], "CPU: N/A%");
    }

    #[tokio::test]
    async fn test_click_nav_switches_page() {
        let (controller, _api) = controller(None, true);
        assert_eq!(controller.click_nav(1).await.as_deref(), Some("servers"));

        let view = controller.snapshot().await;
        assert_eq!(view.navigator.active_page(), Some("servers"));
        assert_eq!(view.navigator.active_button(), Some("servers"));
    }
}
