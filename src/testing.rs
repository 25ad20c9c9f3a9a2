//! In-memory fakes of the backend and the Telegram session for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::api::{
    ApiError, BotAction, ManageResponse, PanelApi, ServersResponse, UserbotResponse,
};
use crate::webapp::WebApp;

/// Backend fake that records calls and replays queued responses.
///
/// Empty queues answer with an unsuccessful response. Gated responses
/// block until the test sends through the matching channel.
#[derive(Default)]
pub struct FakeApi {
    pub calls: Mutex<Vec<String>>,
    pub userbot: Mutex<VecDeque<Result<UserbotResponse, ApiError>>>,
    pub gated_userbot: Mutex<VecDeque<oneshot::Receiver<UserbotResponse>>>,
    pub manage: Mutex<VecDeque<Result<ManageResponse, ApiError>>>,
    pub servers: Mutex<VecDeque<Result<ServersResponse, ApiError>>>,
    pub gated_servers: Mutex<VecDeque<oneshot::Receiver<ServersResponse>>>,
}

impl FakeApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of recorded calls starting with `name`.
    pub fn count(&self, name: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(name)).count()
    }
}

#[async_trait]
impl PanelApi for FakeApi {
    async fn get_userbot(&self, init_data: &str) -> Result<UserbotResponse, ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("get_userbot:{init_data}"));

        let gate = self.gated_userbot.lock().unwrap().pop_front();
        if let Some(rx) = gate {
            return rx
                .await
                .map_err(|_| ApiError::Transport("gate dropped".to_owned()));
        }

        self.userbot
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(UserbotResponse::default()))
    }

    async fn manage_userbot(
        &self,
        _init_data: &str,
        action: BotAction,
    ) -> Result<ManageResponse, ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("manage_userbot:{action}"));
        self.manage
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ManageResponse::default()))
    }

    async fn get_servers_status(&self) -> Result<ServersResponse, ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push("get_servers_status".to_owned());

        let gate = self.gated_servers.lock().unwrap().pop_front();
        if let Some(rx) = gate {
            return rx
                .await
                .map_err(|_| ApiError::Transport("gate dropped".to_owned()));
        }

        self.servers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ServersResponse::default()))
    }
}

/// Session fake with a fixed token.
#[derive(Default)]
pub struct FakeWebApp {
    pub init_data: Option<String>,
    pub ready: AtomicBool,
}

impl FakeWebApp {
    pub fn with_token(token: Option<&str>) -> Self {
        Self {
            init_data: token.map(str::to_owned),
            ready: AtomicBool::new(false),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }
}

impl WebApp for FakeWebApp {
    fn ready(&self) {
        self.ready.store(true, Ordering::SeqCst);
    }

    fn init_data(&self) -> Option<String> {
        self.init_data.clone()
    }
}
