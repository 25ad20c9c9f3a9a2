//! Panel backend API module.
//!
//! Typed requests and responses for the three backend endpoints,
//! and the HTTP client that talks to them.

mod client;
mod types;

pub use client::{ApiError, HttpPanelApi, PanelApi};
pub use types::{
    BotAction, BotStatus, ManageResponse, ServerStats, ServerStatus, ServersResponse, StatValue,
    UserbotResponse, UserbotStatus,
};
