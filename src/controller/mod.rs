//! Panel controller module.
//!
//! Ties the backend API, the Telegram session and the view together:
//! page switching, bot info and servers fetches, and lifecycle commands.

mod confirm;
mod panel;
mod sequencer;

pub use confirm::{AutoConfirm, Confirm, TerminalConfirm};
pub use panel::{ActionOutcome, PanelController};
pub use sequencer::{RequestSequencer, RequestToken};
