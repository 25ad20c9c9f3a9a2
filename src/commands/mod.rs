//! Command handling module.
//!
//! Parses lines typed into the panel shell and runs them against the
//! controller, the way clicks drive the Mini App page.

mod handler;
mod types;

pub use handler::CommandHandler;
pub use types::{CommandResult, PanelCommand};
