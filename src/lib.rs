//! Userbot Panel Library
//!
//! A terminal control panel for SharkHost userbots.
//!
//! This crate provides the core functionality for:
//! - Talking to the panel backend (userbot info, lifecycle commands, server stats)
//! - Reading the Telegram Mini App session token
//! - Keeping the panel's view state and rendering it to the terminal
//! - Handling shell commands typed by the user

pub mod api;
pub mod commands;
pub mod config;
pub mod controller;
pub mod ui;
pub mod webapp;

#[cfg(test)]
mod testing;
