//! Panel user interface module.
//!
//! Pages and navigation, the view state the controller mutates,
//! localized strings, and the terminal renderer.

mod locale;
mod navigator;
mod render;
mod view;

pub use locale::{Locale, Strings};
pub use navigator::{NavButton, Navigator, Page, PageSlot};
pub use render::Renderer;
pub use view::{
    error_text, ActionButton, ActionsPanel, ErrorPanel, InfoField, InfoPanel, ServerCard,
    ServersList, ViewState,
};
