//! User confirmation for destructive actions.

use dialoguer::Confirm as ConfirmPrompt;
use tracing::warn;

/// Asks the user to confirm an action.
pub trait Confirm: Send + Sync {
    /// Returns `true` if the user agreed.
    fn confirm(&self, prompt: &str) -> bool;
}

/// Interactive yes/no prompt on the terminal. Defaults to "no".
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        match ConfirmPrompt::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(e) => {
                warn!("Confirmation prompt failed: {}", e);
                false
            }
        }
    }
}

/// Fixed answer, for non-interactive runs (`--yes`).
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

impl<T: Confirm + ?Sized> Confirm for Box<T> {
    fn confirm(&self, prompt: &str) -> bool {
        (**self).confirm(prompt)
    }
}
