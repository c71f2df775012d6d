//! Global error slot backing the error modal.
//!
//! There is exactly one slot. A newer failure replaces an older one even if the
//! older one was never seen; the replaced message is logged so it is not lost
//! entirely.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// Most recent unhandled failure and whether the modal is showing it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorSlot {
    message: String,
    visible: bool,
}

impl ErrorSlot {
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Replace the current message and show the modal.
    pub fn raise(&mut self, message: impl Into<String>) {
        let message = message.into();
        if self.visible && !self.message.is_empty() && self.message != message {
            tracing::warn!(replaced = %self.message, "error slot overwritten");
        }
        tracing::debug!(%message, "error raised");
        self.message = message;
        self.visible = true;
    }

    /// Hide the modal and drop the message.
    pub fn dismiss(&mut self) {
        self.message.clear();
        self.visible = false;
    }
}
