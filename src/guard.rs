//! Confirmation gate in front of user deletion.

use crate::host::ConfirmDialog;

pub struct DeletionGuard<C> {
    dialog: C,
    message: String,
}

impl<C: ConfirmDialog> DeletionGuard<C> {
    pub fn new(dialog: C, message: impl Into<String>) -> Self {
        Self {
            dialog,
            message: message.into(),
        }
    }

    /// Ask before deleting. True only on explicit accept.
    ///
    /// A dialog that cannot be shown counts as a dismissal.
    pub fn confirm_deletion(&self) -> bool {
        match self.dialog.confirm(&self.message) {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::warn!("Deletion confirmation unavailable, refusing: {}", e);
                false
            }
        }
    }
}
