//! Selection and confirmation state for a list view.
//!
//! At most one dialog drives the view at a time: either an item's
//! detail panel or the delete confirmation. Destructive mutations are
//! gated behind the explicit confirm step; cancelling clears the
//! pending item without touching the dispatcher.
//!
//! State transitions:
//! ```text
//! Closed → Details(item)        show_details
//! Closed → ConfirmDelete(item)  request_delete
//! Details → Closed              close (explicit close or Escape)
//! ConfirmDelete → Closed        confirm_delete (item handed to the
//!                               dispatcher) or cancel_delete
//! ```

/// The dialog state of one list view.
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog<T> {
    /// No dialog open.
    Closed,
    /// The detail panel for the selected item.
    Details(T),
    /// The delete confirmation for the item pending deletion.
    ConfirmDelete(T),
}

// Manual impl so `Dialog<T>` defaults to `Closed` without a
// `T: Default` bound.
impl<T> Default for Dialog<T> {
    fn default() -> Self {
        Dialog::Closed
    }
}

impl<T: Clone> Dialog<T> {
    /// Whether any dialog is open.
    pub fn is_open(&self) -> bool {
        !matches!(self, Dialog::Closed)
    }

    /// The selected item shown in the detail panel, if open.
    pub fn selected(&self) -> Option<&T> {
        match self {
            Dialog::Details(item) => Some(item),
            _ => None,
        }
    }

    /// The item pending deletion, if the confirmation is open.
    pub fn pending_delete(&self) -> Option<&T> {
        match self {
            Dialog::ConfirmDelete(item) => Some(item),
            _ => None,
        }
    }

    /// Opens the detail panel for an item, replacing any open dialog.
    pub fn show_details(&mut self, item: T) {
        *self = Dialog::Details(item);
    }

    /// Opens the delete confirmation for an item, replacing any open
    /// dialog.
    pub fn request_delete(&mut self, item: T) {
        *self = Dialog::ConfirmDelete(item);
    }

    /// Confirms the pending deletion, closing the dialog and returning
    /// the item to hand to the mutation dispatcher. Returns `None` if
    /// no deletion was pending.
    pub fn confirm_delete(&mut self) -> Option<T> {
        match std::mem::take(self) {
            Dialog::ConfirmDelete(item) => Some(item),
            other => {
                *self = other;
                None
            }
        }
    }

    /// Cancels the pending deletion without dispatching anything.
    pub fn cancel_delete(&mut self) {
        if matches!(self, Dialog::ConfirmDelete(_)) {
            *self = Dialog::Closed;
        }
    }

    /// Closes whichever dialog is open.
    pub fn close(&mut self) {
        *self = Dialog::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_open_and_close() {
        let mut d: Dialog<&str> = Dialog::Closed;
        assert!(!d.is_open());
        d.show_details("brand");
        assert_eq!(d.selected(), Some(&"brand"));
        assert!(d.pending_delete().is_none());
        d.close();
        assert!(!d.is_open());
    }

    #[test]
    fn confirm_hands_back_the_pending_item() {
        let mut d: Dialog<&str> = Dialog::Closed;
        d.request_delete("brand");
        assert_eq!(d.pending_delete(), Some(&"brand"));
        let item = d.confirm_delete();
        assert_eq!(item, Some("brand"));
        assert!(!d.is_open());
    }

    #[test]
    fn cancel_clears_without_dispatch() {
        let mut d: Dialog<&str> = Dialog::Closed;
        d.request_delete("brand");
        d.cancel_delete();
        assert!(!d.is_open());
        assert_eq!(d.confirm_delete(), None);
    }

    #[test]
    fn confirm_on_a_details_dialog_is_a_no_op() {
        let mut d: Dialog<&str> = Dialog::Closed;
        d.show_details("brand");
        assert_eq!(d.confirm_delete(), None);
        assert_eq!(d.selected(), Some(&"brand"));
    }

    #[test]
    fn dialogs_never_stack() {
        let mut d: Dialog<&str> = Dialog::Closed;
        d.show_details("a");
        d.request_delete("b");
        assert!(d.selected().is_none());
        assert_eq!(d.pending_delete(), Some(&"b"));
    }
}
