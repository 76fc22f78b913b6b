//! Session-scoped shared state.
//!
//! Holds the one piece of cross-cutting UI state in the system: the
//! currently selected ticket, shared between the triage/cost view and the
//! worker-matching view. The holder is owned by the top-level composition
//! (`AppState` or a CLI context) and passed down explicitly; it is never a
//! process-wide singleton. Nothing here survives the owning session.

use crate::client::ActiveCase;
use tokio::sync::watch;

/// Holder for at most one selected ticket.
///
/// Cloning shares the underlying channel, so every clone observes the same
/// selection. Subscribers are notified synchronously on every `select`.
#[derive(Debug, Clone)]
pub struct SelectionState {
    tx: watch::Sender<Option<ActiveCase>>,
}

impl SelectionState {
    /// Create an empty selection.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self { tx }
    }

    /// Unconditionally overwrite the selection and notify subscribers.
    pub fn select(&self, ticket: ActiveCase) {
        self.tx.send_replace(Some(ticket));
    }

    /// Set the selection to the first element of `cases` only if nothing is
    /// selected yet. Calling this again once a selection exists is a no-op,
    /// regardless of the list contents.
    pub fn select_first_if_empty(&self, cases: &[ActiveCase]) {
        if self.selected().is_none() {
            if let Some(first) = cases.first() {
                self.select(first.clone());
            }
        }
    }

    /// Current selection, if any.
    pub fn selected(&self) -> Option<ActiveCase> {
        self.tx.borrow().clone()
    }

    /// Clear the selection.
    pub fn clear(&self) {
        self.tx.send_replace(None);
    }

    /// Subscribe to selection changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<ActiveCase>> {
        self.tx.subscribe()
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}
