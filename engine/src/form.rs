//! Outcome channel between the submission form and the page.
//!
//! The form widget is an external collaborator: it owns field validation,
//! payload construction, and the network call. The page only learns the
//! outcome of each attempt, as a payloadless success or error, and expects at
//! most one report per attempt.

use tokio::sync::mpsc;

/// Result of one submission attempt, as reported by the form widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    Success,
    Error,
}

/// The form widget's handle for reporting outcomes back to the page.
///
/// Cloneable so the widget can thread it through its own async submission
/// path. Sending after the page has unmounted is harmless; the report is
/// simply dropped.
#[derive(Debug, Clone)]
pub struct FormHandle {
    tx: mpsc::UnboundedSender<FormOutcome>,
}

impl FormHandle {
    pub fn success(&self) {
        self.send(FormOutcome::Success);
    }

    pub fn error(&self) {
        self.send(FormOutcome::Error);
    }

    fn send(&self, outcome: FormOutcome) {
        if self.tx.send(outcome).is_err() {
            tracing::debug!(?outcome, "form outcome after page unmount, dropping");
        }
    }
}

/// Create the handle/receiver pair wiring a form widget to its page.
pub(crate) fn outcome_channel() -> (FormHandle, mpsc::UnboundedReceiver<FormOutcome>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (FormHandle { tx }, rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_delivers_outcomes_in_order() {
        let (handle, mut rx) = outcome_channel();
        handle.success();
        handle.error();

        assert_eq!(rx.try_recv().unwrap(), FormOutcome::Success);
        assert_eq!(rx.try_recv().unwrap(), FormOutcome::Error);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn send_after_receiver_dropped_does_not_panic() {
        let (handle, rx) = outcome_channel();
        drop(rx);
        handle.success();
        handle.error();
    }
}
