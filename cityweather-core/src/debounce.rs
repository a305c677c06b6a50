//! Debounce timer for autocomplete keystrokes.

use std::time::Duration;

use tokio::{sync::mpsc, task::JoinHandle, time};

/// Quiet period a keystroke must survive before the suggestion fetch fires.
pub const QUIET_PERIOD: Duration = Duration::from_millis(500);

/// At most one pending scheduled task; each new keystroke cancels and
/// replaces it. The query is captured at schedule time and delivered
/// unchanged when the timer fires.
#[derive(Debug)]
pub struct Debouncer {
    quiet_period: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl Debouncer {
    pub fn new() -> Self {
        Self::with_quiet_period(QUIET_PERIOD)
    }

    pub fn with_quiet_period(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    /// Cancel the pending task, then schedule a new one that sends `query`
    /// on `tx` after the quiet period.
    pub fn schedule(&mut self, query: String, tx: mpsc::UnboundedSender<String>) {
        self.cancel();

        let quiet_period = self.quiet_period;
        self.pending = Some(tokio::spawn(async move {
            time::sleep(quiet_period).await;
            // Receiver may be gone on shutdown; nothing to do then.
            let _ = tx.send(query);
        }));
    }

    /// Abort the pending task, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn fires_once_after_quiet_period_with_captured_text() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new();

        debouncer.schedule("Paris".into(), tx.clone());
        drop(tx);

        assert_eq!(rx.recv().await.as_deref(), Some("Paris"));
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn second_keystroke_within_quiet_period_replaces_the_first() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new();

        debouncer.schedule("Par".into(), tx.clone());
        time::advance(Duration::from_millis(100)).await;
        debouncer.schedule("Pari".into(), tx.clone());
        drop(tx);

        // Exactly one fire, carrying the second keystroke's text.
        assert_eq!(rx.recv().await.as_deref(), Some("Pari"));
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn keystrokes_spaced_past_the_quiet_period_each_fire() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new();

        debouncer.schedule("Par".into(), tx.clone());
        assert_eq!(rx.recv().await.as_deref(), Some("Par"));

        debouncer.schedule("Paris".into(), tx.clone());
        drop(tx);
        assert_eq!(rx.recv().await.as_deref(), Some("Paris"));
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_prevents_the_fire() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new();

        debouncer.schedule("Paris".into(), tx.clone());
        debouncer.cancel();
        drop(tx);

        time::advance(QUIET_PERIOD * 2).await;
        assert!(rx.recv().await.is_none());
    }
}
