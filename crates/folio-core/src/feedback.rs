//! Transient "Copied!" indicator.
//!
//! A successful copy raises the flag and schedules one reset task on the
//! current tokio runtime. Copying again aborts the pending reset before
//! scheduling a new one, so only the latest copy decides when the flag
//! drops. Dropping the [`CopyFeedback`] aborts whatever is still pending.

use crate::clipboard::Clipboard;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub const DEFAULT_COPIED_WINDOW: Duration = Duration::from_millis(2000);

#[derive(Debug)]
pub struct CopyFeedback {
    window: Duration,
    state: Arc<watch::Sender<bool>>,
    generation: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(DEFAULT_COPIED_WINDOW)
    }
}

impl CopyFeedback {
    pub fn new(window: Duration) -> Self {
        let (tx, _rx) = watch::channel(false);
        Self {
            window,
            state: Arc::new(tx),
            generation: Arc::new(AtomicU64::new(0)),
            pending: None,
        }
    }

    pub fn copied(&self) -> bool {
        *self.state.borrow()
    }

    /// Receiver that observes every flip of the flag.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.state.subscribe()
    }

    /// Raise the flag and (re)start the reset timer.
    pub fn record_copy(&mut self) {
        self.cancel_pending();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(true);

        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                tracing::warn!("no tokio runtime; copy feedback will not reset");
                return;
            }
        };

        let state = Arc::clone(&self.state);
        let current = Arc::clone(&self.generation);
        let window = self.window;
        self.pending = Some(handle.spawn(async move {
            tokio::time::sleep(window).await;
            // A superseded task must not clear a newer copy.
            if current.load(Ordering::SeqCst) == generation {
                state.send_replace(false);
                tracing::debug!("copy feedback expired");
            }
        }));
    }

    /// Drop the flag now and forget any pending reset.
    pub fn clear(&mut self) {
        self.cancel_pending();
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.state.send_replace(false);
    }

    fn cancel_pending(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

impl Drop for CopyFeedback {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

/// Write `text` and raise the indicator on success. A refused write is
/// absorbed: it is logged at debug level and the indicator stays as it was.
pub async fn copy_with_feedback<C: Clipboard>(
    clipboard: &C,
    feedback: &mut CopyFeedback,
    text: &str,
) -> bool {
    match clipboard.write_text(text).await {
        Ok(()) => {
            feedback.record_copy();
            true
        }
        Err(e) => {
            tracing::debug!("clipboard write refused: {e}");
            false
        }
    }
}
