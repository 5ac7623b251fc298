use folio_core::clipboard::Clipboard;
use folio_core::FolioError;
use std::time::{Duration, Instant};

/// The desktop clipboard, via arboard. arboard blocks, so each write runs
/// on the blocking pool.
///
/// On X11 and Wayland the text is only served while its owner is alive, and
/// `folio` exits right after copying. The write therefore keeps ownership
/// until a clipboard manager (or another copy) takes over, or until `hold`
/// runs out. A zero `hold` waits for the takeover with no deadline.
pub struct SystemClipboard {
    hold: Duration,
}

impl SystemClipboard {
    pub fn new(hold: Duration) -> Self {
        Self { hold }
    }
}

/// When to give up ownership; `None` means wait until replaced.
fn hold_deadline(hold: Duration, now: Instant) -> Option<Instant> {
    (!hold.is_zero()).then(|| now + hold)
}

impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> folio_core::Result<()> {
        let text = text.to_string();
        let deadline = hold_deadline(self.hold, Instant::now());
        tokio::task::spawn_blocking(move || {
            let mut clipboard =
                arboard::Clipboard::new().map_err(|e| FolioError::Clipboard(e.to_string()))?;
            set_text(&mut clipboard, text, deadline)
                .map_err(|e| FolioError::Clipboard(e.to_string()))
        })
        .await
        .map_err(|e| FolioError::Clipboard(format!("clipboard task failed: {e}")))?
    }
}

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
fn set_text(
    clipboard: &mut arboard::Clipboard,
    text: String,
    deadline: Option<Instant>,
) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    tracing::debug!(?deadline, "holding clipboard selection");
    match deadline {
        Some(deadline) => clipboard.set().wait_until(deadline).text(text),
        None => clipboard.set().wait().text(text),
    }
}

// Windows and macOS keep the contents after the process exits.
#[cfg(not(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
)))]
fn set_text(
    clipboard: &mut arboard::Clipboard,
    text: String,
    _deadline: Option<Instant>,
) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}
