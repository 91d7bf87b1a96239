//! Copy-to-clipboard with a short-lived acknowledgment label.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tracing::{debug, error};

use crate::errors::SummaryError;

pub const COPIED_LABEL: &str = "Copied!";
pub const COPIED_LABEL_DURATION: Duration = Duration::from_millis(2000);

pub trait ClipboardSink: Send + Sync {
    /// # Errors
    ///
    /// Returns [`SummaryError::Clipboard`] if the text could not be stored.
    fn write_text(&self, text: &str) -> Result<(), SummaryError>;
}

/// The platform clipboard.
#[cfg(feature = "clipboard")]
#[derive(Debug, Default)]
pub struct SystemClipboard;

#[cfg(feature = "clipboard")]
impl ClipboardSink for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), SummaryError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| SummaryError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| SummaryError::Clipboard(e.to_string()))
    }
}

/// A copy control whose label flips to [`COPIED_LABEL`] after a successful
/// copy and reverts after [`COPIED_LABEL_DURATION`].
#[derive(Debug, Clone)]
pub struct CopyButton {
    original: String,
    label: Arc<Mutex<String>>,
    generation: Arc<AtomicU64>,
}

impl CopyButton {
    pub fn new(label: impl Into<String>) -> Self {
        let original = label.into();
        Self {
            label: Arc::new(Mutex::new(original.clone())),
            original,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    #[must_use]
    pub fn label(&self) -> String {
        self.label
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_label(label: &Mutex<String>, text: &str) {
        let mut guard = label.lock().unwrap_or_else(PoisonError::into_inner);
        guard.clear();
        guard.push_str(text);
    }

    /// Copy `text` unless it is blank. Returns whether anything was copied.
    ///
    /// Must be called from within a tokio runtime; the label revert runs as a
    /// spawned task.
    ///
    /// # Errors
    ///
    /// Propagates the sink's error; the label is left unchanged in that case.
    pub fn copy(&self, sink: &dyn ClipboardSink, text: &str) -> Result<bool, SummaryError> {
        if text.trim().is_empty() {
            debug!("Nothing to copy");
            return Ok(false);
        }

        if let Err(e) = sink.write_text(text) {
            error!("Failed to copy text: {}", e);
            return Err(e);
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        Self::set_label(&self.label, COPIED_LABEL);

        let label = Arc::clone(&self.label);
        let current = Arc::clone(&self.generation);
        let original = self.original.clone();
        tokio::spawn(async move {
            tokio::time::sleep(COPIED_LABEL_DURATION).await;
            // A later copy owns the label now.
            if current.load(Ordering::SeqCst) == generation {
                Self::set_label(&label, &original);
            }
        });

        Ok(true)
    }
}
