use std::sync::Mutex;
use std::time::Duration;

use article_tldr::clipboard::{COPIED_LABEL, COPIED_LABEL_DURATION, ClipboardSink, CopyButton};
use article_tldr::errors::SummaryError;

#[derive(Default)]
struct RecordingClipboard {
    contents: Mutex<Vec<String>>,
}

impl ClipboardSink for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), SummaryError> {
        self.contents.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

struct BrokenClipboard;

impl ClipboardSink for BrokenClipboard {
    fn write_text(&self, _text: &str) -> Result<(), SummaryError> {
        Err(SummaryError::Clipboard("no display".to_string()))
    }
}

#[tokio::test(start_paused = true)]
async fn test_copied_label_reverts_after_two_seconds() {
    let sink = RecordingClipboard::default();
    let button = CopyButton::new("Copy");

    assert!(button.copy(&sink, "Brief Summary\n\nText").unwrap());
    assert_eq!(button.label(), COPIED_LABEL);
    assert_eq!(*sink.contents.lock().unwrap(), ["Brief Summary\n\nText"]);

    tokio::time::sleep(COPIED_LABEL_DURATION - Duration::from_millis(1)).await;
    assert_eq!(button.label(), COPIED_LABEL, "Label reverted too early");

    tokio::time::sleep(Duration::from_millis(2)).await;
    tokio::task::yield_now().await;
    assert_eq!(button.label(), "Copy");
}

#[tokio::test(start_paused = true)]
async fn test_second_copy_extends_acknowledgment() {
    let sink = RecordingClipboard::default();
    let button = CopyButton::new("Copy");

    button.copy(&sink, "first").unwrap();
    tokio::time::sleep(Duration::from_millis(1500)).await;
    button.copy(&sink, "second").unwrap();

    // The first copy's revert fires here but must not clobber the second
    tokio::time::sleep(Duration::from_millis(1000)).await;
    tokio::task::yield_now().await;
    assert_eq!(button.label(), COPIED_LABEL);

    tokio::time::sleep(Duration::from_millis(1100)).await;
    tokio::task::yield_now().await;
    assert_eq!(button.label(), "Copy");
}

#[tokio::test]
async fn test_blank_text_is_not_copied() {
    let sink = RecordingClipboard::default();
    let button = CopyButton::new("Copy");

    assert!(!button.copy(&sink, "  \n ").unwrap());
    assert!(sink.contents.lock().unwrap().is_empty());
    assert_eq!(button.label(), "Copy");
}

#[tokio::test]
async fn test_failed_copy_keeps_label() {
    let button = CopyButton::new("Copy");
    let err = button.copy(&BrokenClipboard, "text").unwrap_err();

    assert_eq!(err.user_message(), "Error: Failed to copy text: no display");
    assert_eq!(button.label(), "Copy");
}
