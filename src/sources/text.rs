use async_trait::async_trait;

use super::ArticleSource;
use crate::errors::SummaryError;

/// Text that has already been extracted, e.g. piped in on stdin.
#[derive(Debug, Clone, Default)]
pub struct TextSource {
    text: Option<String>,
}

impl TextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// A source that never produces text.
    #[must_use]
    pub fn empty() -> Self {
        Self { text: None }
    }
}

#[async_trait]
impl ArticleSource for TextSource {
    async fn article_text(&self) -> Result<Option<String>, SummaryError> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        "inline text".to_string()
    }
}
