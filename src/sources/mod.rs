//! Article text sources
//!
//! The summarizer asks a source for the readable text of one document. A
//! source answering `Ok(None)` (or blank text) means nothing could be extracted.

pub mod html;
pub mod text;

use async_trait::async_trait;

use crate::errors::SummaryError;

pub use html::{HtmlFileSource, UrlSource, html_to_text};
pub use text::TextSource;

#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// # Errors
    ///
    /// Returns [`SummaryError::Extraction`] when the document cannot be read.
    async fn article_text(&self) -> Result<Option<String>, SummaryError>;

    /// Short label for logs.
    fn describe(&self) -> String;
}
