use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use tracing::info;
use url::Url;

use super::ArticleSource;
use crate::errors::SummaryError;

const TEXT_WIDTH: usize = 200;

/// Visible text of an HTML document.
///
/// # Errors
///
/// Returns [`SummaryError::Extraction`] if the document cannot be parsed.
pub fn html_to_text(html: &[u8]) -> Result<String, SummaryError> {
    html2text::from_read(html, TEXT_WIDTH).map_err(|e| SummaryError::extraction(e.to_string()))
}

/// A saved HTML page on disk.
#[derive(Debug, Clone)]
pub struct HtmlFileSource {
    path: PathBuf,
}

impl HtmlFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ArticleSource for HtmlFileSource {
    async fn article_text(&self) -> Result<Option<String>, SummaryError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            SummaryError::extraction(format!("failed to read {}: {}", self.path.display(), e))
        })?;
        html_to_text(&bytes).map(Some)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// A live page fetched over HTTP.
pub struct UrlSource {
    http: Client,
    url: Url,
}

impl UrlSource {
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self::with_http_client(Client::new(), url)
    }

    #[must_use]
    pub fn with_http_client(http: Client, url: Url) -> Self {
        Self { http, url }
    }
}

#[async_trait]
impl ArticleSource for UrlSource {
    async fn article_text(&self) -> Result<Option<String>, SummaryError> {
        let response = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| SummaryError::extraction(format!("failed to fetch page: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SummaryError::extraction(format!(
                "page returned HTTP {}",
                status.as_u16()
            )));
        }

        let is_html = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_none_or(|ct| ct.contains("html"));

        let body = response
            .bytes()
            .await
            .map_err(|e| SummaryError::extraction(format!("failed to read page: {e}")))?;
        info!("Fetched {} bytes from {}", body.len(), self.url);

        if is_html {
            html_to_text(&body).map(Some)
        } else {
            Ok(Some(String::from_utf8_lossy(&body).into_owned()))
        }
    }

    fn describe(&self) -> String {
        format!("url {}", self.url)
    }
}
