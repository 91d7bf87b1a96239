use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

use crate::ai::SummaryGenerator;
use crate::core::models::{Language, SummaryResult, SummaryStyle};
use crate::credentials::CredentialStore;
use crate::errors::SummaryError;
use crate::prompt::build_prompt;
use crate::render::{format_summary, render_html};
use crate::sources::ArticleSource;

/// Released on drop so a failed run never leaves the summarizer locked.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Runs one summary at a time: credential, article text, prompt, remote
/// call, formatting.
pub struct Summarizer {
    credentials: Arc<dyn CredentialStore>,
    generator: Arc<dyn SummaryGenerator>,
    in_flight: AtomicBool,
}

impl Summarizer {
    pub fn new(credentials: Arc<dyn CredentialStore>, generator: Arc<dyn SummaryGenerator>) -> Self {
        Self {
            credentials,
            generator,
            in_flight: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Generate and format a summary of whatever `source` provides.
    ///
    /// # Errors
    ///
    /// - [`SummaryError::Busy`] if another call on this summarizer is running
    /// - [`SummaryError::MissingCredential`] if no API key is stored
    /// - [`SummaryError::Extraction`] if the source yields no text
    /// - whatever the generator reports for the remote call
    pub async fn summarize(
        &self,
        source: &dyn ArticleSource,
        style: SummaryStyle,
        language: Language,
    ) -> Result<SummaryResult, SummaryError> {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            info!("Rejected summary request while another is in flight");
            return Err(SummaryError::Busy);
        };

        let correlation_id = Uuid::new_v4().to_string();
        let span = info_span!("summarize", %correlation_id, %style, %language);

        let result = self
            .run(source, style, language)
            .instrument(span.clone())
            .await;

        span.in_scope(|| match &result {
            Ok(summary) => info!("Summary ready with {} blocks", summary.blocks.len()),
            Err(e) => error!(
                "Failed to generate summary: {} ({})",
                e,
                e.detail().unwrap_or("no detail")
            ),
        });
        result
    }

    async fn run(
        &self,
        source: &dyn ArticleSource,
        style: SummaryStyle,
        language: Language,
    ) -> Result<SummaryResult, SummaryError> {
        let api_key = self
            .credentials
            .api_key()
            .await?
            .ok_or(SummaryError::MissingCredential)?;

        let article_text = source
            .article_text()
            .await?
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| {
                SummaryError::extraction(format!("{} produced no text", source.describe()))
            })?;
        info!(
            "Extracted {} characters from {}",
            article_text.chars().count(),
            source.describe()
        );

        let prompt = build_prompt(&article_text, style, language);
        let raw_text = self.generator.request_summary(&prompt, &api_key).await?;
        let blocks = format_summary(&raw_text, style);

        Ok(SummaryResult {
            style,
            raw_text,
            blocks,
        })
    }
}

/// What ends up in the result area: the rendered summary, or the error's
/// user-facing message.
#[must_use]
pub fn display_text(outcome: &Result<SummaryResult, SummaryError>) -> String {
    match outcome {
        Ok(summary) => render_html(&summary.blocks),
        Err(e) => e.user_message(),
    }
}
