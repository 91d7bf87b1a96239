//! Article TLDR - summarizes the readable text of a web page with Gemini.
//!
//! A summary run is a straight line of fallible steps:
//! 1. Look up the API key in a [`credentials::CredentialStore`]
//! 2. Get the article text from a [`sources::ArticleSource`]
//! 3. Build a style- and language-specific prompt ([`prompt::build_prompt`])
//! 4. Make one `generateContent` call ([`ai::GeminiClient`])
//! 5. Split the reply into headings, paragraphs and list items
//!    ([`render::format_summary`]) and render them as HTML
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use article_tldr::ai::GeminiClient;
//! use article_tldr::core::config::AppConfig;
//! use article_tldr::core::models::{Language, SummaryStyle};
//! use article_tldr::credentials::EnvCredentialStore;
//! use article_tldr::features::{Summarizer, display_text};
//! use article_tldr::sources::TextSource;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     article_tldr::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let summarizer = Summarizer::new(
//!         Arc::new(EnvCredentialStore::new(config.api_key_var.clone())),
//!         Arc::new(GeminiClient::new(&config)),
//!     );
//!
//!     let source = TextSource::new("Rust 1.85 stabilizes the 2024 edition ...");
//!     let outcome = summarizer
//!         .summarize(&source, SummaryStyle::Bullets, Language::English)
//!         .await;
//!     println!("{}", display_text(&outcome));
//!     Ok(())
//! }
//! ```

pub mod ai;
pub mod clipboard;
pub mod core;
pub mod credentials;
pub mod errors;
pub mod features;
pub mod prompt;
pub mod render;
pub mod sources;

pub use errors::SummaryError;
pub use features::Summarizer;

/// Configure structured JSON logging on stderr.
///
/// The level comes from `RUST_LOG` and defaults to `info`. Calling this more
/// than once is harmless; only the first call installs a subscriber.
///
/// # Example
///
/// ```
/// article_tldr::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
