// Command-line entry point: the popup's controls as flags.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tracing::error;
use url::Url;

use article_tldr::ai::GeminiClient;
use article_tldr::core::config::AppConfig;
use article_tldr::core::models::{Language, SummaryStyle};
use article_tldr::credentials::{ChainedCredentialStore, EnvCredentialStore, FileCredentialStore};
use article_tldr::features::{Summarizer, display_text};
use article_tldr::render::render_plain_text;
use article_tldr::sources::{ArticleSource, HtmlFileSource, TextSource, UrlSource};

/// Summarize an article with Gemini
#[derive(Parser)]
#[command(name = "article-tldr", about, version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize an HTML file, a URL, or text read from stdin
    Summarize {
        /// brief, detailed or bullets (anything else gives a general summary)
        #[arg(long, default_value = "brief")]
        style: String,
        /// en, hi (Hinglish) or hi-dev (Devanagari); anything else is English
        #[arg(long, default_value = "en")]
        lang: String,
        /// Saved HTML page to summarize
        #[arg(long, conflicts_with_all = ["url", "text"])]
        file: Option<PathBuf>,
        /// Page to fetch and summarize
        #[arg(long, conflicts_with = "text")]
        url: Option<Url>,
        /// Article text given directly
        #[arg(long)]
        text: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,
        /// Also copy the plain-text summary to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Store the Gemini API key in the credential file
    SetKey { key: String },
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Html,
    Text,
    Json,
}

fn credential_file(config: &AppConfig) -> Result<FileCredentialStore> {
    config
        .credentials_path
        .clone()
        .or_else(FileCredentialStore::default_path)
        .map(FileCredentialStore::new)
        .context("no configuration directory; set TLDR_CREDENTIALS_PATH")
}

async fn read_stdin() -> Result<String> {
    let mut text = String::new();
    tokio::io::stdin()
        .read_to_string(&mut text)
        .await
        .context("failed to read article text from stdin")?;
    Ok(text)
}

#[cfg(feature = "clipboard")]
fn copy_to_clipboard(text: &str) -> Result<()> {
    use article_tldr::clipboard::{CopyButton, SystemClipboard};

    let button = CopyButton::new("Copy");
    if button.copy(&SystemClipboard, text)? {
        eprintln!("{}", button.label());
    }
    Ok(())
}

#[cfg(not(feature = "clipboard"))]
fn copy_to_clipboard(_text: &str) -> Result<()> {
    anyhow::bail!("clipboard support is not compiled in; rebuild with --features clipboard")
}

#[allow(clippy::too_many_arguments)]
async fn summarize(
    config: &AppConfig,
    style: &str,
    lang: &str,
    file: Option<PathBuf>,
    url: Option<Url>,
    text: Option<String>,
    format: OutputFormat,
    copy: bool,
) -> Result<bool> {
    let credentials = ChainedCredentialStore::new()
        .with(EnvCredentialStore::new(config.api_key_var.clone()))
        .with(credential_file(config)?);
    let summarizer = Summarizer::new(Arc::new(credentials), Arc::new(GeminiClient::new(config)));

    let source: Box<dyn ArticleSource> = match (file, url, text) {
        (Some(path), _, _) => Box::new(HtmlFileSource::new(path)),
        (None, Some(url), _) => Box::new(UrlSource::new(url)),
        (None, None, Some(text)) => Box::new(TextSource::new(text)),
        (None, None, None) => Box::new(TextSource::new(read_stdin().await?)),
    };

    let outcome = summarizer
        .summarize(source.as_ref(), SummaryStyle::from(style), Language::from(lang))
        .await;

    match (&outcome, format) {
        (Ok(summary), OutputFormat::Json) => println!("{}", serde_json::to_string_pretty(summary)?),
        (Ok(summary), OutputFormat::Text) => println!("{}", render_plain_text(&summary.blocks)),
        _ => println!("{}", display_text(&outcome)),
    }

    if let (Ok(summary), true) = (&outcome, copy) {
        copy_to_clipboard(&render_plain_text(&summary.blocks))?;
    }

    Ok(outcome.is_ok())
}

#[tokio::main]
async fn main() -> ExitCode {
    article_tldr::setup_logging();

    match run(Cli::parse()).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<bool> {
    let config = AppConfig::from_env().map_err(anyhow::Error::msg)?;

    match cli.command {
        Command::Summarize {
            style,
            lang,
            file,
            url,
            text,
            format,
            copy,
        } => summarize(&config, &style, &lang, file, url, text, format, copy).await,
        Command::SetKey { key } => {
            let store = credential_file(&config)?;
            store.save_api_key(&key).await?;
            println!("API key saved to {}", store.path().display());
            Ok(true)
        }
    }
}
