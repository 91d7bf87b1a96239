use thiserror::Error;

/// Fallback shown when the endpoint rejects a request without an error message.
pub const GENERIC_REQUEST_FAILURE: &str = "API request failed";

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("API key not found. Please set your API key in the options.")]
    MissingCredential,

    #[error("Could not extract article text from this page.")]
    Extraction { detail: String },

    #[error("{}", .message.as_deref().unwrap_or(GENERIC_REQUEST_FAILURE))]
    RemoteRequest {
        status: u16,
        message: Option<String>,
    },

    #[error("Failed to generate summary. Please try again later.")]
    Transport { detail: String },

    #[error("A summary is already being generated.")]
    Busy,

    #[error("Failed to access credential store: {0}")]
    Storage(String),

    #[error("Failed to copy text: {0}")]
    Clipboard(String),
}

impl SummaryError {
    pub fn extraction(detail: impl Into<String>) -> Self {
        SummaryError::Extraction {
            detail: detail.into(),
        }
    }

    pub fn transport(detail: impl Into<String>) -> Self {
        SummaryError::Transport {
            detail: detail.into(),
        }
    }

    /// The single line written into the result area when a run fails.
    ///
    /// Configuration and extraction problems are reported as-is; everything
    /// that happened after the request left gets the `Error:` prefix.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SummaryError::MissingCredential
            | SummaryError::Extraction { .. }
            | SummaryError::Busy => self.to_string(),
            SummaryError::RemoteRequest { .. }
            | SummaryError::Transport { .. }
            | SummaryError::Storage(_)
            | SummaryError::Clipboard(_) => format!("Error: {self}"),
        }
    }

    /// Internal detail for logs. Never shown to the user.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            SummaryError::Extraction { detail } | SummaryError::Transport { detail } => {
                Some(detail)
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SummaryError {
    fn from(error: reqwest::Error) -> Self {
        SummaryError::transport(error.to_string())
    }
}

impl From<std::io::Error> for SummaryError {
    fn from(error: std::io::Error) -> Self {
        SummaryError::Storage(error.to_string())
    }
}

impl From<serde_json::Error> for SummaryError {
    fn from(error: serde_json::Error) -> Self {
        SummaryError::Storage(format!("invalid credential document: {error}"))
    }
}
