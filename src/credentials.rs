//! Where the API key comes from.
//!
//! The key is owned by a store outside the summarization pipeline and is only
//! ever handed to it as a parameter.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::errors::SummaryError;

#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// The stored API key, or `None` when nothing usable is stored.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::Storage`] if the store exists but cannot be read.
    async fn api_key(&self) -> Result<Option<String>, SummaryError>;
}

fn non_blank(key: String) -> Option<String> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Reads the key from an environment variable.
#[derive(Debug, Clone)]
pub struct EnvCredentialStore {
    var: String,
}

impl EnvCredentialStore {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

#[async_trait]
impl CredentialStore for EnvCredentialStore {
    async fn api_key(&self) -> Result<Option<String>, SummaryError> {
        Ok(std::env::var(&self.var).ok().and_then(non_blank))
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CredentialDocument {
    #[serde(rename = "geminiApiKey", default, skip_serializing_if = "Option::is_none")]
    gemini_api_key: Option<String>,
}

/// JSON file holding `{"geminiApiKey": "..."}`.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/article-tldr/credentials.json`, if the platform has a config dir.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("article-tldr").join("credentials.json"))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Store a new key, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::Storage`] if the file or its directory cannot be written.
    pub async fn save_api_key(&self, key: &str) -> Result<(), SummaryError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(SummaryError::Storage("refusing to store an empty API key".to_string()));
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let document = CredentialDocument {
            gemini_api_key: Some(key.to_string()),
        };
        tokio::fs::write(&self.path, serde_json::to_vec_pretty(&document)?).await?;
        info!("Saved API key to {}", self.path.display());
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn api_key(&self) -> Result<Option<String>, SummaryError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No credential file at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let document: CredentialDocument = serde_json::from_slice(&bytes)?;
        Ok(document.gemini_api_key.and_then(non_blank))
    }
}

/// Asks each store in turn; the first key found wins.
#[derive(Default)]
pub struct ChainedCredentialStore {
    stores: Vec<Box<dyn CredentialStore>>,
}

impl ChainedCredentialStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, store: impl CredentialStore + 'static) -> Self {
        self.stores.push(Box::new(store));
        self
    }
}

#[async_trait]
impl CredentialStore for ChainedCredentialStore {
    async fn api_key(&self) -> Result<Option<String>, SummaryError> {
        for store in &self.stores {
            if let Some(key) = store.api_key().await? {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }
}

/// A fixed key, for callers that already hold one.
#[async_trait]
impl CredentialStore for Option<String> {
    async fn api_key(&self) -> Result<Option<String>, SummaryError> {
        Ok(self.clone().and_then(non_blank))
    }
}
