use std::env;
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_API_KEY_VAR: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base: Url,
    pub model: String,
    /// Name of the environment variable checked before the credential file.
    pub api_key_var: String,
    /// Overrides the default credential file location when set.
    pub credentials_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL"),
            model: DEFAULT_MODEL.to_string(),
            api_key_var: DEFAULT_API_KEY_VAR.to_string(),
            credentials_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let api_base = match env::var("GEMINI_API_BASE") {
            Ok(raw) => Url::parse(&raw).map_err(|e| format!("GEMINI_API_BASE: {}", e))?,
            Err(_) => defaults.api_base,
        };

        let model = env::var("GEMINI_MODEL")
            .ok()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(defaults.model);
        if model.contains('/') {
            return Err(format!("GEMINI_MODEL: invalid model name {:?}", model));
        }

        Ok(Self {
            api_base,
            model,
            api_key_var: env::var("GEMINI_API_KEY_VAR").unwrap_or(defaults.api_key_var),
            credentials_path: env::var("TLDR_CREDENTIALS_PATH").ok().map(PathBuf::from),
        })
    }
}
