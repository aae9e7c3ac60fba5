use crate::domain::model::Language;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FaqError {
    #[error("Database error: {0}")]
    Database(#[from] tokio_rusqlite::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("FAQ {0} not found")]
    NotFound(i64),

    #[error("Translation to '{language}' failed: {message}")]
    Translation { language: Language, message: String },

    #[error("Translation to '{language}' timed out after {seconds}s")]
    Timeout { language: Language, seconds: u64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API Error: {0}")]
    Api(String),

    #[error("Time error: {0}")]
    Time(#[from] std::time::SystemTimeError),
}

impl FaqError {
    pub fn translation(language: Language, message: impl Into<String>) -> Self {
        Self::Translation {
            language,
            message: message.into(),
        }
    }

    /// True when the failure came from the write-path translation collaborator.
    pub fn is_translation_failure(&self) -> bool {
        matches!(
            self,
            Self::Translation { .. } | Self::Timeout { .. } | Self::Api(_) | Self::Http(_)
        )
    }
}
