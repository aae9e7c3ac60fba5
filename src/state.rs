use crate::domain::error::FaqError;
use crate::domain::traits::{Cache, FaqRepository, Translator};
use crate::infrastructure::config::Config;
use crate::infrastructure::network::{build_translator, http::create_client};
use crate::infrastructure::storage::cache::MemoryCache;
use crate::infrastructure::storage::db::SqliteFaqRepository;
use std::sync::Arc;
use std::time::Duration;
use tokio_rusqlite::Connection;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn FaqRepository>,
    pub cache: Arc<dyn Cache>,
    pub translator: Arc<dyn Translator>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wire the production collaborators: SQLite, in-memory cache, HTTP translator
    pub fn new(db: Connection, config: Config) -> Result<Self, FaqError> {
        let http_client = create_client(&config.translation)?;
        let translator = build_translator(http_client, &config)?;

        Ok(Self::with_parts(
            Arc::new(SqliteFaqRepository::new(db)),
            Arc::new(MemoryCache::new()),
            translator,
            config,
        ))
    }

    pub fn with_parts(
        repo: Arc<dyn FaqRepository>,
        cache: Arc<dyn Cache>,
        translator: Arc<dyn Translator>,
        config: Config,
    ) -> Self {
        Self {
            repo,
            cache,
            translator,
            config: Arc::new(config),
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        self.config.cache.ttl()
    }

    pub fn translation_timeout(&self) -> Duration {
        self.config.translation.timeout()
    }

    pub fn question_key(&self, id: i64, lang: &str) -> String {
        format!("{}:question:{}:{}", self.config.cache.key_prefix, id, lang)
    }

    pub fn list_key(&self, lang: &str) -> String {
        format!("{}:list:{}", self.config.cache.key_prefix, lang)
    }
}
