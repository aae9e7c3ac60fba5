//! Shared fixtures: fake translators and an isolated in-memory state.

#![allow(dead_code)]

use async_trait::async_trait;
use faq_rust::domain::error::FaqError;
use faq_rust::domain::model::Language;
use faq_rust::domain::traits::Translator;
use faq_rust::infrastructure::config::Config;
use faq_rust::infrastructure::storage::cache::MemoryCache;
use faq_rust::infrastructure::storage::db::{init_memory_database, SqliteFaqRepository};
use faq_rust::state::AppState;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Deterministic translator: `"[hi] What is Django?"`
#[derive(Default)]
pub struct FakeTranslator {
    calls: AtomicUsize,
}

impl FakeTranslator {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

pub fn fake_translation(text: &str, target: Language) -> String {
    format!("[{}] {}", target.code(), text)
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn translate(&self, text: &str, target: Language) -> Result<String, FaqError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(fake_translation(text, target))
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

/// Fails for one language, translates the rest
pub struct FailingTranslator {
    pub fail_on: Language,
}

#[async_trait]
impl Translator for FailingTranslator {
    async fn translate(&self, text: &str, target: Language) -> Result<String, FaqError> {
        if target == self.fail_on {
            return Err(FaqError::translation(target, "service unavailable"));
        }
        Ok(fake_translation(text, target))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// Never answers within any reasonable timeout
pub struct SlowTranslator;

#[async_trait]
impl Translator for SlowTranslator {
    async fn translate(&self, text: &str, target: Language) -> Result<String, FaqError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(fake_translation(text, target))
    }

    fn name(&self) -> &'static str {
        "slow"
    }
}

pub async fn state_with(translator: Arc<dyn Translator>, config: Config) -> AppState {
    let db = init_memory_database().await.expect("in-memory database");
    AppState::with_parts(
        Arc::new(SqliteFaqRepository::new(db)),
        Arc::new(MemoryCache::new()),
        translator,
        config,
    )
}

pub async fn test_state() -> (AppState, Arc<FakeTranslator>) {
    let translator = Arc::new(FakeTranslator::default());
    let state = state_with(translator.clone(), Config::default()).await;
    (state, translator)
}
