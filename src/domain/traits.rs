use crate::domain::error::FaqError;
use crate::domain::model::{Faq, FaqItem, Language, NewFaq};
use async_trait::async_trait;
use std::time::Duration;

/// Trait for translation services
///
/// This trait provides an abstraction for different translation providers.
/// Implementations can be swapped without changing the calling code, and
/// tests substitute a deterministic fake so the write path needs no network.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into `target`
    async fn translate(&self, text: &str, target: Language) -> Result<String, FaqError>;

    /// Provider name (for logging and status output)
    fn name(&self) -> &'static str;
}

/// Trait for FAQ persistence
///
/// This trait abstracts database operations, allowing different database
/// implementations to be used (SQLite, PostgreSQL, etc.)
#[async_trait]
pub trait FaqRepository: Send + Sync {
    /// Insert a new record and return it with its assigned id
    async fn create(&self, draft: NewFaq) -> Result<Faq, FaqError>;

    /// Overwrite every field of an existing record
    async fn update(&self, faq: &Faq) -> Result<Faq, FaqError>;

    /// Fetch one record by id
    async fn get(&self, id: i64) -> Result<Option<Faq>, FaqError>;

    /// All records ordered by id
    async fn list(&self) -> Result<Vec<Faq>, FaqError>;

    /// Number of stored records
    async fn count(&self) -> Result<usize, FaqError>;
}

/// A value stored in the shared cache
#[derive(Debug, Clone, PartialEq)]
pub enum CachedValue {
    /// A resolved question for one (record, language)
    Text(String),
    /// An assembled list response for one language
    Items(Vec<FaqItem>),
}

/// Trait for cache operations
///
/// Key-value store with per-key expiration, shared by the per-item and
/// per-list caches.
pub trait Cache: Send + Sync {
    /// Get a live entry by key
    fn get(&self, key: &str) -> Option<CachedValue>;

    /// Insert an entry that expires after `ttl`
    fn set(&self, key: String, value: CachedValue, ttl: Duration);

    /// Remove one entry, returning whether it existed
    fn delete(&self, key: &str) -> bool;

    /// Remove every entry, returning how many were dropped
    fn clear(&self) -> usize;

    /// Drop every expired entry, returning how many were removed
    fn purge_expired(&self) -> usize;

    /// Number of stored entries (expired ones may still be counted)
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
