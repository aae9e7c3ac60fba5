use crate::domain::error::FaqError;
use crate::domain::model::{normalize_lang, Faq, FaqItem, Language, Translatable};
use crate::domain::traits::CachedValue;
use crate::state::AppState;
use tracing::debug;

/// Resolve the question text of `faq` in `lang`, cache first.
///
/// Supported languages with a stored variant get that variant; every other
/// code (unknown, primary, empty) gets the primary question. The computed
/// value is cached per (record, language) until the TTL elapses, so a
/// variant filled in later is not seen before then.
pub fn translated_question(state: &AppState, faq: &Faq, lang: &str) -> String {
    let lang = normalize_lang(lang);
    let key = state.question_key(faq.id, &lang);

    if let Some(CachedValue::Text(text)) = state.cache.get(&key) {
        debug!(%key, "question cache hit");
        return text;
    }

    let text = Language::from_code(&lang)
        .and_then(|language| faq.variant(language))
        .unwrap_or(faq.question.as_str())
        .to_string();

    state
        .cache
        .set(key, CachedValue::Text(text.clone()), state.cache_ttl());
    text
}

fn to_item(state: &AppState, faq: &Faq, lang: &str) -> FaqItem {
    FaqItem {
        id: faq.id,
        question: translated_question(state, faq, lang),
        answer: faq.answer.clone(),
    }
}

/// The whole collection in `lang`, served from the per-language list cache.
///
/// Returns `Ok(None)` when no records exist at all. A cached list is returned
/// verbatim without consulting the store.
pub async fn list_faqs(
    state: &AppState,
    lang: Option<&str>,
) -> Result<Option<Vec<FaqItem>>, FaqError> {
    let lang = normalize_lang(lang.unwrap_or_default());
    let key = state.list_key(&lang);

    if let Some(CachedValue::Items(items)) = state.cache.get(&key) {
        debug!(%key, count = items.len(), "list cache hit");
        return Ok(Some(items));
    }

    let faqs = state.repo.list().await?;
    if faqs.is_empty() {
        return Ok(None);
    }

    let items: Vec<FaqItem> = faqs.iter().map(|faq| to_item(state, faq, &lang)).collect();
    debug!(%key, count = items.len(), "list cache filled");
    state
        .cache
        .set(key, CachedValue::Items(items.clone()), state.cache_ttl());
    Ok(Some(items))
}

/// One record in `lang`, or `None` for an unknown id.
pub async fn get_faq(
    state: &AppState,
    id: i64,
    lang: Option<&str>,
) -> Result<Option<FaqItem>, FaqError> {
    let lang = normalize_lang(lang.unwrap_or_default());
    let faq = state.repo.get(id).await?;
    Ok(faq.map(|faq| to_item(state, &faq, &lang)))
}

/// Drop every cached question and list entry.
pub fn clear_cache(state: &AppState) -> usize {
    let cleared = state.cache.clear();
    debug!(cleared, "cache cleared");
    cleared
}
