use crate::domain::error::FaqError;
use crate::domain::model::{Language, Translatable};
use crate::domain::traits::Translator;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Fill every missing secondary-language variant before a save.
///
/// Variants that already hold text are never touched. Each missing one costs
/// exactly one translator call, bounded by `timeout`. The first failure is
/// returned as-is; the caller must not persist the record in that case.
///
/// Returns the languages that were filled.
pub async fn fill_missing_variants<T: Translatable>(
    translator: &dyn Translator,
    record: &mut T,
    timeout: Duration,
) -> Result<Vec<Language>, FaqError> {
    let missing = record.missing_variants();
    if missing.is_empty() {
        debug!("all variants present, skipping translation");
        return Ok(missing);
    }

    for &language in &missing {
        let text =
            translate_with_timeout(translator, record.source_text(), language, timeout).await?;
        record.set_variant(language, text);
    }

    info!(
        provider = translator.name(),
        languages = ?missing,
        "translated missing question variants"
    );
    Ok(missing)
}

async fn translate_with_timeout(
    translator: &dyn Translator,
    text: &str,
    language: Language,
    timeout: Duration,
) -> Result<String, FaqError> {
    let result = match tokio::time::timeout(timeout, translator.translate(text, language)).await {
        Ok(result) => result,
        Err(_) => Err(FaqError::Timeout {
            language,
            seconds: timeout.as_secs(),
        }),
    };

    match result {
        Ok(text) if !text.trim().is_empty() => Ok(text),
        Ok(_) => Err(FaqError::translation(language, "empty translation")),
        Err(e) => {
            warn!(provider = translator.name(), %language, error = %e, "translation failed");
            Err(e)
        }
    }
}
