use crate::application::translate::fill_missing_variants;
use crate::domain::error::FaqError;
use crate::domain::model::{Faq, FaqUpdate, NewFaq};
use crate::state::AppState;
use tracing::info;

/// Validate, translate missing variants, then insert.
pub async fn create_faq(state: &AppState, mut draft: NewFaq) -> Result<Faq, FaqError> {
    draft.validate()?;

    fill_missing_variants(state.translator.as_ref(), &mut draft, state.translation_timeout())
        .await?;

    let faq = state.repo.create(draft).await?;
    info!(id = faq.id, "created faq");
    Ok(faq)
}

/// Apply an edit, translate whatever variants are now missing, then store.
///
/// Editing the question alone keeps the existing variants; pass
/// `retranslate` to have them generated again.
pub async fn update_faq(state: &AppState, id: i64, changes: FaqUpdate) -> Result<Faq, FaqError> {
    let mut faq = state.repo.get(id).await?.ok_or(FaqError::NotFound(id))?;
    changes.apply(&mut faq)?;

    fill_missing_variants(state.translator.as_ref(), &mut faq, state.translation_timeout())
        .await?;

    let faq = state.repo.update(&faq).await?;
    info!(id = faq.id, "updated faq");
    Ok(faq)
}
