//! Per-record question resolution and its cache

mod common;

use common::{fake_translation, state_with, test_state, FakeTranslator};
use faq_rust::application::query::{get_faq, translated_question};
use faq_rust::application::save::create_faq;
use faq_rust::domain::model::{Faq, Language, NewFaq};
use faq_rust::domain::traits::CachedValue;
use faq_rust::infrastructure::config::Config;
use std::sync::Arc;

async fn django(state: &faq_rust::state::AppState) -> Faq {
    let draft = NewFaq::new("What is Django?", "Django is a web framework.")
        .with_variant(Language::Hindi, "डजांगो क्या है?")
        .with_variant(Language::Bengali, "ডjango কি?");
    create_faq(state, draft).await.unwrap()
}

#[tokio::test]
async fn test_supported_languages_resolve_to_their_variant() {
    let (state, _) = test_state().await;
    let faq = django(&state).await;

    assert_eq!(translated_question(&state, &faq, "hi"), "डजांगो क्या है?");
    assert_eq!(translated_question(&state, &faq, "bn"), "ডjango কি?");
}

#[tokio::test]
async fn test_primary_and_unsupported_fall_back_to_question() {
    let (state, _) = test_state().await;
    let faq = django(&state).await;

    for lang in ["en", "", "fr", "xx-garbage", "zh"] {
        assert_eq!(translated_question(&state, &faq, lang), "What is Django?", "lang={lang}");
    }
}

#[tokio::test]
async fn test_codes_are_case_insensitive() {
    let (state, _) = test_state().await;
    let faq = django(&state).await;

    assert_eq!(translated_question(&state, &faq, " HI "), "डजांगो क्या है?");
}

#[tokio::test]
async fn test_resolution_is_cached_under_record_and_language() {
    let (state, _) = test_state().await;
    let faq = django(&state).await;

    let hindi = translated_question(&state, &faq, "hi");

    assert_eq!(
        state.cache.get(&state.question_key(faq.id, "hi")),
        Some(CachedValue::Text(hindi))
    );
    assert!(state.cache.get(&state.question_key(faq.id, "bn")).is_none());
}

#[tokio::test]
async fn test_cached_value_wins_over_changed_record() {
    let (state, translator) = test_state().await;
    let mut faq = django(&state).await;

    let first = translated_question(&state, &faq, "hi");
    faq.question_hi = Some("बदला हुआ".to_string());
    let second = translated_question(&state, &faq, "hi");

    assert_eq!(first, second);
    assert_eq!(translator.calls(), 0);
}

#[tokio::test]
async fn test_expired_entry_is_recomputed() {
    let mut config = Config::default();
    config.cache.ttl_secs = 0;
    let state = state_with(Arc::new(FakeTranslator::default()), config).await;
    let mut faq = django(&state).await;

    assert_eq!(translated_question(&state, &faq, "hi"), "डजांगो क्या है?");
    faq.question_hi = Some("नया".to_string());

    assert_eq!(translated_question(&state, &faq, "hi"), "नया");
}

#[tokio::test]
async fn test_record_without_variants_uses_translated_text_after_save() {
    let (state, translator) = test_state().await;
    let faq = create_faq(&state, NewFaq::new("What is Rust?", "")).await.unwrap();

    assert_eq!(
        translated_question(&state, &faq, "hi"),
        fake_translation("What is Rust?", Language::Hindi)
    );
    translated_question(&state, &faq, "hi");
    assert_eq!(translator.calls(), Language::ALL.len());
}

#[tokio::test]
async fn test_unsaved_variant_falls_back_to_primary() {
    let (state, _) = test_state().await;
    let faq = Faq {
        id: 7,
        question: "What is Rust?".to_string(),
        answer: String::new(),
        question_hi: None,
        question_bn: Some(String::new()),
        created_at: 0,
        updated_at: 0,
    };

    assert_eq!(translated_question(&state, &faq, "hi"), "What is Rust?");
    assert_eq!(translated_question(&state, &faq, "bn"), "What is Rust?");
}

#[tokio::test]
async fn test_get_faq_single_item() {
    let (state, _) = test_state().await;
    let faq = django(&state).await;

    let item = get_faq(&state, faq.id, Some("bn")).await.unwrap().unwrap();
    assert_eq!(item.id, faq.id);
    assert_eq!(item.question, "ডjango কি?");
    assert_eq!(item.answer, "Django is a web framework.");

    assert!(get_faq(&state, faq.id + 100, None).await.unwrap().is_none());
}
