pub mod google;
pub mod http;
pub mod youdao;

use crate::domain::error::FaqError;
use crate::domain::traits::Translator;
use crate::infrastructure::config::{Config, Provider};
use reqwest::Client;
use std::sync::Arc;

/// Build the translator selected by `[translation] provider`
pub fn build_translator(client: Client, config: &Config) -> Result<Arc<dyn Translator>, FaqError> {
    let translator: Arc<dyn Translator> = match config.translation.provider {
        Provider::Google => Arc::new(google::GoogleTranslator::new(client)),
        Provider::Youdao => Arc::new(youdao::YoudaoTranslator::new(client, config.youdao.clone())?),
    };
    Ok(translator)
}
