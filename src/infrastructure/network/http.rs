// HTTP client utilities
use crate::domain::error::FaqError;
use crate::infrastructure::config::TranslationConfig;
use reqwest::Client;

/// Create the shared HTTP client used by translation providers
pub fn create_client(config: &TranslationConfig) -> Result<Client, FaqError> {
    let mut builder = Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(std::time::Duration::from_secs(30))
        .timeout(config.timeout())
        .user_agent(concat!("faq/", env!("CARGO_PKG_VERSION")));

    if let Some(proxy) = config.http_proxy.as_deref().filter(|p| !p.is_empty()) {
        builder = builder.proxy(reqwest::Proxy::all(proxy)?);
    }

    Ok(builder.build()?)
}
