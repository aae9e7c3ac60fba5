use crate::domain::error::FaqError;
use crate::domain::model::Language;
use crate::domain::traits::Translator;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

const GOOGLE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Google translator over the public web endpoint
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new(client: Client) -> Self {
        Self::with_endpoint(client, GOOGLE_ENDPOINT)
    }

    pub fn with_endpoint(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, target: Language) -> Result<String, FaqError> {
        let params = [
            ("client", "gtx"),
            ("sl", "auto"),
            ("tl", target.code()),
            ("dt", "t"),
            ("q", text),
        ];

        let response = self
            .client
            .get(&self.endpoint)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        parse_response(&response, target)
    }

    fn name(&self) -> &'static str {
        "google"
    }
}

/// Join the translated segments of a `translate_a/single` response.
///
/// The body is a nested array whose first element lists sentence segments,
/// each segment starting with the translated text.
fn parse_response(response: &Value, target: Language) -> Result<String, FaqError> {
    let segments = response
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| FaqError::translation(target, "unexpected response shape"))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.trim().is_empty() {
        return Err(FaqError::translation(target, "empty translation"));
    }
    Ok(translated)
}
