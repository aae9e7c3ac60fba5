use crate::domain::error::FaqError;
use crate::domain::model::Language;
use crate::domain::traits::Translator;
use crate::infrastructure::config::YoudaoConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

const YOUDAO_ENDPOINT: &str = "https://openapi.youdao.com/api";

// Youdao API Response structures
#[derive(Deserialize, Debug)]
struct YoudaoResponse {
    #[serde(rename = "translation")]
    translations: Option<Vec<String>>,
    #[serde(rename = "errorCode")]
    error_code: String,
}

/// Youdao translator implementation (signed v3 API)
pub struct YoudaoTranslator {
    client: Client,
    api_id: String,
    api_key: String,
}

impl YoudaoTranslator {
    pub fn new(client: Client, config: YoudaoConfig) -> Result<Self, FaqError> {
        let api_id = config.api_id.unwrap_or_default();
        let api_key = config.api_key.unwrap_or_default();

        if api_id.is_empty() {
            return Err(FaqError::Config("Youdao API ID not configured".to_string()));
        }
        if api_key.is_empty() {
            return Err(FaqError::Config("Youdao API Key not configured".to_string()));
        }

        Ok(Self {
            client,
            api_id,
            api_key,
        })
    }
}

#[async_trait]
impl Translator for YoudaoTranslator {
    async fn translate(&self, text: &str, target: Language) -> Result<String, FaqError> {
        let salt = Uuid::new_v4().to_string();
        let curtime = SystemTime::now()
            .duration_since(UNIX_EPOCH)?
            .as_secs()
            .to_string();
        let signature = sign(&self.api_id, text, &salt, &curtime, &self.api_key);

        let params = [
            ("q", text),
            ("from", "auto"),
            ("to", target.code()),
            ("appKey", self.api_id.as_str()),
            ("salt", salt.as_str()),
            ("sign", signature.as_str()),
            ("signType", "v3"),
            ("curtime", curtime.as_str()),
        ];

        let response = self
            .client
            .get(YOUDAO_ENDPOINT)
            .query(&params)
            .send()
            .await?
            .json::<YoudaoResponse>()
            .await?;

        if response.error_code != "0" {
            return Err(FaqError::Api(format!(
                "Youdao API Error {}: {}",
                response.error_code,
                describe_error(&response.error_code)
            )));
        }

        let translated = response.translations.unwrap_or_default().join("\n");
        if translated.trim().is_empty() {
            return Err(FaqError::translation(target, "empty translation"));
        }
        Ok(translated)
    }

    fn name(&self) -> &'static str {
        "youdao"
    }
}

/// sign = sha256(appKey + input(q) + salt + curtime + appSecret)
fn sign(api_id: &str, query: &str, salt: &str, curtime: &str, api_key: &str) -> String {
    let raw_sign = format!("{}{}{}{}{}", api_id, truncate_input(query), salt, curtime, api_key);
    let mut hasher = Sha256::new();
    hasher.update(raw_sign);
    hex::encode(hasher.finalize())
}

/// First 10 chars + char count + last 10 chars, for inputs over 20 chars.
fn truncate_input(query: &str) -> String {
    let chars: Vec<char> = query.chars().collect();
    if chars.len() <= 20 {
        return query.to_string();
    }
    let head: String = chars[..10].iter().collect();
    let tail: String = chars[chars.len() - 10..].iter().collect();
    format!("{}{}{}", head, chars.len(), tail)
}

fn describe_error(code: &str) -> &'static str {
    match code {
        "101" => "Missing required parameter",
        "102" => "Unsupported language type",
        "103" => "Text too long",
        "108" => "Invalid appKey or signature error (check api_key)",
        "202" => "Missing signature",
        "203" => "Signature verification failed",
        "302" => "Translation query failed",
        "303" => "Server-side exception",
        "401" => "Account balance insufficient",
        "411" => "Access frequency limited",
        _ => "Unknown error",
    }
}
