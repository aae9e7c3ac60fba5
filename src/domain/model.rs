use crate::domain::error::FaqError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Code of the authoritative source language, used when no `lang` is requested.
pub const PRIMARY_LANGUAGE: &str = "en";

// 受支持的次要语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "bn")]
    Bengali,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Hindi, Language::Bengali];

    pub fn code(self) -> &'static str {
        match self {
            Language::Hindi => "hi",
            Language::Bengali => "bn",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match normalize_lang(code).as_str() {
            "hi" => Some(Language::Hindi),
            "bn" => Some(Language::Bengali),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Canonical form of a requested language code: trimmed, lowercased,
/// and the primary language when nothing usable was supplied.
pub fn normalize_lang(code: &str) -> String {
    let code = code.trim();
    if code.is_empty() {
        PRIMARY_LANGUAGE.to_string()
    } else {
        code.to_lowercase()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Anything carrying a primary question and per-language variants.
///
/// Implemented by both drafts and stored records so the translation hook
/// can run before a create as well as before an update.
pub trait Translatable {
    fn source_text(&self) -> &str;

    /// The variant for `language`, or `None` when it is missing or blank.
    fn variant(&self, language: Language) -> Option<&str>;

    fn set_variant(&mut self, language: Language, text: String);

    fn missing_variants(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|lang| self.variant(*lang).is_none())
            .collect()
    }
}

// 已持久化的 FAQ 记录
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Faq {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub question_hi: Option<String>,
    pub question_bn: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Translatable for Faq {
    fn source_text(&self) -> &str {
        &self.question
    }

    fn variant(&self, language: Language) -> Option<&str> {
        match language {
            Language::Hindi => non_empty(&self.question_hi),
            Language::Bengali => non_empty(&self.question_bn),
        }
    }

    fn set_variant(&mut self, language: Language, text: String) {
        match language {
            Language::Hindi => self.question_hi = Some(text),
            Language::Bengali => self.question_bn = Some(text),
        }
    }
}

// 待创建的 FAQ 草稿
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewFaq {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub question_hi: Option<String>,
    #[serde(default)]
    pub question_bn: Option<String>,
}

impl NewFaq {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            question_hi: None,
            question_bn: None,
        }
    }

    pub fn with_variant(mut self, language: Language, text: impl Into<String>) -> Self {
        self.set_variant(language, text.into());
        self
    }

    pub fn validate(&self) -> Result<(), FaqError> {
        if self.question.trim().is_empty() {
            return Err(FaqError::Validation("question is required".to_string()));
        }
        Ok(())
    }
}

impl Translatable for NewFaq {
    fn source_text(&self) -> &str {
        &self.question
    }

    fn variant(&self, language: Language) -> Option<&str> {
        match language {
            Language::Hindi => non_empty(&self.question_hi),
            Language::Bengali => non_empty(&self.question_bn),
        }
    }

    fn set_variant(&mut self, language: Language, text: String) {
        match language {
            Language::Hindi => self.question_hi = Some(text),
            Language::Bengali => self.question_bn = Some(text),
        }
    }
}

// 部分更新
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaqUpdate {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub question_hi: Option<String>,
    #[serde(default)]
    pub question_bn: Option<String>,
    /// Drop existing variants so they are translated again from the new text.
    #[serde(default)]
    pub retranslate: bool,
}

impl FaqUpdate {
    pub fn apply(self, faq: &mut Faq) -> Result<(), FaqError> {
        if let Some(question) = self.question {
            if question.trim().is_empty() {
                return Err(FaqError::Validation("question cannot be empty".to_string()));
            }
            faq.question = question;
        }
        if let Some(answer) = self.answer {
            faq.answer = answer;
        }
        if self.retranslate {
            faq.question_hi = None;
            faq.question_bn = None;
        }
        if let Some(hi) = self.question_hi {
            faq.question_hi = Some(hi);
        }
        if let Some(bn) = self.question_bn {
            faq.question_bn = Some(bn);
        }
        Ok(())
    }
}

// API 返回的列表条目
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FaqItem {
    pub id: i64,
    pub question: String,
    pub answer: String,
}
