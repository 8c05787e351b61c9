//! Frontend Models
//!
//! Languages, direction, webhook wire types and the status line.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Languages the page translates between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    German,
    Vietnamese,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::German => "de",
            Language::Vietnamese => "vi",
        }
    }

    /// Locale requested for speech output
    pub fn locale(self) -> &'static str {
        match self {
            Language::German => "de-DE",
            Language::Vietnamese => "vi-VN",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::German => "Deutsch",
            Language::Vietnamese => "Vietnamesisch",
        }
    }

    /// `"vi"` maps to Vietnamese, every other tag to German
    pub fn from_code(code: &str) -> Self {
        if code == "vi" {
            Language::Vietnamese
        } else {
            Language::German
        }
    }
}

/// Selected source -> target pairing (display only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    DeVi,
    ViDe,
}

impl Direction {
    pub fn toggled(self) -> Self {
        match self {
            Direction::DeVi => Direction::ViDe,
            Direction::ViDe => Direction::DeVi,
        }
    }

    pub fn source(self) -> Language {
        match self {
            Direction::DeVi => Language::German,
            Direction::ViDe => Language::Vietnamese,
        }
    }

    pub fn target(self) -> Language {
        match self {
            Direction::DeVi => Language::Vietnamese,
            Direction::ViDe => Language::German,
        }
    }

    /// (from, to) labels
    pub fn labels(self) -> (&'static str, &'static str) {
        (self.source().label(), self.target().label())
    }
}

/// Body posted to the webhook
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationRequest {
    pub text: String,
}

impl TranslationRequest {
    /// Trims the text and rejects it if nothing is left
    pub fn new(text: &str) -> AppResult<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::EmptyInput);
        }
        Ok(Self { text: text.to_string() })
    }
}

/// Webhook reply, success and error shapes share one object
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslationResponse {
    #[serde(default)]
    pub translated: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    /// Usually a string, but any JSON value is accepted
    #[serde(default)]
    pub raw: Option<serde_json::Value>,
}

impl TranslationResponse {
    /// An empty `error` string counts as no error
    pub fn into_result(self) -> AppResult<Translation> {
        if let Some(message) = self.error.filter(|e| !e.is_empty()) {
            return Err(AppError::Service { message, raw: self.raw.and_then(raw_text) });
        }
        Ok(Translation {
            translated: self.translated.unwrap_or_default(),
            source: self.source.filter(|s| !s.is_empty()),
            target: self.target.filter(|t| !t.is_empty()),
        })
    }
}

/// Empty strings and null count as no fallback text
fn raw_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Successful translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub translated: String,
    pub source: Option<String>,
    pub target: Option<String>,
}

impl Translation {
    /// "Detected: VI -> DE", empty unless both tags are known
    pub fn detected_line(&self) -> String {
        match (&self.source, &self.target) {
            (Some(source), Some(target)) => format!(
                "Detected: {} -> {}",
                source.to_uppercase(),
                target.to_uppercase()
            ),
            _ => String::new(),
        }
    }
}

/// Status line state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Translating,
    Done,
    Error(AppError),
}

impl Status {
    pub const IDLE_MESSAGE: &'static str = "Bereit";
    pub const TRANSLATING_MESSAGE: &'static str = "Uebersetze...";
    pub const DONE_MESSAGE: &'static str = "Fertig";

    pub fn message(&self) -> String {
        match self {
            Status::Idle => Self::IDLE_MESSAGE.to_string(),
            Status::Translating => Self::TRANSLATING_MESSAGE.to_string(),
            Status::Done => Self::DONE_MESSAGE.to_string(),
            Status::Error(err) => err.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Status::Error(_))
    }
}
