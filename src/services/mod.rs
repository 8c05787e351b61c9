//! External Services
//!
//! Seams between the controller and the outside world: the translation
//! webhook and the platform speech engine.

mod speech;
mod webhook;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{Language, Translation, TranslationRequest};

pub use speech::{pick_voice, BrowserSpeech};
pub use webhook::{parse_webhook_reply, WebhookTranslator};

/// Request/response translation backend
///
/// One attempt per call, no retries.
#[async_trait(?Send)]
pub trait TranslationService {
    async fn translate(&self, request: &TranslationRequest) -> AppResult<Translation>;
}

/// A voice offered by the speech engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    /// Engine-unique identifier (voiceURI in the browser)
    pub id: String,
    pub name: String,
    pub lang: String,
}

/// A single playback request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub text: String,
    pub locale: &'static str,
    /// None = platform default voice
    pub voice: Option<Voice>,
}

impl Utterance {
    pub fn new(text: &str, language: Language, voices: &[Voice]) -> Self {
        Self {
            text: text.to_string(),
            locale: language.locale(),
            voice: pick_voice(voices, language).cloned(),
        }
    }
}

/// Fire-and-forget text-to-speech
pub trait SpeechOutput {
    fn is_supported(&self) -> bool;

    fn voices(&self) -> Vec<Voice>;

    /// Stop whatever is currently playing
    fn cancel(&self);

    fn speak(&self, utterance: &Utterance);
}
