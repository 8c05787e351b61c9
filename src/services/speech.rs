//! Browser Speech Synthesis
//!
//! `window.speechSynthesis` behind the [`SpeechOutput`] seam.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{SpeechSynthesis, SpeechSynthesisUtterance, SpeechSynthesisVoice};

use super::{SpeechOutput, Utterance, Voice};
use crate::models::Language;

/// Best-effort voice match: language prefix first, then substring
pub fn pick_voice(voices: &[Voice], language: Language) -> Option<&Voice> {
    let tag = language.code();
    voices
        .iter()
        .find(|v| v.lang.to_lowercase().starts_with(tag))
        .or_else(|| voices.iter().find(|v| v.lang.to_lowercase().contains(tag)))
}

pub struct BrowserSpeech {
    /// None when the browser has no speechSynthesis
    synthesis: Option<SpeechSynthesis>,
}

impl BrowserSpeech {
    pub fn new() -> Self {
        let synthesis = web_sys::window().and_then(|window| {
            let present = js_sys::Reflect::has(&window, &JsValue::from_str("speechSynthesis"))
                .unwrap_or(false);
            if present {
                window.speech_synthesis().ok()
            } else {
                None
            }
        });
        if synthesis.is_none() {
            log::warn!("[SPEECH] speechSynthesis not available");
        }
        Self { synthesis }
    }

    /// Run `callback` whenever the browser's voice list changes
    pub fn on_voices_changed(&self, callback: impl FnMut() + 'static) {
        let Some(synthesis) = &self.synthesis else { return };
        let closure = Closure::<dyn FnMut()>::new(callback);
        synthesis.set_onvoiceschanged(Some(closure.as_ref().unchecked_ref()));
        // Lives as long as the page
        closure.forget();
    }

    fn platform_voices(synthesis: &SpeechSynthesis) -> Vec<SpeechSynthesisVoice> {
        synthesis
            .get_voices()
            .iter()
            .filter_map(|v| v.dyn_into::<SpeechSynthesisVoice>().ok())
            .collect()
    }
}

impl SpeechOutput for BrowserSpeech {
    fn is_supported(&self) -> bool {
        self.synthesis.is_some()
    }

    fn voices(&self) -> Vec<Voice> {
        let Some(synthesis) = &self.synthesis else { return Vec::new() };
        Self::platform_voices(synthesis)
            .iter()
            .map(|v| Voice {
                id: v.voice_uri(),
                name: v.name(),
                lang: v.lang(),
            })
            .collect()
    }

    fn cancel(&self) {
        if let Some(synthesis) = &self.synthesis {
            synthesis.cancel();
        }
    }

    fn speak(&self, utterance: &Utterance) {
        let Some(synthesis) = &self.synthesis else { return };

        let js_utterance = match SpeechSynthesisUtterance::new_with_text(&utterance.text) {
            Ok(u) => u,
            Err(e) => {
                log::error!("[SPEECH] Failed to create utterance: {:?}", e);
                return;
            }
        };
        js_utterance.set_lang(utterance.locale);

        if let Some(voice) = &utterance.voice {
            let handle = Self::platform_voices(synthesis)
                .into_iter()
                .find(|v| v.voice_uri() == voice.id);
            js_utterance.set_voice(handle.as_ref());
        }

        synthesis.speak(&js_utterance);
    }
}
