//! Translator Controller
//!
//! Owns the page state (direction, last target language) and runs the four
//! user actions against an abstract view and the injected services.

use std::cell::Cell;

use crate::error::{AppError, AppResult};
use crate::models::{Direction, Language, Status, TranslationRequest};
use crate::services::{SpeechOutput, TranslationService, Utterance};

/// What the controller reads from and writes to the page
pub trait TranslatorView {
    fn input_text(&self) -> String;
    fn output_text(&self) -> String;
    fn set_input_text(&self, text: &str);
    fn set_output_text(&self, text: &str);
    fn set_status(&self, status: &Status);
    /// Empty string clears the line
    fn set_detected(&self, line: &str);
    fn set_language_labels(&self, from: &str, to: &str);
}

pub struct TranslatorController<V, T, S> {
    view: V,
    translator: T,
    speech: S,
    direction: Cell<Direction>,
    /// Updated only by successful translations, read by speak
    last_target: Cell<Language>,
    /// Sequence for log correlation of overlapping requests
    next_request: Cell<u64>,
}

impl<V, T, S> TranslatorController<V, T, S>
where
    V: TranslatorView,
    T: TranslationService,
    S: SpeechOutput,
{
    pub fn new(view: V, translator: T, speech: S) -> Self {
        Self {
            view,
            translator,
            speech,
            direction: Cell::new(Direction::default()),
            last_target: Cell::new(Language::Vietnamese),
            next_request: Cell::new(1),
        }
    }

    /// Render the initial labels and idle status
    pub fn init(&self) {
        self.render_labels();
        self.view.set_status(&Status::Idle);
    }

    #[cfg(test)]
    pub fn direction(&self) -> Direction {
        self.direction.get()
    }

    pub fn last_target(&self) -> Language {
        self.last_target.get()
    }

    #[cfg(test)]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn speech(&self) -> &S {
        &self.speech
    }

    /// Send the input text to the translation service.
    ///
    /// Overlapping calls are not sequenced: whichever reply resolves last
    /// is what the page shows.
    pub async fn translate(&self) -> AppResult<()> {
        let request = match TranslationRequest::new(&self.view.input_text()) {
            Ok(request) => request,
            Err(err) => return Err(self.fail(err)),
        };

        let id = self.next_request.get();
        self.next_request.set(id + 1);
        log::info!("[TRANSLATE] #{} sending {} chars", id, request.text.chars().count());

        self.view.set_status(&Status::Translating);
        self.view.set_detected("");

        match self.translator.translate(&request).await {
            Ok(translation) => {
                self.view.set_output_text(&translation.translated);
                let target = translation
                    .target
                    .as_deref()
                    .map(Language::from_code)
                    .unwrap_or_else(|| self.direction.get().target());
                self.last_target.set(target);
                self.view.set_detected(&translation.detected_line());
                self.view.set_status(&Status::Done);
                log::info!("[TRANSLATE] #{} done, target={}", id, target.code());
                Ok(())
            }
            Err(err) => {
                log::warn!("[TRANSLATE] #{} failed ({:?}): {:?}", id, err.kind(), err);
                if let Some(raw) = err.raw_output() {
                    self.view.set_output_text(raw);
                }
                Err(self.fail(err))
            }
        }
    }

    /// Reset both text areas, the detected line and the status
    pub fn clear(&self) {
        self.view.set_input_text("");
        self.view.set_output_text("");
        self.view.set_detected("");
        self.view.set_status(&Status::Idle);
    }

    /// Read the output aloud in the last target language.
    /// Cancels any utterance still playing.
    pub fn speak(&self) -> AppResult<()> {
        let output = self.view.output_text();
        let text = output.trim();
        if text.is_empty() {
            return Err(self.fail(AppError::NothingToSpeak));
        }
        if !self.speech.is_supported() {
            return Err(self.fail(AppError::SpeechUnsupported));
        }

        let utterance = Utterance::new(text, self.last_target.get(), &self.speech.voices());
        log::debug!(
            "[SPEECH] locale={} voice={:?}",
            utterance.locale,
            utterance.voice.as_ref().map(|v| v.name.as_str())
        );

        self.speech.cancel();
        self.speech.speak(&utterance);
        Ok(())
    }

    /// Flip the direction labels. The request payload is unaffected.
    pub fn swap_direction(&self) {
        self.direction.set(self.direction.get().toggled());
        self.render_labels();
    }

    fn render_labels(&self) {
        let (from, to) = self.direction.get().labels();
        self.view.set_language_labels(from, to);
    }

    fn fail(&self, err: AppError) -> AppError {
        self.view.set_status(&Status::Error(err.clone()));
        err
    }
}
