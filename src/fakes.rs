//! Test doubles for the service seams and the view

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::controller::TranslatorView;
use crate::error::{AppError, AppResult};
use crate::models::{Status, Translation, TranslationRequest};
use crate::services::{SpeechOutput, TranslationService, Utterance, Voice};

/// Replies come from a queue. A pending reply can be completed later
/// through the matching `oneshot::Sender`.
#[derive(Default)]
pub struct FakeTranslator {
    replies: RefCell<VecDeque<oneshot::Receiver<AppResult<Translation>>>>,
    pub requests: RefCell<Vec<TranslationRequest>>,
}

impl FakeTranslator {
    pub fn replying(reply: AppResult<Translation>) -> Self {
        let fake = Self::default();
        fake.push_reply(reply);
        fake
    }

    pub fn push_reply(&self, reply: AppResult<Translation>) {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(reply);
        self.replies.borrow_mut().push_back(rx);
    }

    pub fn push_pending(&self) -> oneshot::Sender<AppResult<Translation>> {
        let (tx, rx) = oneshot::channel();
        self.replies.borrow_mut().push_back(rx);
        tx
    }

    pub fn call_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl TranslationService for FakeTranslator {
    async fn translate(&self, request: &TranslationRequest) -> AppResult<Translation> {
        self.requests.borrow_mut().push(request.clone());
        let reply = self.replies.borrow_mut().pop_front();
        match reply {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(AppError::Connection("reply dropped".to_string()))),
            None => Err(AppError::Connection("no reply queued".to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechCall {
    Cancel,
    Speak(Utterance),
}

pub struct FakeSpeech {
    pub supported: bool,
    pub voices: Vec<Voice>,
    pub calls: RefCell<Vec<SpeechCall>>,
}

impl FakeSpeech {
    pub fn with_voices(voices: Vec<Voice>) -> Self {
        Self { supported: true, voices, calls: RefCell::new(Vec::new()) }
    }

    pub fn unsupported() -> Self {
        Self { supported: false, voices: Vec::new(), calls: RefCell::new(Vec::new()) }
    }

    pub fn spoken(&self) -> Vec<Utterance> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                SpeechCall::Speak(u) => Some(u.clone()),
                SpeechCall::Cancel => None,
            })
            .collect()
    }
}

impl SpeechOutput for FakeSpeech {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn voices(&self) -> Vec<Voice> {
        self.voices.clone()
    }

    fn cancel(&self) {
        self.calls.borrow_mut().push(SpeechCall::Cancel);
    }

    fn speak(&self, utterance: &Utterance) {
        self.calls.borrow_mut().push(SpeechCall::Speak(utterance.clone()));
    }
}

#[derive(Default)]
pub struct FakeView {
    pub input: RefCell<String>,
    pub output: RefCell<String>,
    pub status: RefCell<Status>,
    pub detected: RefCell<String>,
    pub labels: RefCell<(String, String)>,
}

impl FakeView {
    pub fn with_input(text: &str) -> Self {
        let view = Self::default();
        *view.input.borrow_mut() = text.to_string();
        view
    }

    pub fn status_message(&self) -> String {
        self.status.borrow().message()
    }
}

impl TranslatorView for FakeView {
    fn input_text(&self) -> String {
        self.input.borrow().clone()
    }

    fn output_text(&self) -> String {
        self.output.borrow().clone()
    }

    fn set_input_text(&self, text: &str) {
        *self.input.borrow_mut() = text.to_string();
    }

    fn set_output_text(&self, text: &str) {
        *self.output.borrow_mut() = text.to_string();
    }

    fn set_status(&self, status: &Status) {
        *self.status.borrow_mut() = status.clone();
    }

    fn set_detected(&self, line: &str) {
        *self.detected.borrow_mut() = line.to_string();
    }

    fn set_language_labels(&self, from: &str, to: &str) {
        *self.labels.borrow_mut() = (from.to_string(), to.to_string());
    }
}
