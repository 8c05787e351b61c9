//! Page Signals
//!
//! Reactive state backing the page, exposed to the controller as a
//! [`TranslatorView`].

use leptos::prelude::*;

use crate::controller::TranslatorView;
use crate::models::Status;

#[derive(Clone, Copy)]
pub struct PageSignals {
    pub input: RwSignal<String>,
    pub output: RwSignal<String>,
    pub status: RwSignal<Status>,
    /// "Detected: VI -> DE" or empty
    pub detected: RwSignal<String>,
    pub lang_from: RwSignal<String>,
    pub lang_to: RwSignal<String>,
}

impl PageSignals {
    pub fn new() -> Self {
        Self {
            input: RwSignal::new(String::new()),
            output: RwSignal::new(String::new()),
            status: RwSignal::new(Status::Idle),
            detected: RwSignal::new(String::new()),
            lang_from: RwSignal::new(String::new()),
            lang_to: RwSignal::new(String::new()),
        }
    }
}

impl TranslatorView for PageSignals {
    fn input_text(&self) -> String {
        self.input.get_untracked()
    }

    fn output_text(&self) -> String {
        self.output.get_untracked()
    }

    fn set_input_text(&self, text: &str) {
        self.input.set(text.to_string());
    }

    fn set_output_text(&self, text: &str) {
        self.output.set(text.to_string());
    }

    fn set_status(&self, status: &Status) {
        self.status.set(status.clone());
    }

    fn set_detected(&self, line: &str) {
        self.detected.set(line.to_string());
    }

    fn set_language_labels(&self, from: &str, to: &str) {
        self.lang_from.set(from.to_string());
        self.lang_to.set(to.to_string());
    }
}
