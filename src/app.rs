//! Sprachbruecke Frontend App
//!
//! Input and output text areas, the action buttons and the keyboard
//! shortcut, all wired to one [`TranslatorController`].

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{LanguageBar, StatusLine};
use crate::config::AppConfig;
use crate::context::PageSignals;
use crate::controller::TranslatorController;
use crate::services::{pick_voice, BrowserSpeech, SpeechOutput, WebhookTranslator};

type PageController = TranslatorController<PageSignals, WebhookTranslator, BrowserSpeech>;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();
    let page = PageSignals::new();

    let controller: Rc<PageController> = Rc::new(TranslatorController::new(
        page,
        WebhookTranslator::new(&config),
        BrowserSpeech::new(),
    ));
    controller.init();
    log::info!("[APP] Translator ready, webhook={}", config.webhook_url);

    // Voices load asynchronously in most browsers
    let watcher = Rc::downgrade(&controller);
    controller.speech().on_voices_changed(move || {
        let Some(controller) = watcher.upgrade() else { return };
        let voices = controller.speech().voices();
        let target = controller.last_target();
        log::debug!(
            "[SPEECH] {} voices available, match for {}: {:?}",
            voices.len(),
            target.code(),
            pick_voice(&voices, target).map(|v| v.name.as_str())
        );
    });

    let controller = StoredValue::new_local(controller);

    let translate = move || {
        let controller = controller.get_value();
        spawn_local(async move {
            if let Err(e) = controller.translate().await {
                log::debug!("[APP] translate ended with {:?}", e.kind());
            }
        });
    };

    let on_swap = Callback::new(move |_| controller.get_value().swap_direction());

    view! {
        <main class="translator">
            <h1>"Deutsch ⇄ Vietnamesisch"</h1>

            <LanguageBar from=page.lang_from to=page.lang_to on_swap=on_swap />

            <div class="panes">
                <textarea
                    id="inputText"
                    placeholder="Text eingeben... (Strg/Cmd + Enter zum Uebersetzen)"
                    prop:value=move || page.input.get()
                    on:input=move |ev| page.input.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if (ev.ctrl_key() || ev.meta_key()) && ev.key() == "Enter" {
                            translate();
                        }
                    }
                />
                <textarea
                    id="outputText"
                    placeholder="Uebersetzung"
                    prop:value=move || page.output.get()
                    on:input=move |ev| page.output.set(event_target_value(&ev))
                />
            </div>

            <div class="actions">
                <button id="translateBtn" class="primary" on:click=move |_| translate()>
                    "Uebersetzen"
                </button>
                <button id="clearBtn" on:click=move |_| controller.get_value().clear()>
                    "Leeren"
                </button>
                <button id="speakBtn" on:click=move |_| {
                    if let Err(e) = controller.get_value().speak() {
                        log::debug!("[APP] speak ended with {:?}", e.kind());
                    }
                }>
                    "Vorlesen"
                </button>
            </div>

            <StatusLine status=page.status detected=page.detected />
        </main>
    }
}
