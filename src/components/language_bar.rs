//! Language Bar Component
//!
//! From/to labels with the swap button between them.

use leptos::prelude::*;

#[component]
pub fn LanguageBar(
    #[prop(into)] from: Signal<String>,
    #[prop(into)] to: Signal<String>,
    on_swap: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="language-bar">
            <span class="lang-label" id="langFrom">{move || from.get()}</span>
            <button
                class="swap-btn"
                id="swapBtn"
                title="Richtung tauschen"
                on:click=move |_| on_swap.run(())
            >
                "⇄"
            </button>
            <span class="lang-label" id="langTo">{move || to.get()}</span>
        </div>
    }
}
