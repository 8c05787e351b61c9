//! Status Line Component

use leptos::prelude::*;

use crate::models::Status;

/// Status message plus the detected-language line
#[component]
pub fn StatusLine(
    #[prop(into)] status: Signal<Status>,
    #[prop(into)] detected: Signal<String>,
) -> impl IntoView {
    let status_class = move || {
        if status.get().is_error() {
            "status error"
        } else {
            "status"
        }
    };

    view! {
        <div class="status-row">
            <p class=status_class id="status">{move || status.get().message()}</p>
            <p class="detected" id="detected">{move || detected.get()}</p>
        </div>
    }
}
