//! Non-blocking inactivity warning.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn IdleBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <Show when=move || ui.with(|u| u.idle_warning)>
            <div class="idle-banner" role="alert">
                <span>"You will be logged out in 5 minutes due to inactivity."</span>
                <button class="btn btn--small" on:click=move |_| ui.update(|u| u.idle_warning = false)>
                    "Dismiss"
                </button>
            </div>
        </Show>
    }
}
