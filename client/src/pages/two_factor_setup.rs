//! First-login 2FA enrolment: show the QR code, save the secret, continue to
//! the OTP challenge.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::TwoFactorSetup;
use crate::net::{api, endpoints};
use crate::state::session::SessionState;
use crate::util::nav;
use crate::util::request::TaskScope;

#[component]
pub fn TwoFactorSetupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let setup = RwSignal::new(None::<TwoFactorSetup>);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let scope = TaskScope::for_current_owner();

    let load_scope = scope.clone();
    Effect::new(move || {
        let scope = load_scope.clone();
        let username = session.get_untracked().username_or_empty();
        leptos::task::spawn_local(async move {
            let result = api::send::<TwoFactorSetup>(&endpoints::two_factor_setup(&username)).await;
            if !scope.is_alive() {
                return;
            }
            match result {
                Ok(data) => setup.set(Some(data)),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    });

    let on_confirm = move |_| {
        let Some(data) = setup.get_untracked() else {
            return;
        };
        saving.set(true);
        let username = session.get_untracked().username_or_empty();
        let navigate = navigate.clone();
        let scope = scope.clone();
        leptos::task::spawn_local(async move {
            let result = api::send_empty(&endpoints::save_two_factor_secret(&username, &data.secret)).await;
            if !scope.is_alive() {
                return;
            }
            saving.set(false);
            match result {
                Ok(()) => navigate(nav::OTP, NavigateOptions::default()),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Set up two-factor authentication"</h1>
                <p>"Scan the QR code with your authenticator app, then confirm."</p>
                {move || {
                    setup
                        .get()
                        .map(|data| {
                            let src = data.qr_data_url();
                            view! {
                                <img class="qr-code" src=src alt="2FA QR code"/>
                                <p class="secret">"Secret: " <code>{data.secret}</code></p>
                            }
                        })
                }}
                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button
                    class="btn btn--primary"
                    disabled=move || setup.with(Option::is_none) || saving.get()
                    on:click=on_confirm
                >
                    "I've scanned the code"
                </button>
            </div>
        </div>
    }
}
