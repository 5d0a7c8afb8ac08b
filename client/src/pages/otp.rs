//! One-time-password challenge after sign-in.

#[cfg(test)]
#[path = "otp_test.rs"]
mod otp_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::{api, endpoints};
use crate::state::session::SessionState;
use crate::util::nav;

pub const INVALID_OTP: &str = "Invalid OTP";

/// Authenticator codes are six digits; whitespace is ignored.
fn normalize_otp(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    (digits.len() == 6 && digits.chars().all(|c| c.is_ascii_digit())).then_some(digits)
}

#[component]
pub fn OtpPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let code = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(otp) = normalize_otp(&code.get()) else {
            error.set(Some(INVALID_OTP.to_owned()));
            return;
        };
        let state = session.get_untracked();
        let username = state.username_or_empty();
        let request = match endpoints::verify_otp(&username, &otp) {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e.user_message()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::send_empty(&request).await {
                Ok(()) => {
                    busy.set(false);
                    navigate(nav::HOME, NavigateOptions::default());
                }
                Err(e) => {
                    leptos::logging::warn!("otp rejected: {e}");
                    error.set(Some(INVALID_OTP.to_owned()));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Two-factor verification"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input auth-input--otp"
                        type="text"
                        inputmode="numeric"
                        maxlength="6"
                        placeholder="123456"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Verify"
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <a href=nav::LOGIN>"Back to sign in"</a>
            </div>
        </div>
    }
}
