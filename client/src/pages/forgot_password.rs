//! Request a password-reset email.

use leptos::prelude::*;

use crate::net::types::Acknowledgement;
use crate::net::{api, endpoints};
use crate::util::nav;

const SENT: &str = "If the address is registered, a reset link has been sent.";

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let message = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let address = email.get().trim().to_owned();
        if address.is_empty() || !address.contains('@') {
            error.set(Some("Please enter a valid email address.".to_owned()));
            return;
        }
        let request = match endpoints::forgot_password(&address) {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e.user_message()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        message.set(None);
        leptos::task::spawn_local(async move {
            match api::send::<Acknowledgement>(&request).await {
                Ok(ack) => message.set(Some(ack.text_or(SENT))),
                Err(e) => error.set(Some(e.user_message())),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Forgot password"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Send reset link"
                    </button>
                </form>
                <Show when=move || message.get().is_some()>
                    <p class="form-success">{move || message.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <a href=nav::LOGIN>"Back to sign in"</a>
            </div>
        </div>
    }
}
