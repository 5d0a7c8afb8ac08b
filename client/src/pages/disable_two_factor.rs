//! Turn off 2FA after re-entering the password.

use leptos::prelude::*;

use crate::components::admin_header::AdminHeader;
use crate::net::audit::AuditEntry;
use crate::net::types::TokenResponse;
use crate::net::{api, endpoints};
use crate::state::session::SessionState;
use crate::util::clock::now_ms;

#[component]
pub fn DisableTwoFactorPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let done = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let pass = password.get();
        if pass.is_empty() {
            error.set(Some("Please enter your password.".to_owned()));
            return;
        }
        let username = session.get_untracked().username_or_empty();
        busy.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            let result = async {
                let token: TokenResponse = api::send(&endpoints::login(&username, &pass)).await?;
                let token = token.access_token;
                api::send_empty(&endpoints::disable_two_factor(&username, Some(&token))).await?;
                Ok::<_, crate::net::error::ApiError>(token)
            }
            .await;
            match result {
                Ok(token) => {
                    let entry = AuditEntry::two_factor_disabled(&username, now_ms());
                    if let Err(e) = api::record_audit(&entry, Some(&token)).await {
                        leptos::logging::warn!("2fa audit failed: {e}");
                    }
                    password.set(String::new());
                    done.set(true);
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            busy.set(false);
        });
    };

    view! {
        <AdminHeader title="Disable 2FA"/>
        <main class="page page--narrow">
            <Show
                when=move || done.get()
                fallback=move || {
                    view! {
                        <form class="auth-form" on:submit=on_submit>
                            <p>"Confirm your password to turn off two-factor authentication."</p>
                            <input
                                class="auth-input"
                                type="password"
                                placeholder="Password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button class="btn btn--danger" type="submit" disabled=move || busy.get()>
                                "Disable 2FA"
                            </button>
                        </form>
                    }
                }
            >
                <p class="form-success">"Two-factor authentication has been disabled."</p>
            </Show>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </main>
    }
}
