//! Sign-in page: credentials, CAPTCHA gate, and post-login routing.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only public entry point besides the password-recovery pages. The
//! outcome of `POST /token` is classified by [`crate::util::login_flow`];
//! this page performs the side effects (session, audit entries, navigation).

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::audit::AuditEntry;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::clock::now_ms;
use crate::util::login_flow::{self, LoginFailure};
use crate::util::nav;

/// Attempts left before the CAPTCHA is required, for the hint text.
fn attempts_hint(attempts: u32) -> Option<String> {
    if attempts == 0 || login_flow::captcha_required(attempts) {
        return None;
    }
    let left = login_flow::CAPTCHA_THRESHOLD - attempts;
    Some(format!("{left} attempt(s) left before verification is required."))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let captcha_ack = RwSignal::new(false);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let info = RwSignal::new(None::<String>);

    Effect::new(move || {
        if let Some(message) = ui.try_update(UiState::take_flash).flatten() {
            info.set(Some(message));
        }
    });

    let attempts = move || session.with(|s| s.login_attempts);
    let can_submit = move || login_flow::can_submit_login(attempts(), captcha_ack.get(), loading.get());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !can_submit() {
            return;
        }
        let user = username.get().trim().to_owned();
        let pass = password.get();
        if let Err(e) = login_flow::validate_credentials(&user, &pass) {
            error.set(Some(e.user_message()));
            return;
        }
        loading.set(true);
        error.set(None);
        info.set(None);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match login_flow::authenticate(&user, &pass).await {
                Ok((token, profile)) => {
                    let entry = AuditEntry::login(&user, now_ms());
                    if let Err(e) = api::record_audit(&entry, Some(&token)).await {
                        leptos::logging::warn!("login audit failed: {e}");
                    }
                    session.update(|s| s.sign_in(token, &user));
                    captcha_ack.set(false);
                    loading.set(false);
                    navigate(login_flow::route_after_login(&profile), NavigateOptions::default());
                }
                Err(e) => {
                    let failure = login_flow::classify_login_error(&e);
                    match &failure {
                        LoginFailure::PasswordExpired => {
                            session.update(|s| s.remember_username(&user));
                            ui.update(|u| u.set_flash(failure.message()));
                            loading.set(false);
                            navigate(nav::CHANGE_PASSWORD, NavigateOptions::default());
                            return;
                        }
                        LoginFailure::RateLimited => {
                            let ip = api::public_ip().await;
                            let entry = AuditEntry::login_blocked(&user, now_ms(), &ip);
                            if let Err(e) = api::record_audit(&entry, None).await {
                                leptos::logging::warn!("blocked-login audit failed: {e}");
                            }
                        }
                        LoginFailure::Rejected(_) => session.update(SessionState::record_failed_attempt),
                        LoginFailure::Unreachable => leptos::logging::warn!("sign-in failed: {e}"),
                    }
                    error.set(Some(failure.message()));
                    loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Portal"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <Show when=move || info.get().is_some()>
                    <p class="login-message login-message--info">{move || info.get().unwrap_or_default()}</p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || login_flow::captcha_required(attempts())>
                        <label class="login-captcha">
                            <input
                                type="checkbox"
                                prop:checked=move || captcha_ack.get()
                                on:change=move |ev| captcha_ack.set(event_target_checked(&ev))
                            />
                            "I'm not a robot"
                        </label>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || !can_submit()>
                        {move || if loading.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || attempts_hint(attempts()).is_some()>
                    <p class="login-message">{move || attempts_hint(attempts()).unwrap_or_default()}</p>
                </Show>
                <a class="login-link" href=nav::FORGOT_PASSWORD>"Forgot your password?"</a>
            </div>
        </div>
    }
}
