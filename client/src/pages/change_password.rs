//! Change password, either voluntarily or after a password-expired sign-in.
//!
//! An expired password leaves no token, so the page is reachable without
//! the route guard and re-authenticates through
//! `/token/change-password` before submitting the new password.

#[cfg(test)]
#[path = "change_password_test.rs"]
mod change_password_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::password_checklist::PasswordChecklist;
use crate::net::audit::AuditEntry;
use crate::net::error::ApiError;
use crate::net::types::TokenResponse;
use crate::net::{api, endpoints};
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::clock::now_ms;
use crate::util::nav;
use crate::util::password;

pub const PASSWORD_CHANGED: &str = "Password changed successfully. Please sign in again.";

/// Submit gate: every field filled, rules met, confirmation matching.
fn can_submit(username: &str, current: &str, new_password: &str, confirmation: &str, busy: bool) -> bool {
    !busy
        && !username.trim().is_empty()
        && !current.is_empty()
        && password::can_submit_new_password(new_password, confirmation)
}

async fn submit(username: &str, current: &str, new_password: &str) -> Result<String, ApiError> {
    let token: TokenResponse = api::send(&endpoints::reauthenticate_for_password_change(username, current)).await?;
    let token = token.access_token;
    api::send_empty(&endpoints::change_password(username, new_password, Some(&token))?).await?;
    Ok(token)
}

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let current = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    Effect::new(move || {
        if let Some(name) = session.with(|s| s.username.clone()) {
            if username.get_untracked().is_empty() {
                username.set(name);
            }
        }
    });
    Effect::new(move || {
        if let Some(message) = ui.try_update(UiState::take_flash).flatten() {
            notice.set(Some(message));
        }
    });

    let enabled = move || {
        can_submit(&username.get(), &current.get(), &new_password.get(), &confirmation.get(), busy.get())
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(message) = password::validate_new_password(&new_password.get(), &confirmation.get()) {
            error.set(Some(message.to_owned()));
            return;
        }
        if !enabled() {
            return;
        }
        let user = username.get().trim().to_owned();
        let (old, new) = (current.get(), new_password.get());
        busy.set(true);
        error.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match submit(&user, &old, &new).await {
                Ok(token) => {
                    let entry = AuditEntry::password_changed(&user, now_ms());
                    if let Err(e) = api::record_audit(&entry, Some(&token)).await {
                        leptos::logging::warn!("password audit failed: {e}");
                    }
                    session.update(SessionState::clear_credentials);
                    ui.update(|u| u.set_flash(PASSWORD_CHANGED));
                    busy.set(false);
                    navigate(nav::LOGIN, NavigateOptions::default());
                }
                Err(e) => {
                    error.set(Some(e.user_message()));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Change password"</h1>
                <Show when=move || notice.get().is_some()>
                    <p class="login-message login-message--info">{move || notice.get().unwrap_or_default()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Current password"
                        prop:value=move || current.get()
                        on:input=move |ev| current.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="New password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                    <PasswordChecklist password=new_password/>
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm new password"
                        prop:value=move || confirmation.get()
                        on:input=move |ev| confirmation.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || !enabled()>
                        "Change password"
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
