//! Set a new password from an emailed reset link (`/reset-password/:token`).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::{api, endpoints};
use crate::state::ui::UiState;
use crate::util::nav;
use crate::util::password::validate_reset_password;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let params = use_params_map();
    let navigate = use_navigate();
    let new_password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let token = params.with(|p| p.get("token")).unwrap_or_default();
        if token.is_empty() {
            error.set(Some("This reset link is invalid.".to_owned()));
            return;
        }
        let (new, confirm) = (new_password.get(), confirmation.get());
        if let Some(message) = validate_reset_password(&new, &confirm) {
            error.set(Some(message.to_owned()));
            return;
        }
        let request = match endpoints::reset_password(&token, &new) {
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
            let result = api::send_empty(&request).await;
            busy.set(false);
            match result {
                Ok(()) => {
                    ui.update(|u| u.set_flash("Password reset successfully. Please sign in."));
                    navigate(nav::LOGIN, NavigateOptions::default());
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Reset password"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="New password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm new password"
                        prop:value=move || confirmation.get()
                        on:input=move |ev| confirmation.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Reset password"
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
