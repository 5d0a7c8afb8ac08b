//! Per-project notification opt-in.
//!
//! Toggles apply immediately and are rolled back if the update fails.

#[cfg(test)]
#[path = "email_preferences_test.rs"]
mod email_preferences_test;

use leptos::prelude::*;

use crate::components::admin_header::AdminHeader;
use crate::net::types::EmailPreference;
use crate::net::{api, endpoints};
use crate::state::session::SessionState;
use crate::util::request::TaskScope;

/// Set one project's flag. Returns the previous value, or `None` when the
/// project is not listed.
fn set_preference(prefs: &mut [EmailPreference], project_id: &str, notify: bool) -> Option<bool> {
    let pref = prefs.iter_mut().find(|p| p.project_id == project_id)?;
    Some(std::mem::replace(&mut pref.notify_interface_changes, notify))
}

#[component]
pub fn EmailPreferencesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let prefs = RwSignal::new(Vec::<EmailPreference>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let scope = TaskScope::for_current_owner();

    let load_scope = scope.clone();
    Effect::new(move || {
        let token = session.get_untracked().token;
        let scope = load_scope.clone();
        leptos::task::spawn_local(async move {
            let result = api::send::<Vec<EmailPreference>>(&endpoints::email_preferences(token.as_deref())).await;
            if !scope.is_alive() {
                return;
            }
            match result {
                Ok(list) => prefs.set(list),
                Err(e) => error.set(Some(e.user_message())),
            }
            loading.set(false);
        });
    });

    let toggle = move |project_id: String, notify: bool| {
        let Some(previous) = prefs.try_update(|p| set_preference(p, &project_id, notify)).flatten() else {
            return;
        };
        error.set(None);
        let token = session.get_untracked().token;
        let scope = scope.clone();
        leptos::task::spawn_local(async move {
            let result = match endpoints::update_email_preference(&project_id, notify, token.as_deref()) {
                Ok(request) => api::send_empty(&request).await,
                Err(e) => Err(e),
            };
            if !scope.is_alive() {
                return;
            }
            if let Err(e) = result {
                leptos::logging::warn!("email preference update failed: {e}");
                prefs.update(|p| {
                    set_preference(p, &project_id, previous);
                });
                error.set(Some(e.user_message()));
            }
        });
    };
    let toggle = StoredValue::new(toggle);

    view! {
        <AdminHeader title="Email preferences"/>
        <main class="page page--narrow">
            <p>"Receive an email when interfaces change on these projects."</p>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p class="loading">"Loading preferences..."</p> }>
                <Show
                    when=move || !prefs.with(Vec::is_empty)
                    fallback=|| view! { <p class="empty">"You are not assigned to any projects."</p> }
                >
                    <ul class="pref-list">
                        <For each=move || prefs.get() key=|p| p.project_id.clone() let:pref>
                            {
                                let id = pref.project_id.clone();
                                let checked_id = id.clone();
                                view! {
                                    <li class="pref-list__item">
                                        <label>
                                            <input
                                                type="checkbox"
                                                prop:checked=move || {
                                                    prefs
                                                        .with(|p| {
                                                            p.iter()
                                                                .any(|x| x.project_id == checked_id && x.notify_interface_changes)
                                                        })
                                                }
                                                on:change=move |ev| {
                                                    let notify = event_target_checked(&ev);
                                                    toggle.with_value(|f| f(id.clone(), notify));
                                                }
                                            />
                                            {pref.project_name.clone()}
                                        </label>
                                    </li>
                                }
                            }
                        </For>
                    </ul>
                </Show>
            </Show>
        </main>
    }
}
