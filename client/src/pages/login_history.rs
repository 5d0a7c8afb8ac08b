//! Recent sign-ins for the current user. A 404 means no history yet.

#[cfg(test)]
#[path = "login_history_test.rs"]
mod login_history_test;

use leptos::prelude::*;

use crate::components::admin_header::AdminHeader;
use crate::net::error::ApiError;
use crate::net::types::LoginHistoryEntry;
use crate::net::{api, endpoints};
use crate::state::session::SessionState;
use crate::util::clock::format_timestamp;
use crate::util::request::TaskScope;

/// Missing history is an empty list, not an error.
fn history_or_empty(result: Result<Vec<LoginHistoryEntry>, ApiError>) -> Result<Vec<LoginHistoryEntry>, ApiError> {
    match result {
        Err(e) if e.is_not_found() => Ok(Vec::new()),
        other => other,
    }
}

#[component]
pub fn LoginHistoryPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let entries = RwSignal::new(Vec::<LoginHistoryEntry>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let scope = TaskScope::for_current_owner();

    Effect::new(move || {
        let state = session.get_untracked();
        let scope = scope.clone();
        leptos::task::spawn_local(async move {
            let request = endpoints::login_history(&state.username_or_empty(), state.token());
            let result = history_or_empty(api::send(&request).await);
            if !scope.is_alive() {
                return;
            }
            match result {
                Ok(list) => entries.set(list),
                Err(e) => error.set(Some(e.user_message())),
            }
            loading.set(false);
        });
    });

    view! {
        <AdminHeader title="Login history"/>
        <main class="page page--narrow">
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p class="loading">"Loading history..."</p> }>
                <Show
                    when=move || !entries.with(Vec::is_empty)
                    fallback=|| view! { <p class="empty">"No login history found."</p> }
                >
                    <ul class="history-list">
                        {move || {
                            entries
                                .get()
                                .into_iter()
                                .map(|entry| {
                                    let at = entry.timestamp().map(format_timestamp);
                                    view! {
                                        <li class="history-list__item">
                                            <span>{entry.description().to_owned()}</span>
                                            {at.map(|t| view! { <time>{t}</time> })}
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </Show>
        </main>
    }
}
