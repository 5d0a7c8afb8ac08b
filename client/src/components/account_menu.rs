//! Account dropdown: security pages and explicit sign-out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::audit::AuditEntry;
use crate::state::session::SessionState;
use crate::util::clock::now_ms;
use crate::util::nav;
use crate::util::storage::browser_session;

const LINKS: [(&str, &str); 5] = [
    (nav::CHANGE_PASSWORD, "Change password"),
    (nav::DISABLE_2FA, "Disable 2FA"),
    (nav::CONNECTED_DEVICES, "Connected devices"),
    (nav::LOGIN_HISTORY, "Login history"),
    (nav::EMAIL_PREFERENCES, "Email preferences"),
];

#[component]
pub fn AccountMenu() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let open = RwSignal::new(false);
    let navigate = use_navigate();

    let on_logout = move |_| {
        let state = session.get_untracked();
        let entry = AuditEntry::logout(&state.username_or_empty(), now_ms());
        session.update(SessionState::clear_credentials);
        browser_session().clear_credentials();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = api::record_audit(&entry, state.token()).await {
                leptos::logging::warn!("logout audit failed: {e}");
            }
            navigate(nav::LOGIN, NavigateOptions::default());
        });
    };

    view! {
        <div class="account-menu">
            <button class="account-menu__toggle" on:click=move |_| open.update(|o| *o = !*o)>
                {move || session.with(SessionState::username_or_empty)}
            </button>
            <Show when=move || open.get()>
                <ul class="account-menu__list" on:click=move |_| open.set(false)>
                    {LINKS
                        .into_iter()
                        .map(|(href, label)| view! { <li><a href=href>{label}</a></li> })
                        .collect_view()}
                </ul>
            </Show>
            <button class="btn btn--ghost" on:click=on_logout>"Logout"</button>
        </div>
    }
}
