//! Route guard wrapping every signed-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once per protected route. Waits for the session to be read from
//! storage, verifies the token with the backend, and either renders its
//! children or redirects. Decisions live in [`crate::util::guard`].

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::session::SessionState;
use crate::util::guard::{self, GuardOutcome, Verification};
use crate::util::nav;
use crate::util::request::TaskScope;

#[component]
pub fn Protected(
    /// Roles allowed on this route; any signed-in user when absent.
    #[prop(optional)]
    roles: Option<&'static [Role]>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let outcome = RwSignal::new(None::<GuardOutcome>);
    let started = RwSignal::new(false);
    let scope = TaskScope::for_current_owner();

    Effect::new(move || {
        if started.get_untracked() || !session.with(|s| s.loaded) {
            return;
        }
        started.set(true);
        let state = session.get_untracked();
        let scope = scope.clone();
        leptos::task::spawn_local(async move {
            let token = state.token.clone();
            let verification = guard::verify(token.as_deref()).await;
            let role = match (roles, verification, state.username.as_deref()) {
                (Some(_), Verification::Accepted, Some(username)) => {
                    guard::fetch_role(username, token.as_deref()).await
                }
                _ => None,
            };
            if !scope.is_alive() {
                return;
            }
            let decided = session.try_update(|s| guard::evaluate(s, verification, roles, role));
            outcome.set(decided);
        });
    });

    let navigate = use_navigate();
    Effect::new(move || match outcome.get() {
        Some(GuardOutcome::RedirectLogin) => navigate(nav::LOGIN, NavigateOptions::default()),
        Some(GuardOutcome::RedirectHome) => navigate(nav::HOME, NavigateOptions::default()),
        Some(GuardOutcome::Allow) | None => {}
    });

    view! {
        <Show
            when=move || outcome.get() == Some(GuardOutcome::Allow)
            fallback=|| view! { <div class="guard-pending">"Checking session..."</div> }
        >
            {children()}
        </Show>
    }
}
