//! Landing pages after sign-in.

use leptos::prelude::*;

use crate::components::admin_header::AdminHeader;
use crate::net::types::Role;
use crate::state::session::SessionState;
use crate::util::guard;
use crate::util::nav;
use crate::util::request::TaskScope;

const ACCOUNT_LINKS: [(&str, &str, &str); 4] = [
    (nav::CHANGE_PASSWORD, "Change password", "Update your sign-in password."),
    (nav::CONNECTED_DEVICES, "Connected devices", "Review and revoke signed-in devices."),
    (nav::LOGIN_HISTORY, "Login history", "See recent sign-ins to your account."),
    (nav::EMAIL_PREFERENCES, "Email preferences", "Choose which projects notify you."),
];

const ADMIN_CARDS: [(&str, &str, &str); 4] = [
    (nav::MANAGE_USERS, "Manage users", "Create, edit, deactivate, and export users."),
    (nav::MANAGE_PROJECTS, "Manage projects", "Create projects and enable interfaces."),
    (nav::MONITORING, "Monitoring", "Browse and export system and interface logs."),
    (nav::UPLOAD, "Upload", "Send interface CSV files."),
];

fn card_grid(cards: &'static [(&'static str, &'static str, &'static str)]) -> impl IntoView {
    view! {
        <div class="card-grid">
            {cards
                .iter()
                .map(|(href, title, blurb)| {
                    view! {
                        <a class="nav-card" href=*href>
                            <h2>{*title}</h2>
                            <p>{*blurb}</p>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Signed-in landing page for every role.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let role = RwSignal::new(None::<Role>);
    let scope = TaskScope::for_current_owner();

    Effect::new(move || {
        let state = session.get_untracked();
        let scope = scope.clone();
        leptos::task::spawn_local(async move {
            let fetched = guard::fetch_role(&state.username_or_empty(), state.token()).await;
            if scope.is_alive() {
                role.set(fetched);
            }
        });
    });

    view! {
        <AdminHeader title="Home"/>
        <main class="page">
            <p class="page__lead">
                {move || format!("Welcome, {}.", session.with(SessionState::username_or_empty))}
            </p>
            <Show when=move || matches!(role.get(), Some(Role::Admin | Role::Editor))>
                <a class="btn btn--primary" href=nav::UPLOAD>"Upload interface CSV"</a>
            </Show>
            <Show when=move || role.get() == Some(Role::Admin)>
                <a class="btn" href=nav::ADMIN>"Administration"</a>
            </Show>
            {card_grid(&ACCOUNT_LINKS)}
        </main>
    }
}

#[component]
pub fn AdminHomePage() -> impl IntoView {
    view! {
        <AdminHeader admin=true title="Administration"/>
        <main class="page">
            {card_grid(&ADMIN_CARDS)}
            <h2 class="page__section">"Your account"</h2>
            {card_grid(&ACCOUNT_LINKS)}
        </main>
    }
}
