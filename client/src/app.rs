//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected::Protected;
use crate::net::types::Role;
use crate::pages::admin::{
    monitoring::MonitoringPage, project_form::ProjectFormPage, projects::ManageProjectsPage,
    user_form::UserFormPage, users::ManageUsersPage,
};
use crate::pages::{
    change_password::ChangePasswordPage, connected_devices::ConnectedDevicesPage,
    disable_two_factor::DisableTwoFactorPage, email_preferences::EmailPreferencesPage,
    forgot_password::ForgotPasswordPage, home::AdminHomePage, home::HomePage, login::LoginPage,
    login_history::LoginHistoryPage, otp::OtpPage, reset_password::ResetPasswordPage,
    two_factor_setup::TwoFactorSetupPage, upload::UploadPage,
};
use crate::state::{session::SessionState, ui::UiState};
use crate::util::{clock::now_ms, idle, storage::browser_session};

const ADMIN_ONLY: &[Role] = &[Role::Admin];
const UPLOADERS: &[Role] = &[Role::Admin, Role::Editor];

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Read the stored session once, then mirror every change back to storage.
fn sync_session_with_storage(session: RwSignal<SessionState>) {
    Effect::new(move || {
        session.set(SessionState::from_stored(browser_session().load()));
    });

    // Returns the signed-in flag once storage has been read, so the next run
    // can tell a fresh sign-in from a reload.
    Effect::new(move |previous: Option<Option<bool>>| {
        let state = session.get();
        if !state.loaded {
            return None;
        }
        let signed_in = state.is_signed_in();
        let mut store = browser_session();
        store.save(&state.to_stored());
        let was_signed_in = previous.flatten();
        if signed_in && (was_signed_in == Some(false) || store.last_activity().is_none()) {
            store.record_activity(now_ms());
        }
        Some(signed_in)
    });
}

/// Root application component.
///
/// Provides the session and UI contexts, starts the idle monitor, and sets
/// up client-side routing. Every route except the sign-in and password
/// recovery screens sits behind [`Protected`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(session);
    provide_context(ui);

    sync_session_with_storage(session);
    idle::install(session, ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text="Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route path=(StaticSegment("reset-password"), ParamSegment("token")) view=ResetPasswordPage/>
                <Route path=StaticSegment("change-password") view=ChangePasswordPage/>

                <Route
                    path=StaticSegment("2fa-setup")
                    view=|| view! { <Protected><TwoFactorSetupPage/></Protected> }
                />
                <Route
                    path=StaticSegment("otp-verification")
                    view=|| view! { <Protected><OtpPage/></Protected> }
                />
                <Route path=StaticSegment("home") view=|| view! { <Protected><HomePage/></Protected> }/>
                <Route
                    path=StaticSegment("disable-2fa")
                    view=|| view! { <Protected><DisableTwoFactorPage/></Protected> }
                />
                <Route
                    path=StaticSegment("connected-devices")
                    view=|| view! { <Protected><ConnectedDevicesPage/></Protected> }
                />
                <Route
                    path=StaticSegment("login-history")
                    view=|| view! { <Protected><LoginHistoryPage/></Protected> }
                />
                <Route
                    path=StaticSegment("email-preferences")
                    view=|| view! { <Protected><EmailPreferencesPage/></Protected> }
                />
                <Route
                    path=StaticSegment("upload")
                    view=|| view! { <Protected roles=UPLOADERS><UploadPage/></Protected> }
                />

                <Route
                    path=StaticSegment("admin")
                    view=|| view! { <Protected roles=ADMIN_ONLY><AdminHomePage/></Protected> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("manage-users"))
                    view=|| view! { <Protected roles=ADMIN_ONLY><ManageUsersPage/></Protected> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("manage-users"), StaticSegment("create-user"))
                    view=|| view! { <Protected roles=ADMIN_ONLY><UserFormPage/></Protected> }
                />
                <Route
                    path=(
                        StaticSegment("admin"),
                        StaticSegment("manage-users"),
                        StaticSegment("edit-user"),
                        ParamSegment("id"),
                    )
                    view=|| view! { <Protected roles=ADMIN_ONLY><UserFormPage/></Protected> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("manage-projects"))
                    view=|| view! { <Protected roles=ADMIN_ONLY><ManageProjectsPage/></Protected> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("manage-projects"), StaticSegment("create-project"))
                    view=|| view! { <Protected roles=ADMIN_ONLY><ProjectFormPage/></Protected> }
                />
                <Route
                    path=(
                        StaticSegment("admin"),
                        StaticSegment("manage-projects"),
                        StaticSegment("edit-project"),
                        ParamSegment("id"),
                    )
                    view=|| view! { <Protected roles=ADMIN_ONLY><ProjectFormPage/></Protected> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("monitoring"))
                    view=|| view! { <Protected roles=ADMIN_ONLY><MonitoringPage/></Protected> }
                />
            </Routes>
        </Router>
    }
}
