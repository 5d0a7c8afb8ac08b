//! Create and edit a user. Edits send only the changed fields.

#[cfg(test)]
#[path = "user_form_test.rs"]
mod user_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::users::toggle_user_status;
use crate::components::admin_header::AdminHeader;
use crate::components::password_checklist::PasswordChecklist;
use crate::net::audit::AuditEntry;
use crate::net::error::ApiError;
use crate::net::types::{NewUser, Project, Role, User, UserPatch};
use crate::net::{api, endpoints};
use crate::state::session::SessionState;
use crate::util::clock::now_ms;
use crate::util::nav;
use crate::util::password::validate_new_password;
use crate::util::request::TaskScope;

pub const NO_CHANGES: &str = "No changes to save.";

/// Required-field and password checks; the password only on create.
fn validate_user_form(
    username: &str,
    email: &str,
    password: &str,
    confirmation: &str,
    creating: bool,
) -> Option<&'static str> {
    if username.trim().is_empty() || email.trim().is_empty() {
        return Some("Username and email are required.");
    }
    if !email.contains('@') {
        return Some("Please enter a valid email address.");
    }
    if creating {
        return validate_new_password(password, confirmation);
    }
    None
}

async fn create(user: &NewUser, session: &SessionState) -> Result<(), ApiError> {
    let token = session.token();
    api::send_empty(&endpoints::create_user(user, token)?).await?;
    let entry = AuditEntry::user_created(&session.username_or_empty(), user.role, &user.username, now_ms());
    if let Err(e) = api::record_audit(&entry, token).await {
        leptos::logging::warn!("create-user audit failed: {e}");
    }
    Ok(())
}

async fn update(id: &str, username: &str, patch: &UserPatch, session: &SessionState) -> Result<(), ApiError> {
    let token = session.token();
    api::send_empty(&endpoints::update_user(id, patch, token)?).await?;
    let entry = AuditEntry::user_updated(&session.username_or_empty(), username, now_ms());
    if let Err(e) = api::record_audit(&entry, token).await {
        leptos::logging::warn!("update-user audit failed: {e}");
    }
    Ok(())
}

async fn delete(user: &User, session: &SessionState) -> Result<(), ApiError> {
    let token = session.token();
    api::send_empty(&endpoints::delete_user(&user.id, token)).await?;
    let entry = AuditEntry::user_deleted(&session.username_or_empty(), &user.username, now_ms());
    if let Err(e) = api::record_audit(&entry, token).await {
        leptos::logging::warn!("delete-user audit failed: {e}");
    }
    Ok(())
}

#[component]
pub fn UserFormPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();
    let navigate = use_navigate();
    let scope = TaskScope::for_current_owner();
    let user_id = move || params.with(|p| p.get("id"));
    let creating = move || user_id().is_none();

    let loaded = RwSignal::new(None::<User>);
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Viewer);
    let projects = RwSignal::new(Vec::<String>::new());
    let project_names = RwSignal::new(Vec::<String>::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    Effect::new(move || {
        let id = user_id();
        let token = session.get_untracked().token;
        let scope = scope.clone();
        leptos::task::spawn_local(async move {
            let options = api::send::<Vec<Project>>(&endpoints::projects(&[], token.as_deref())).await;
            let user = match &id {
                Some(id) => Some(api::send::<User>(&endpoints::user(id, token.as_deref())).await),
                None => None,
            };
            if !scope.is_alive() {
                return;
            }
            match options {
                Ok(list) => project_names.set(list.into_iter().map(|p| p.project_name).collect()),
                Err(e) => leptos::logging::warn!("project options failed: {e}"),
            }
            match user {
                Some(Ok(user)) => {
                    username.set(user.username.clone());
                    email.set(user.email.clone().unwrap_or_default());
                    role.set(user.role);
                    projects.set(user.projects.iter().map(|p| p.project_name.clone()).collect());
                    loaded.set(Some(user));
                }
                Some(Err(e)) => error.set(Some(e.user_message())),
                None => {}
            }
        });
    });

    let finished = RwSignal::new(false);
    Effect::new(move || {
        if finished.get() {
            navigate(nav::MANAGE_USERS, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let is_new = creating();
        let (name, mail, pass, confirm) = (username.get(), email.get(), password.get(), confirmation.get());
        if let Some(message) = validate_user_form(&name, &mail, &pass, &confirm, is_new) {
            error.set(Some(message.to_owned()));
            return;
        }
        let state = session.get_untracked();
        let result_future = if is_new {
            let new_user = NewUser::new(&name, &pass, &mail, role.get(), projects.get());
            futures::future::Either::Left(async move { create(&new_user, &state).await })
        } else {
            let Some(initial) = loaded.get() else {
                return;
            };
            let patch = UserPatch::diff(&initial, &name, &mail, role.get(), &projects.get());
            if patch.is_empty() {
                notice.set(Some(NO_CHANGES.to_owned()));
                return;
            }
            let target = name.trim().to_owned();
            futures::future::Either::Right(async move { update(&initial.id, &target, &patch, &state).await })
        };
        busy.set(true);
        error.set(None);
        notice.set(None);
        leptos::task::spawn_local(async move {
            let result = result_future.await;
            busy.set(false);
            match result {
                Ok(()) => finished.set(true),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    let on_delete = move |_| {
        let Some(user) = loaded.get() else {
            return;
        };
        if !nav::confirm(&format!("Delete user {}? This cannot be undone.", user.username)) {
            return;
        }
        let state = session.get_untracked();
        leptos::task::spawn_local(async move {
            match delete(&user, &state).await {
                Ok(()) => finished.set(true),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    let on_toggle_status = move |_| {
        let Some(user) = loaded.get() else {
            return;
        };
        let state = session.get_untracked();
        leptos::task::spawn_local(async move {
            match toggle_user_status(&user, &state).await {
                Ok(active) => loaded.update(|u| {
                    if let Some(u) = u {
                        u.is_active = active;
                    }
                }),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    let title = move || if creating() { "Create user" } else { "Edit user" };

    view! {
        <AdminHeader admin=true title="Manage users"/>
        <main class="page page--narrow">
            <h2>{title}</h2>
            <form class="entity-form" on:submit=on_submit>
                <label>
                    "Username"
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <Show when=creating>
                    <label>
                        "Password"
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <PasswordChecklist password=password/>
                    <label>
                        "Confirm password"
                        <input
                            type="password"
                            prop:value=move || confirmation.get()
                            on:input=move |ev| confirmation.set(event_target_value(&ev))
                        />
                    </label>
                </Show>
                <label>
                    "Permission"
                    <select
                        prop:value=move || role.get().as_str()
                        on:change=move |ev| role.set(Role::parse(&event_target_value(&ev)).unwrap_or_default())
                    >
                        {Role::ALL
                            .into_iter()
                            .map(|r| view! { <option value=r.as_str()>{r.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <fieldset class="entity-form__projects">
                    <legend>"Projects"</legend>
                    {move || {
                        project_names
                            .get()
                            .into_iter()
                            .map(|name| {
                                let checked_name = name.clone();
                                let toggle_name = name.clone();
                                view! {
                                    <label class="filter-chip">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || projects.with(|p| p.contains(&checked_name))
                                            on:change=move |_| {
                                                projects.update(|p| {
                                                    if let Some(pos) = p.iter().position(|x| *x == toggle_name) {
                                                        p.remove(pos);
                                                    } else {
                                                        p.push(toggle_name.clone());
                                                    }
                                                });
                                            }
                                        />
                                        {name}
                                    </label>
                                }
                            })
                            .collect_view()
                    }}
                </fieldset>
                <div class="entity-form__actions">
                    <a class="btn" href=nav::MANAGE_USERS>"Cancel"</a>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if creating() { "Create user" } else { "Save changes" }}
                    </button>
                </div>
            </form>
            <Show when=move || loaded.with(Option::is_some)>
                <div class="entity-form__danger">
                    <button class="btn" on:click=on_toggle_status>
                        {move || {
                            if loaded.with(|u| u.as_ref().is_some_and(|u| u.is_active)) {
                                "Deactivate user"
                            } else {
                                "Activate user"
                            }
                        }}
                    </button>
                    <button class="btn btn--danger" on:click=on_delete>"Delete user"</button>
                </div>
            </Show>
            <Show when=move || notice.get().is_some()>
                <p class="form-notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </main>
    }
}
