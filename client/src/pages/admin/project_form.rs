//! Create and edit a project and its enabled interfaces.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::projects::toggle_project_status;
use crate::components::admin_header::AdminHeader;
use crate::net::audit::AuditEntry;
use crate::net::error::ApiError;
use crate::net::interfaces::INTERFACES;
use crate::net::types::{InterfaceFlags, NewProject, Project, ProjectPatch};
use crate::net::{api, endpoints};
use crate::state::session::SessionState;
use crate::util::clock::now_ms;
use crate::util::nav;
use crate::util::request::TaskScope;

async fn create(project: &NewProject, session: &SessionState) -> Result<(), ApiError> {
    let token = session.token();
    api::send_empty(&endpoints::create_project(project, token)?).await?;
    let entry = AuditEntry::project_created(&session.username_or_empty(), &project.project_name, now_ms());
    if let Err(e) = api::record_audit(&entry, token).await {
        leptos::logging::warn!("create-project audit failed: {e}");
    }
    Ok(())
}

async fn update(id: &str, name: &str, patch: &ProjectPatch, session: &SessionState) -> Result<(), ApiError> {
    let token = session.token();
    api::send_empty(&endpoints::update_project(id, patch, token)?).await?;
    let entry = AuditEntry::project_updated(&session.username_or_empty(), name, now_ms());
    if let Err(e) = api::record_audit(&entry, token).await {
        leptos::logging::warn!("update-project audit failed: {e}");
    }
    Ok(())
}

#[component]
pub fn ProjectFormPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();
    let navigate = use_navigate();
    let scope = TaskScope::for_current_owner();
    let project_id = move || params.with(|p| p.get("id"));
    let creating = move || project_id().is_none();

    let loaded = RwSignal::new(None::<Project>);
    let name = RwSignal::new(String::new());
    let flags = RwSignal::new(InterfaceFlags::none());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let finished = RwSignal::new(false);

    Effect::new(move || {
        let Some(id) = project_id() else {
            return;
        };
        let token = session.get_untracked().token;
        let scope = scope.clone();
        leptos::task::spawn_local(async move {
            let result = api::send::<Project>(&endpoints::project(&id, token.as_deref())).await;
            if !scope.is_alive() {
                return;
            }
            match result {
                Ok(project) => {
                    name.set(project.project_name.clone());
                    flags.set(project.interface_flags());
                    loaded.set(Some(project));
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    });

    Effect::new(move || {
        if finished.get() {
            navigate(nav::MANAGE_PROJECTS, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let project_name = name.get().trim().to_owned();
        if project_name.is_empty() {
            error.set(Some("Project name is required.".to_owned()));
            return;
        }
        let state = session.get_untracked();
        let pending = if creating() {
            let project = NewProject { project_name, interfaces: flags.get() };
            futures::future::Either::Left(async move { create(&project, &state).await })
        } else {
            let Some(initial) = loaded.get() else {
                return;
            };
            let patch = ProjectPatch::diff(&initial, &project_name, &flags.get());
            if patch.is_empty() {
                notice.set(Some("No changes to save.".to_owned()));
                return;
            }
            futures::future::Either::Right(async move { update(&initial.id, &project_name, &patch, &state).await })
        };
        busy.set(true);
        error.set(None);
        notice.set(None);
        leptos::task::spawn_local(async move {
            let result = pending.await;
            busy.set(false);
            match result {
                Ok(()) => finished.set(true),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    let on_toggle_status = move |_| {
        let Some(project) = loaded.get() else {
            return;
        };
        let state = session.get_untracked();
        leptos::task::spawn_local(async move {
            match toggle_project_status(&project, &state).await {
                Ok(active) => loaded.update(|p| {
                    if let Some(p) = p {
                        p.is_active = active;
                    }
                }),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    let set_all = move |enabled: bool| {
        flags.update(|f| {
            for iface in &INTERFACES {
                f.0.insert(iface.key.to_owned(), enabled);
            }
        });
    };

    view! {
        <AdminHeader admin=true title="Manage projects"/>
        <main class="page">
            <h2>{move || if creating() { "Create project" } else { "Edit project" }}</h2>
            <form class="entity-form" on:submit=on_submit>
                <label>
                    "Project name"
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <fieldset class="interface-grid">
                    <legend>
                        {move || format!("Interfaces ({} enabled)", flags.with(InterfaceFlags::enabled_count))}
                    </legend>
                    <div class="interface-grid__actions">
                        <button class="btn btn--small" type="button" on:click=move |_| set_all(true)>
                            "Enable all"
                        </button>
                        <button class="btn btn--small" type="button" on:click=move |_| set_all(false)>
                            "Disable all"
                        </button>
                    </div>
                    {INTERFACES
                        .iter()
                        .map(|iface| {
                            let key = iface.key;
                            view! {
                                <label class="interface-grid__item">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || flags.with(|f| f.get(key))
                                        on:change=move |_| flags.update(|f| f.toggle(key))
                                    />
                                    {iface.label}
                                </label>
                            }
                        })
                        .collect_view()}
                </fieldset>
                <div class="entity-form__actions">
                    <a class="btn" href=nav::MANAGE_PROJECTS>"Cancel"</a>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if creating() { "Create project" } else { "Save changes" }}
                    </button>
                </div>
            </form>
            <Show when=move || loaded.with(Option::is_some)>
                <div class="entity-form__danger">
                    <button class="btn" on:click=on_toggle_status>
                        {move || {
                            if loaded.with(|p| p.as_ref().is_some_and(|p| p.is_active)) {
                                "Deactivate project"
                            } else {
                                "Activate project"
                            }
                        }}
                    </button>
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
