//! Interface CSV upload with the recent upload history.
//!
//! SYSTEM CONTEXT
//! ==============
//! Projects and history load concurrently and the page leaves its loading
//! state only when both have answered. Only active projects are offered, and
//! only the interfaces enabled on the chosen project.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use leptos::prelude::*;

use crate::components::admin_header::AdminHeader;
use crate::net::error::ApiError;
use crate::net::types::{Project, UploadRecord};
use crate::net::{api, endpoints};
use crate::state::session::SessionState;
use crate::util::clock::format_timestamp;
use crate::util::request::TaskScope;
use crate::util::upload::{can_upload, validate_csv_filename};

/// Enabled `(key, label)` interfaces of the selected project.
fn interfaces_for(projects: &[Project], project_id: &str) -> Vec<(&'static str, &'static str)> {
    projects
        .iter()
        .find(|p| p.id == project_id)
        .map(Project::enabled_interfaces)
        .unwrap_or_default()
}

fn active_projects(projects: Vec<Project>) -> Vec<Project> {
    projects.into_iter().filter(|p| p.is_active).collect()
}

async fn load(token: Option<String>) -> (Result<Vec<Project>, ApiError>, Result<Vec<UploadRecord>, ApiError>) {
    let projects_req = endpoints::projects(&[], token.as_deref());
    let history_req = endpoints::upload_history(token.as_deref());
    futures::join!(api::send::<Vec<Project>>(&projects_req), api::send::<Vec<UploadRecord>>(&history_req))
}

/// Name of the file picked in `input`, if any.
fn selected_file_name(input: NodeRef<leptos::html::Input>) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        input.get_untracked()?.files()?.get(0).map(|f| f.name())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        None
    }
}

fn clear_file_input(input: NodeRef<leptos::html::Input>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = input.get_untracked() {
            el.set_value("");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
    }
}

async fn send_file(
    input: NodeRef<leptos::html::Input>,
    project_id: &str,
    interface: &str,
    token: Option<&str>,
) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let file = input
            .get_untracked()
            .and_then(|el| el.files())
            .and_then(|list| list.get(0))
            .ok_or_else(|| ApiError::Validation("Please select a file to upload.".to_owned()))?;
        api::upload_csv(&file, project_id, interface, token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (input, project_id, interface, token);
        Err(ApiError::Unavailable)
    }
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let projects = RwSignal::new(Vec::<Project>::new());
    let history = RwSignal::new(Vec::<UploadRecord>::new());
    let loading = RwSignal::new(true);
    let uploading = RwSignal::new(false);
    let project_id = RwSignal::new(String::new());
    let interface = RwSignal::new(String::new());
    let file_name = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let message = RwSignal::new(None::<String>);
    let file_input = NodeRef::<leptos::html::Input>::new();
    let scope = TaskScope::for_current_owner();

    let refresh = {
        let scope = scope.clone();
        move || {
            let token = session.get_untracked().token;
            let scope = scope.clone();
            leptos::task::spawn_local(async move {
                let (projects_result, history_result) = load(token).await;
                if !scope.is_alive() {
                    return;
                }
                match projects_result {
                    Ok(list) => projects.set(active_projects(list)),
                    Err(e) => error.set(Some(e.user_message())),
                }
                match history_result {
                    Ok(list) => history.set(list),
                    Err(e) => leptos::logging::warn!("upload history failed: {e}"),
                }
                loading.set(false);
            });
        }
    };
    let initial = refresh.clone();
    Effect::new(move || initial());

    let ready = move || {
        can_upload(
            Some(project_id.get().as_str()),
            Some(interface.get().as_str()),
            file_name.get().as_deref(),
            uploading.get(),
        )
    };

    let on_file = move |_| {
        let name = selected_file_name(file_input);
        error.set(name.as_deref().and_then(|n| validate_csv_filename(n).err()).map(str::to_owned));
        file_name.set(name);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Err(msg) = validate_csv_filename(file_name.get().as_deref().unwrap_or_default()) {
            error.set(Some(msg.to_owned()));
            return;
        }
        if !ready() {
            return;
        }
        uploading.set(true);
        error.set(None);
        message.set(None);
        let (project, iface) = (project_id.get(), interface.get());
        let token = session.get_untracked().token;
        let scope = scope.clone();
        let refresh = refresh.clone();
        leptos::task::spawn_local(async move {
            let result = send_file(file_input, &project, &iface, token.as_deref()).await;
            if !scope.is_alive() {
                return;
            }
            uploading.set(false);
            match result {
                Ok(text) => {
                    message.set(Some(text));
                    file_name.set(None);
                    clear_file_input(file_input);
                    refresh();
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    view! {
        <AdminHeader title="Upload"/>
        <main class="page">
            <Show when=move || !loading.get() fallback=|| view! { <p class="loading">"Loading..."</p> }>
                <form class="upload-form" on:submit=on_submit.clone()>
                    <label>
                        "Project"
                        <select on:change=move |ev| {
                            project_id.set(event_target_value(&ev));
                            interface.set(String::new());
                        }>
                            <option value="" selected=move || project_id.get().is_empty()>"Select a project"</option>
                            {move || {
                                projects
                                    .get()
                                    .into_iter()
                                    .map(|p| {
                                        let selected = p.id == project_id.get_untracked();
                                        view! { <option value=p.id selected=selected>{p.project_name}</option> }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </label>
                    <label>
                        "Interface"
                        <select
                            disabled=move || project_id.get().is_empty()
                            on:change=move |ev| interface.set(event_target_value(&ev))
                        >
                            <option value="" selected=move || interface.get().is_empty()>"Select an interface"</option>
                            {move || {
                                projects
                                    .with(|list| interfaces_for(list, &project_id.get()))
                                    .into_iter()
                                    .map(|(key, label)| view! { <option value=key>{label}</option> })
                                    .collect_view()
                            }}
                        </select>
                    </label>
                    <input type="file" accept=".csv" node_ref=file_input on:change=on_file/>
                    <button class="btn btn--primary" type="submit" disabled=move || !ready()>
                        {move || if uploading.get() { "Uploading..." } else { "Upload" }}
                    </button>
                </form>
                <Show when=move || message.get().is_some()>
                    <p class="form-success">{move || message.get().unwrap_or_default()}</p>
                </Show>
                <h2 class="page__section">"Upload history"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"File"</th>
                            <th>"Project"</th>
                            <th>"Interface"</th>
                            <th>"Status"</th>
                            <th>"Uploaded"</th>
                            <th>"Details"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=move || history.get() key=|r| r.id.clone() let:record>
                            <tr>
                                <td>{record.filename.clone()}</td>
                                <td>{record.project.clone().unwrap_or_default()}</td>
                                <td>{record.interface.clone().unwrap_or_default()}</td>
                                <td><span class=record.status_class()>{record.status.clone()}</span></td>
                                <td>{record.uploaded_at.as_deref().map(format_timestamp).unwrap_or_default()}</td>
                                <td>{record.details.clone().unwrap_or_default()}</td>
                            </tr>
                        </For>
                    </tbody>
                </table>
            </Show>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </main>
    }
}
