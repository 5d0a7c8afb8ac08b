//! Project administration list.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;

use crate::components::admin_header::AdminHeader;
use crate::net::audit::AuditEntry;
use crate::net::error::ApiError;
use crate::net::types::Project;
use crate::net::{api, endpoints};
use crate::state::collection::{SEARCH_DEBOUNCE_MS, StatusFilter, install_fetcher};
use crate::state::projects::{ProjectCollection, ProjectSort};
use crate::state::session::SessionState;
use crate::util::clock::{now_ms, sleep_ms};
use crate::util::csv::CSV_MIME;
use crate::util::download;
use crate::util::nav;
use crate::util::request::{Generation, TaskScope};

/// Flip a project's active flag and record it.
///
/// # Errors
///
/// Returns the status update failure; the audit entry is best effort.
pub(crate) async fn toggle_project_status(project: &Project, session: &SessionState) -> Result<bool, ApiError> {
    let active = !project.is_active;
    let token = session.token();
    api::send_empty(&endpoints::set_project_status(&project.id, active, token)?).await?;
    let entry = AuditEntry::project_updated(&session.username_or_empty(), &project.project_name, now_ms());
    if let Err(e) = api::record_audit(&entry, token).await {
        leptos::logging::warn!("project status audit failed: {e}");
    }
    Ok(active)
}

/// Short summary for the interfaces column.
fn interface_summary(project: &Project) -> String {
    match project.enabled_interfaces().len() {
        0 => "None".to_owned(),
        1 => "1 interface".to_owned(),
        n => format!("{n} interfaces"),
    }
}

#[component]
pub fn ManageProjectsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let projects = RwSignal::new(ProjectCollection::new());
    install_fetcher(projects, session, endpoints::projects);

    let search_text = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<String>);
    let debounce = Generation::default();
    let scope = TaskScope::for_current_owner();

    let on_search = {
        let debounce = debounce.clone();
        move |text: String| {
            search_text.set(text.clone());
            let ticket = debounce.next();
            let debounce = debounce.clone();
            let scope = scope.clone();
            leptos::task::spawn_local(async move {
                sleep_ms(SEARCH_DEBOUNCE_MS).await;
                if scope.is_alive() {
                    projects.update(|c| {
                        c.apply_debounced(&debounce, ticket, |f| f.search = text);
                    });
                }
            });
        }
    };

    let on_reset = move |_| {
        debounce.invalidate();
        search_text.set(String::new());
        projects.update(|c| {
            c.reset_filters();
        });
    };

    let on_export = move |_| {
        let csv = projects.with(ProjectCollection::export_csv);
        download::save_text(&csv, &download::file_name("projects", "csv"), CSV_MIME);
    };

    let on_toggle_status = move |project: Project| {
        let verb = if project.is_active { "deactivate" } else { "activate" };
        if !nav::confirm(&format!("Are you sure you want to {verb} {}?", project.project_name)) {
            return;
        }
        let state = session.get_untracked();
        leptos::task::spawn_local(async move {
            match toggle_project_status(&project, &state).await {
                Ok(_) => {
                    notice.set(None);
                    projects.update(ProjectCollection::refresh);
                }
                Err(e) => notice.set(Some(e.user_message())),
            }
        });
    };

    view! {
        <AdminHeader admin=true title="Manage projects"/>
        <main class="page">
            <div class="toolbar">
                <input
                    class="search-box__input"
                    type="search"
                    placeholder="Search projects"
                    prop:value=move || search_text.get()
                    on:input=move |ev| on_search(event_target_value(&ev))
                />
                <select
                    prop:value=move || projects.with(|c| c.filters.status.key())
                    on:change=move |ev| {
                        let status = StatusFilter::from_key(&event_target_value(&ev));
                        projects.update(|c| {
                            c.update_filters(|f| f.status = status);
                        });
                    }
                >
                    {StatusFilter::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.key()>{format!("Status: {}", s.label())}</option> })
                        .collect_view()}
                </select>
                <select
                    prop:value=move || projects.with(|c| c.filters.sort.key())
                    on:change=move |ev| {
                        let sort = ProjectSort::from_key(&event_target_value(&ev));
                        projects.update(|c| {
                            c.update_filters(|f| f.sort = sort);
                        });
                    }
                >
                    {ProjectSort::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.key()>{s.label()}</option> })
                        .collect_view()}
                </select>
                <button class="btn" on:click=on_reset>"Reset Filters"</button>
                <button class="btn" on:click=on_export>"Export CSV"</button>
                <a class="btn btn--primary" href=nav::CREATE_PROJECT>"Create project"</a>
            </div>
            <Show when=move || notice.get().is_some()>
                <p class="form-error">{move || notice.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || projects.with(|c| c.error.is_some())>
                <p class="form-error">{move || projects.with(|c| c.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show when=move || projects.with(|c| c.loading)>
                <p class="loading">"Loading projects..."</p>
            </Show>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Project"</th>
                        <th>"Status"</th>
                        <th>"Users"</th>
                        <th>"Interfaces"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || projects.with(|c| c.items.clone())
                        key=|p| (p.id.clone(), p.is_active)
                        let:project
                    >
                        {
                            let edit_href = nav::edit_project(&project.id);
                            let label = if project.is_active { "Deactivate" } else { "Activate" };
                            let summary = interface_summary(&project);
                            let target = project.clone();
                            view! {
                                <tr>
                                    <td>{project.project_name.clone()}</td>
                                    <td>
                                        <span class="badge" class:badge--inactive={!project.is_active}>
                                            {if project.is_active { "Active" } else { "Inactive" }}
                                        </span>
                                    </td>
                                    <td>{project.member_names().unwrap_or_else(|| "No users".to_owned())}</td>
                                    <td>{summary}</td>
                                    <td class="data-table__actions">
                                        <a class="btn btn--small" href=edit_href>"Edit"</a>
                                        <button
                                            class="btn btn--small"
                                            on:click=move |_| on_toggle_status(target.clone())
                                        >
                                            {label}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    </For>
                </tbody>
            </table>
            <Show when=move || projects.with(|c| !c.loading && c.items.is_empty())>
                <p class="empty">"No projects match these filters."</p>
            </Show>
        </main>
    }
}
