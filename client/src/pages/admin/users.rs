//! User administration list: server-side filters, autocomplete, CSV export.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filter edits go through [`UserCollection`], which coalesces them into one
//! backend fetch. Free-text search is debounced here before it reaches the
//! collection; autocomplete runs on the raw input with its own generation so
//! a slow suggestion reply never replaces a newer one.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::components::admin_header::AdminHeader;
use crate::net::audit::AuditEntry;
use crate::net::error::ApiError;
use crate::net::types::{Project, Role, User, UserSuggestion};
use crate::net::{api, endpoints};
use crate::state::collection::{SEARCH_DEBOUNCE_MS, StatusFilter, install_fetcher};
use crate::state::session::SessionState;
use crate::state::users::{UserCollection, UserSort, should_autocomplete};
use crate::util::clock::{now_ms, sleep_ms};
use crate::util::csv::CSV_MIME;
use crate::util::download;
use crate::util::nav;
use crate::util::request::{Generation, TaskScope};

/// Flip a user's active flag and record it.
///
/// # Errors
///
/// Returns the status update failure; the audit entry is best effort.
pub(crate) async fn toggle_user_status(user: &User, session: &SessionState) -> Result<bool, ApiError> {
    let active = !user.is_active;
    let token = session.token();
    api::send_empty(&endpoints::set_user_status(&user.id, active, token)?).await?;
    let entry = AuditEntry::user_status_changed(&session.username_or_empty(), &user.username, active, now_ms());
    if let Err(e) = api::record_audit(&entry, token).await {
        leptos::logging::warn!("status audit failed: {e}");
    }
    Ok(active)
}

fn status_button_label(user: &User) -> &'static str {
    if user.is_active { "Deactivate" } else { "Activate" }
}

#[component]
pub fn ManageUsersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let users = RwSignal::new(UserCollection::new());
    install_fetcher(users, session, endpoints::users);

    let scope = TaskScope::for_current_owner();
    let search_text = RwSignal::new(String::new());
    let suggestions = RwSignal::new(Vec::<UserSuggestion>::new());
    let project_names = RwSignal::new(Vec::<String>::new());
    let notice = RwSignal::new(None::<String>);
    let debounce = Generation::default();
    let autocomplete = Generation::default();

    let projects_scope = scope.clone();
    Effect::new(move || {
        let token = session.get_untracked().token;
        let scope = projects_scope.clone();
        leptos::task::spawn_local(async move {
            match api::send::<Vec<Project>>(&endpoints::projects(&[], token.as_deref())).await {
                Ok(list) if scope.is_alive() => {
                    let mut names: Vec<String> = list.into_iter().map(|p| p.project_name).collect();
                    names.sort();
                    project_names.set(names);
                }
                Ok(_) => {}
                Err(e) => leptos::logging::warn!("project filter options failed: {e}"),
            }
        });
    });

    let on_search = {
        let scope = scope.clone();
        let debounce = debounce.clone();
        let autocomplete = autocomplete.clone();
        move |text: String| {
            search_text.set(text.clone());
            let ticket = debounce.next();
            let debounce = debounce.clone();
            let debounce_scope = scope.clone();
            let query = text.clone();
            leptos::task::spawn_local(async move {
                sleep_ms(SEARCH_DEBOUNCE_MS).await;
                if debounce_scope.is_alive() {
                    users.update(|c| {
                        c.apply_debounced(&debounce, ticket, |f| f.search = query);
                    });
                }
            });

            let ticket = autocomplete.next();
            if !should_autocomplete(&text) {
                suggestions.set(Vec::new());
                return;
            }
            let autocomplete = autocomplete.clone();
            let scope = scope.clone();
            let token = session.get_untracked().token;
            leptos::task::spawn_local(async move {
                let result =
                    api::send::<Vec<UserSuggestion>>(&endpoints::user_autocomplete(&text, token.as_deref())).await;
                if !scope.is_alive() || !autocomplete.is_current(ticket) {
                    return;
                }
                match result {
                    Ok(list) => suggestions.set(list),
                    Err(e) => {
                        leptos::logging::warn!("user autocomplete failed: {e}");
                        suggestions.set(Vec::new());
                    }
                }
            });
        }
    };
    let on_search = StoredValue::new(on_search);

    let pick_suggestion = {
        let debounce = debounce.clone();
        let autocomplete = autocomplete.clone();
        move |username: String| {
            debounce.invalidate();
            autocomplete.invalidate();
            suggestions.set(Vec::new());
            search_text.set(username.clone());
            users.update(|c| {
                c.update_filters(|f| f.search = username);
            });
        }
    };
    let pick_suggestion = StoredValue::new(pick_suggestion);

    let on_reset = move |_| {
        debounce.invalidate();
        autocomplete.invalidate();
        search_text.set(String::new());
        suggestions.set(Vec::new());
        users.update(|c| {
            c.reset_filters();
        });
    };

    let on_export = move |_| {
        let csv = users.with(UserCollection::export_csv);
        download::save_text(&csv, &download::file_name("users", "csv"), CSV_MIME);
    };

    let on_toggle_status = move |user: User| {
        let state = session.get_untracked();
        let verb = status_button_label(&user).to_lowercase();
        if !nav::confirm(&format!("Are you sure you want to {verb} {}?", user.username)) {
            return;
        }
        leptos::task::spawn_local(async move {
            match toggle_user_status(&user, &state).await {
                Ok(_) => {
                    notice.set(None);
                    users.update(UserCollection::refresh);
                }
                Err(e) => notice.set(Some(e.user_message())),
            }
        });
    };

    view! {
        <AdminHeader admin=true title="Manage users"/>
        <main class="page">
            <div class="toolbar">
                <div class="search-box">
                    <input
                        class="search-box__input"
                        type="search"
                        placeholder="Search users"
                        prop:value=move || search_text.get()
                        on:input=move |ev| on_search.with_value(|f| f(event_target_value(&ev)))
                    />
                    <Show when=move || !suggestions.with(Vec::is_empty)>
                        <ul class="search-box__suggestions">
                            {move || {
                                suggestions
                                    .get()
                                    .into_iter()
                                    .map(|s| {
                                        let name = s.username.clone();
                                        view! {
                                            <li on:click=move |_| pick_suggestion.with_value(|f| f(name.clone()))>
                                                {s.username}
                                                <span class="muted">{s.email.unwrap_or_default()}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </Show>
                </div>
                <select
                    prop:value=move || users.with(|c| c.filters.status.key())
                    on:change=move |ev| {
                        let status = StatusFilter::from_key(&event_target_value(&ev));
                        users.update(|c| {
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
                    prop:value=move || users.with(|c| c.filters.sort.key())
                    on:change=move |ev| {
                        let sort = UserSort::from_key(&event_target_value(&ev));
                        users.update(|c| {
                            c.update_filters(|f| f.sort = sort);
                        });
                    }
                >
                    {UserSort::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.key()>{s.label()}</option> })
                        .collect_view()}
                </select>
                <button class="btn" on:click=on_reset>"Reset Filters"</button>
                <button class="btn" on:click=on_export>"Export CSV"</button>
                <a class="btn btn--primary" href=nav::CREATE_USER>"Create user"</a>
            </div>
            <div class="filter-row">
                <span class="filter-row__label">"Permission:"</span>
                {Role::ALL
                    .into_iter()
                    .map(|role| {
                        view! {
                            <label class="filter-chip">
                                <input
                                    type="checkbox"
                                    prop:checked=move || users.with(|c| c.filters.roles.contains(&role))
                                    on:change=move |_| {
                                        users.update(|c| {
                                            c.update_filters(|f| f.toggle_role(role));
                                        });
                                    }
                                />
                                {role.label()}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="filter-row">
                <span class="filter-row__label">"Projects:"</span>
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
                                        prop:checked=move || users.with(|c| c.filters.projects.contains(&checked_name))
                                        on:change=move |_| {
                                            users.update(|c| {
                                                c.update_filters(|f| f.toggle_project(&toggle_name));
                                            });
                                        }
                                    />
                                    {name}
                                </label>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <Show when=move || notice.get().is_some()>
                <p class="form-error">{move || notice.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || users.with(|c| c.error.is_some())>
                <p class="form-error">{move || users.with(|c| c.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show when=move || users.with(|c| c.loading)>
                <p class="loading">"Loading users..."</p>
            </Show>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Username"</th>
                        <th>"Email"</th>
                        <th>"Permission"</th>
                        <th>"Status"</th>
                        <th>"Projects"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || users.with(|c| c.items.clone()) key=|u| (u.id.clone(), u.is_active) let:user>
                        {
                            let edit_href = nav::edit_user(&user.id);
                            let label = status_button_label(&user);
                            let target = user.clone();
                            view! {
                                <tr>
                                    <td>{user.username.clone()}</td>
                                    <td>{user.email.clone().unwrap_or_default()}</td>
                                    <td>{user.role.label()}</td>
                                    <td>
                                        <span class="badge" class:badge--inactive={!user.is_active}>
                                            {user.status_label()}
                                        </span>
                                    </td>
                                    <td>{user.project_names(", ").unwrap_or_else(|| "No projects".to_owned())}</td>
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
            <Show when=move || users.with(|c| !c.loading && c.items.is_empty())>
                <p class="empty">"No users match these filters."</p>
            </Show>
        </main>
    }
}
