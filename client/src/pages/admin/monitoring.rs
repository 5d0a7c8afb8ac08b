//! Log monitoring: system and interface logs with filters and exports.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both streams are fetched in full on mount and independently, so one
//! failing leaves the other usable. Each has its own retry. Filtering and
//! exports run over the rows already loaded (see
//! [`crate::state::monitoring`]).

#[cfg(test)]
#[path = "monitoring_test.rs"]
mod monitoring_test;

use leptos::prelude::*;
use serde::de::DeserializeOwned;

use crate::components::admin_header::AdminHeader;
use crate::net::endpoints::ApiRequest;
use crate::net::types::{InterfaceLog, LogCategory, SystemLog};
use crate::net::{api, endpoints};
use crate::state::monitoring::{
    InterfaceLogFilters, LogStream, SystemLogFilters, available_categories, filter_interface_logs,
    filter_system_logs, interface_filter_choices, interface_logs_csv, interface_logs_pdf, sort_interface_logs,
    sort_system_logs, system_logs_csv, system_logs_pdf,
};
use crate::state::session::SessionState;
use crate::util::clock::parse_date_input;
use crate::util::csv::CSV_MIME;
use crate::util::download;
use crate::util::pdf::PDF_MIME;
use crate::util::request::TaskScope;

/// Fetch one stream into `stream`, sorting with `sort` before storing.
fn fetch_stream<T>(
    stream: RwSignal<LogStream<T>>,
    request: ApiRequest,
    sort: fn(&mut [T]),
    scope: TaskScope,
) where
    T: DeserializeOwned + Send + Sync + 'static,
{
    stream.update(LogStream::begin);
    leptos::task::spawn_local(async move {
        let result = api::send::<Vec<T>>(&request).await.map(|mut rows| {
            sort(&mut rows);
            rows
        });
        if !scope.is_alive() {
            return;
        }
        if let Err(e) = &result {
            leptos::logging::warn!("log fetch failed: {e}");
        }
        stream.update(|s| s.finish(result.map_err(|e| e.user_message())));
    });
}

#[derive(Clone, Copy)]
enum ChoiceColumn {
    Type,
    Interface,
    Project,
}

fn date_value(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

fn option_or_none(raw: String) -> Option<String> {
    (!raw.is_empty()).then_some(raw)
}

#[component]
pub fn MonitoringPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let scope = TaskScope::for_current_owner();

    let system = RwSignal::new(LogStream::<SystemLog>::default());
    let interface = RwSignal::new(LogStream::<InterfaceLog>::default());
    let system_filters = RwSignal::new(SystemLogFilters::default());
    let interface_filters = RwSignal::new(InterfaceLogFilters::default());

    let load_system = {
        let scope = scope.clone();
        move || {
            let token = session.get_untracked().token;
            fetch_stream(system, endpoints::system_logs(token.as_deref()), sort_system_logs, scope.clone());
        }
    };
    let load_interface = {
        let scope = scope.clone();
        move || {
            let token = session.get_untracked().token;
            fetch_stream(interface, endpoints::interface_logs(token.as_deref()), sort_interface_logs, scope.clone());
        }
    };
    {
        let (load_system, load_interface) = (load_system.clone(), load_interface.clone());
        Effect::new(move || {
            load_system();
            load_interface();
        });
    }
    let load_system = StoredValue::new(load_system);
    let load_interface = StoredValue::new(load_interface);

    let visible_system = Memo::new(move |_| system.with(|s| filter_system_logs(&s.items, &system_filters.get())));
    let visible_interface =
        Memo::new(move |_| interface.with(|s| filter_interface_logs(&s.items, &interface_filters.get())));
    let categories = Memo::new(move |_| system.with(|s| available_categories(&s.items)));
    let interface_choices = Memo::new(move |_| interface.with(|s| interface_filter_choices(&s.items)));

    let export_system_csv = move |_| {
        let csv = visible_system.with(|rows| system_logs_csv(rows).render());
        download::save_text(&csv, &download::file_name("system_logs", "csv"), CSV_MIME);
    };
    let export_system_pdf = move |_| {
        let pdf = visible_system.with(|rows| system_logs_pdf(rows).render());
        download::save_bytes(&pdf, &download::file_name("system_logs", "pdf"), PDF_MIME);
    };
    let export_interface_csv = move |_| {
        let csv = visible_interface.with(|rows| interface_logs_csv(rows).render());
        download::save_text(&csv, &download::file_name("interface_logs", "csv"), CSV_MIME);
    };
    let export_interface_pdf = move |_| {
        let pdf = visible_interface.with(|rows| interface_logs_pdf(rows).render());
        download::save_bytes(&pdf, &download::file_name("interface_logs", "pdf"), PDF_MIME);
    };

    let choice_options = move |column: ChoiceColumn| {
        interface_choices.with(|(types, interfaces, projects)| {
            let values = match column {
                ChoiceColumn::Type => types,
                ChoiceColumn::Interface => interfaces,
                ChoiceColumn::Project => projects,
            };
            values.iter().map(|v| view! { <option value=v.clone()>{v.clone()}</option> }).collect_view()
        })
    };

    view! {
        <AdminHeader admin=true title="Monitoring"/>
        <main class="page">
            <section class="log-panel">
                <h2>"System logs"</h2>
                <div class="toolbar">
                    <input
                        type="search"
                        placeholder="Username"
                        prop:value=move || system_filters.with(|f| f.username.clone())
                        on:input=move |ev| system_filters.update(|f| f.username = event_target_value(&ev))
                    />
                    <select
                        prop:value=move || system_filters.with(|f| f.category.map(LogCategory::key).unwrap_or_default())
                        on:change=move |ev| {
                            let category = LogCategory::from_key(&event_target_value(&ev));
                            system_filters.update(|f| f.category = category);
                        }
                    >
                        <option value="">"All actions"</option>
                        {move || {
                            categories
                                .get()
                                .into_iter()
                                .map(|c| view! { <option value=c.key()>{c.label()}</option> })
                                .collect_view()
                        }}
                    </select>
                    <input
                        type="date"
                        prop:value=move || system_filters.with(|f| date_value(f.range.start))
                        on:change=move |ev| system_filters.update(|f| f.range.start = parse_date_input(&event_target_value(&ev)))
                    />
                    <input
                        type="date"
                        prop:value=move || system_filters.with(|f| date_value(f.range.end))
                        on:change=move |ev| system_filters.update(|f| f.range.end = parse_date_input(&event_target_value(&ev)))
                    />
                    <button class="btn" on:click=move |_| system_filters.set(SystemLogFilters::default())>
                        "Clear filters"
                    </button>
                    <button class="btn" on:click=export_system_csv>"Export CSV"</button>
                    <button class="btn" on:click=export_system_pdf>"Export PDF"</button>
                </div>
                <Show when=move || system.with(|s| s.error.is_some())>
                    <p class="form-error">
                        {move || system.with(|s| s.error.clone().unwrap_or_default())}
                        <button class="btn btn--small" on:click=move |_| load_system.with_value(|f| f())>
                            "Retry"
                        </button>
                    </p>
                </Show>
                <Show when=move || !system.with(|s| s.loading) fallback=|| view! { <p class="loading">"Loading system logs..."</p> }>
                    <p class="muted">{move || format!("{} entries", visible_system.with(Vec::len))}</p>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Time"</th>
                                <th>"Username"</th>
                                <th>"Action"</th>
                                <th>"Description"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For each=move || visible_system.get() key=|l| l.id.clone() let:log>
                                <tr>
                                    <td>{log.display_time()}</td>
                                    <td>{log.user_username.clone().unwrap_or_default()}</td>
                                    <td>{log.log_type.label()}</td>
                                    <td>{log.log_description.clone()}</td>
                                </tr>
                            </For>
                        </tbody>
                    </table>
                </Show>
            </section>

            <section class="log-panel">
                <h2>"Interface logs"</h2>
                <div class="toolbar">
                    <input
                        type="search"
                        placeholder="Username"
                        prop:value=move || interface_filters.with(|f| f.username.clone())
                        on:input=move |ev| interface_filters.update(|f| f.username = event_target_value(&ev))
                    />
                    <select
                        prop:value=move || interface_filters.with(|f| f.alteration_type.clone().unwrap_or_default())
                        on:change=move |ev| {
                            interface_filters.update(|f| f.alteration_type = option_or_none(event_target_value(&ev)));
                        }
                    >
                        <option value="">"All types"</option>
                        {move || choice_options(ChoiceColumn::Type)}
                    </select>
                    <select
                        prop:value=move || {
                            interface_filters
                                .with(|f| match f.did_fail {
                                    None => "",
                                    Some(true) => "true",
                                    Some(false) => "false",
                                })
                        }
                        on:change=move |ev| {
                            let did_fail = match event_target_value(&ev).as_str() {
                                "true" => Some(true),
                                "false" => Some(false),
                                _ => None,
                            };
                            interface_filters.update(|f| f.did_fail = did_fail);
                        }
                    >
                        <option value="">"Any outcome"</option>
                        <option value="true">"Failed"</option>
                        <option value="false">"Success"</option>
                    </select>
                    <select
                        prop:value=move || interface_filters.with(|f| f.interface.clone().unwrap_or_default())
                        on:change=move |ev| {
                            interface_filters.update(|f| f.interface = option_or_none(event_target_value(&ev)));
                        }
                    >
                        <option value="">"All interfaces"</option>
                        {move || choice_options(ChoiceColumn::Interface)}
                    </select>
                    <select
                        prop:value=move || interface_filters.with(|f| f.project.clone().unwrap_or_default())
                        on:change=move |ev| {
                            interface_filters.update(|f| f.project = option_or_none(event_target_value(&ev)));
                        }
                    >
                        <option value="">"All projects"</option>
                        {move || choice_options(ChoiceColumn::Project)}
                    </select>
                    <input
                        type="date"
                        prop:value=move || interface_filters.with(|f| date_value(f.range.start))
                        on:change=move |ev| interface_filters.update(|f| f.range.start = parse_date_input(&event_target_value(&ev)))
                    />
                    <input
                        type="date"
                        prop:value=move || interface_filters.with(|f| date_value(f.range.end))
                        on:change=move |ev| interface_filters.update(|f| f.range.end = parse_date_input(&event_target_value(&ev)))
                    />
                    <button class="btn" on:click=move |_| interface_filters.set(InterfaceLogFilters::default())>
                        "Clear filters"
                    </button>
                    <button class="btn" on:click=export_interface_csv>"Export CSV"</button>
                    <button class="btn" on:click=export_interface_pdf>"Export PDF"</button>
                </div>
                <Show when=move || interface.with(|s| s.error.is_some())>
                    <p class="form-error">
                        {move || interface.with(|s| s.error.clone().unwrap_or_default())}
                        <button class="btn btn--small" on:click=move |_| load_interface.with_value(|f| f())>
                            "Retry"
                        </button>
                    </p>
                </Show>
                <Show when=move || !interface.with(|s| s.loading) fallback=|| view! { <p class="loading">"Loading interface logs..."</p> }>
                    <p class="muted">{move || format!("{} entries", visible_interface.with(Vec::len))}</p>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Time"</th>
                                <th>"Username"</th>
                                <th>"Type"</th>
                                <th>"Outcome"</th>
                                <th>"Interface"</th>
                                <th>"Project"</th>
                                <th>"Description"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For each=move || visible_interface.get() key=|l| l.id.clone() let:log>
                                <tr class:data-table__row--failed=log.did_fail>
                                    <td>{log.display_time()}</td>
                                    <td>{log.user_username.clone().unwrap_or_default()}</td>
                                    <td>{log.alteration_type.clone().unwrap_or_default()}</td>
                                    <td>{log.outcome_label()}</td>
                                    <td>{log.interface.clone().unwrap_or_default()}</td>
                                    <td>{log.project.clone().unwrap_or_default()}</td>
                                    <td>{log.log_description.clone().unwrap_or_default()}</td>
                                </tr>
                            </For>
                        </tbody>
                    </table>
                </Show>
            </section>
        </main>
    }
}
