//! Signed-in devices with per-device revocation.

use leptos::prelude::*;

use crate::components::admin_header::AdminHeader;
use crate::net::types::DeviceSession;
use crate::net::{api, endpoints};
use crate::state::session::SessionState;
use crate::util::clock::format_timestamp;
use crate::util::nav;
use crate::util::request::{Generation, TaskScope};

fn describe(value: Option<&str>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or("Unknown").to_owned()
}

#[component]
pub fn ConnectedDevicesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let devices = RwSignal::new(Vec::<DeviceSession>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let scope = TaskScope::for_current_owner();
    let generation = Generation::default();

    let load = {
        let scope = scope.clone();
        move || {
            let ticket = generation.next();
            let generation = generation.clone();
            let scope = scope.clone();
            let token = session.get_untracked().token;
            loading.set(true);
            leptos::task::spawn_local(async move {
                let result = api::send::<Vec<DeviceSession>>(&endpoints::device_sessions(token.as_deref())).await;
                if !scope.is_alive() || !generation.is_current(ticket) {
                    return;
                }
                match result {
                    Ok(list) => {
                        devices.set(list);
                        error.set(None);
                    }
                    Err(e) => error.set(Some(e.user_message())),
                }
                loading.set(false);
            });
        }
    };

    let initial = load.clone();
    Effect::new(move || initial());

    let revoke = move |id: String| {
        if !nav::confirm("Revoke this device? It will be signed out.") {
            return;
        }
        let token = session.get_untracked().token;
        let scope = scope.clone();
        let reload = load.clone();
        leptos::task::spawn_local(async move {
            let result = api::send_empty(&endpoints::revoke_device_session(&id, token.as_deref())).await;
            if !scope.is_alive() {
                return;
            }
            match result {
                Ok(()) => reload(),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };
    let revoke = StoredValue::new(revoke);

    view! {
        <AdminHeader title="Connected devices"/>
        <main class="page">
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p class="loading">"Loading devices..."</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Device"</th>
                            <th>"IP address"</th>
                            <th>"Location"</th>
                            <th>"Signed in"</th>
                            <th>"Last active"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=move || devices.get() key=|d| d.id.clone() let:device>
                            <tr class:data-table__row--current=device.is_current>
                                <td>{describe(device.device_info.as_deref())}</td>
                                <td>{describe(device.ip_address.as_deref())}</td>
                                <td>{describe(device.location.as_deref())}</td>
                                <td>{device.created_at.as_deref().map(format_timestamp).unwrap_or_default()}</td>
                                <td>{device.last_active_at.as_deref().map(format_timestamp).unwrap_or_default()}</td>
                                <td>
                                    {if device.is_current {
                                        view! { <span class="badge">"This device"</span> }.into_any()
                                    } else {
                                        let id = device.id.clone();
                                        view! {
                                            <button
                                                class="btn btn--small btn--danger"
                                                on:click=move |_| revoke.with_value(|f| f(id.clone()))
                                            >
                                                "Revoke"
                                            </button>
                                        }
                                            .into_any()
                                    }}
                                </td>
                            </tr>
                        </For>
                    </tbody>
                </table>
                <Show when=move || devices.with(Vec::is_empty)>
                    <p class="empty">"No connected devices."</p>
                </Show>
            </Show>
        </main>
    }
}
