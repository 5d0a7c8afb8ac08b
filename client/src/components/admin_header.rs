//! Top navigation for signed-in pages.

use leptos::prelude::*;

use super::account_menu::AccountMenu;
use super::idle_banner::IdleBanner;
use crate::util::nav;

const ADMIN_LINKS: [(&str, &str); 5] = [
    (nav::ADMIN, "Dashboard"),
    (nav::MANAGE_USERS, "Users"),
    (nav::MANAGE_PROJECTS, "Projects"),
    (nav::MONITORING, "Monitoring"),
    (nav::UPLOAD, "Upload"),
];

/// Header with the admin navigation when `admin` is set, otherwise just a
/// link home.
#[component]
pub fn AdminHeader(#[prop(optional)] admin: bool, #[prop(into)] title: String) -> impl IntoView {
    let brand_href = if admin { nav::ADMIN } else { nav::HOME };

    view! {
        <header class="portal-header">
            <a class="portal-header__brand" href=brand_href>
                "Portal"
            </a>
            <h1 class="portal-header__title">{title}</h1>
            <Show when=move || admin>
                <nav class="portal-header__nav">
                    {ADMIN_LINKS
                        .into_iter()
                        .map(|(href, label)| view! { <a class="portal-header__link" href=href>{label}</a> })
                        .collect_view()}
                </nav>
            </Show>
            <AccountMenu/>
        </header>
        <IdleBanner/>
    }
}
