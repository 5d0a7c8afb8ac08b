//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (header, account menu, idle banner) and
//! the route guard, reading shared state from Leptos context providers.

pub mod account_menu;
pub mod admin_header;
pub mod idle_banner;
pub mod password_checklist;
pub mod protected;
