//! Administrator screens: user and project management and log monitoring.

pub mod monitoring;
pub mod project_form;
pub mod projects;
pub mod user_form;
pub mod users;
