//! Audit-trail entries written to `POST /logs/`.
//!
//! Each entry carries a structured [`LogCategory`] so the monitoring page
//! can filter on it without parsing the description text.

#[cfg(test)]
#[path = "audit_test.rs"]
mod audit_test;

use serde::Serialize;

use super::types::{LogCategory, Role};
use crate::util::clock::describe_instant;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AuditEntry {
    pub log_description: String,
    pub user_username: String,
    pub log_type: LogCategory,
}

impl AuditEntry {
    pub fn new(category: LogCategory, username: &str, description: String) -> Self {
        Self { log_description: description, user_username: username.to_owned(), log_type: category }
    }

    pub fn login(username: &str, at_ms: i64) -> Self {
        Self::new(LogCategory::Login, username, format!("User has logged in at {}", describe_instant(at_ms)))
    }

    pub fn logout(username: &str, at_ms: i64) -> Self {
        Self::new(LogCategory::Logout, username, format!("User has logged out at {}", describe_instant(at_ms)))
    }

    pub fn auto_logout(username: &str, at_ms: i64) -> Self {
        Self::new(
            LogCategory::AutoLogout,
            username,
            format!("User has been logged out due to inactivity at {}", describe_instant(at_ms)),
        )
    }

    pub fn login_blocked(username: &str, at_ms: i64, ip: &str) -> Self {
        Self::new(
            LogCategory::LoginBlocked,
            username,
            format!(
                "Login has been blocked by multiple failed login attempts at {} from IP address: {ip}",
                describe_instant(at_ms)
            ),
        )
    }

    pub fn password_changed(username: &str, at_ms: i64) -> Self {
        Self::new(
            LogCategory::PasswordChanged,
            username,
            format!("User has changed the password at {}", describe_instant(at_ms)),
        )
    }

    pub fn two_factor_disabled(username: &str, at_ms: i64) -> Self {
        Self::new(
            LogCategory::TwoFactorDisabled,
            username,
            format!("User has disabled Two-Factor Authentication at {}", describe_instant(at_ms)),
        )
    }

    pub fn user_created(actor: &str, role: Role, created: &str, at_ms: i64) -> Self {
        Self::new(
            LogCategory::UserCreated,
            actor,
            format!("User has created a new {} user ({created}) at {}", role.as_str(), describe_instant(at_ms)),
        )
    }

    pub fn user_updated(actor: &str, target: &str, at_ms: i64) -> Self {
        Self::new(
            LogCategory::UserUpdated,
            actor,
            format!("{actor} updated the user {target} at {}", describe_instant(at_ms)),
        )
    }

    pub fn user_deleted(actor: &str, target: &str, at_ms: i64) -> Self {
        Self::new(
            LogCategory::UserDeleted,
            actor,
            format!("{actor} deleted the user {target} at {}", describe_instant(at_ms)),
        )
    }

    pub fn user_status_changed(actor: &str, target: &str, active: bool, at_ms: i64) -> Self {
        let verb = if active { "activated" } else { "deactivated" };
        Self::new(
            LogCategory::UserStatusChanged,
            actor,
            format!("{actor} {verb} the user {target} at {}", describe_instant(at_ms)),
        )
    }

    pub fn project_created(actor: &str, project: &str, at_ms: i64) -> Self {
        Self::new(
            LogCategory::ProjectCreated,
            actor,
            format!("User has created a new project ({project}) at {}", describe_instant(at_ms)),
        )
    }

    pub fn project_updated(actor: &str, project: &str, at_ms: i64) -> Self {
        Self::new(
            LogCategory::ProjectUpdated,
            actor,
            format!("{actor} updated the project {project} at {}", describe_instant(at_ms)),
        )
    }
}
