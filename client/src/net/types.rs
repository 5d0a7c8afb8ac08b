//! Wire DTOs for the portal's REST backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON exactly. Identifiers arrive as
//! numbers from some endpoints and strings from others, so every `id` is
//! normalised to a `String` on the way in. Optional fields default rather
//! than fail, keeping older backend versions readable.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::interfaces::INTERFACES;

// =============================================================
// Users and auth
// =============================================================

/// Permission level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
    /// Unknown roles read as the least privileged one.
    #[default]
    #[serde(other)]
    Viewer,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Admin, Self::Editor, Self::Viewer];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Editor => "editor",
            Self::Viewer => "viewer",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Editor => "Editor",
            Self::Viewer => "Viewer",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == raw)
    }
}

/// `POST /token` success body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// `GET /users/{username}` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
    /// Set on accounts created by an admin until 2FA is configured.
    #[serde(default)]
    pub is_first_login: bool,
    #[serde(default)]
    pub is_2fa_active: bool,
}

/// A project reference embedded in a user row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub id: Option<String>,
    pub project_name: String,
}

/// A user row from `/api/users`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub projects: Vec<ProjectRef>,
}

impl User {
    pub fn status_label(&self) -> &'static str {
        if self.is_active { "Active" } else { "Inactive" }
    }

    /// Project names joined with `sep`, or `None` when unassigned.
    pub fn project_names(&self, sep: &str) -> Option<String> {
        if self.projects.is_empty() {
            return None;
        }
        Some(self.projects.iter().map(|p| p.project_name.as_str()).collect::<Vec<_>>().join(sep))
    }
}

/// Creation payload for `POST /api/users`.
///
/// New accounts must configure 2FA and change their password at first
/// sign-in, so the password-change date is pinned far in the past.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: Role,
    pub last_password_change: String,
    pub is_first_login: bool,
    pub secret: String,
    pub is_2fa_active: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<String>,
}

impl NewUser {
    pub const EXPIRED_PASSWORD_DATE: &'static str = "2000-01-01 00:00:00";

    pub fn new(username: &str, password: &str, email: &str, role: Role, projects: Vec<String>) -> Self {
        Self {
            username: username.trim().to_owned(),
            password: password.to_owned(),
            email: email.trim().to_owned(),
            role,
            last_password_change: Self::EXPIRED_PASSWORD_DATE.to_owned(),
            is_first_login: true,
            secret: String::new(),
            is_2fa_active: true,
            projects,
        }
    }
}

/// Partial update for `PUT /api/users/{id}`. Only changed fields are sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<String>>,
}

impl UserPatch {
    /// Compare edited form values against the loaded user.
    pub fn diff(initial: &User, username: &str, email: &str, role: Role, projects: &[String]) -> Self {
        let username = username.trim();
        let email = email.trim();
        let mut before: Vec<&str> = initial.projects.iter().map(|p| p.project_name.as_str()).collect();
        let mut after: Vec<&str> = projects.iter().map(String::as_str).collect();
        before.sort_unstable();
        after.sort_unstable();
        Self {
            username: (username != initial.username).then(|| username.to_owned()),
            email: (email != initial.email.as_deref().unwrap_or_default()).then(|| email.to_owned()),
            role: (role != initial.role).then_some(role),
            projects: (before != after).then(|| projects.to_vec()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.role.is_none() && self.projects.is_none()
    }
}

/// Body for the `/status` endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    pub is_active: bool,
}

/// One `/api/v1/users/autocomplete` suggestion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSuggestion {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

// =============================================================
// Projects
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMember {
    pub username: String,
}

/// A project from `/api/projects`. Interface flags are top-level booleans
/// keyed by the names in [`INTERFACES`]; they are kept in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub project_name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub project_users: Vec<ProjectMember>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

fn default_true() -> bool {
    true
}

impl Project {
    pub fn interface_enabled(&self, key: &str) -> bool {
        self.extra.get(key).and_then(serde_json::Value::as_bool).unwrap_or(false)
    }

    /// Flags for every known interface, in table order.
    pub fn interface_flags(&self) -> InterfaceFlags {
        InterfaceFlags(INTERFACES.iter().map(|i| (i.key.to_owned(), self.interface_enabled(i.key))).collect())
    }

    /// `(key, label)` for each enabled interface.
    pub fn enabled_interfaces(&self) -> Vec<(&'static str, &'static str)> {
        INTERFACES
            .iter()
            .filter(|i| self.interface_enabled(i.key))
            .map(|i| (i.key, i.label))
            .collect()
    }

    pub fn member_names(&self) -> Option<String> {
        if self.project_users.is_empty() {
            return None;
        }
        Some(self.project_users.iter().map(|m| m.username.as_str()).collect::<Vec<_>>().join(", "))
    }
}

/// Interface key to enabled flag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InterfaceFlags(pub BTreeMap<String, bool>);

impl InterfaceFlags {
    /// Every interface disabled.
    pub fn none() -> Self {
        Self(INTERFACES.iter().map(|i| (i.key.to_owned(), false)).collect())
    }

    pub fn get(&self, key: &str) -> bool {
        self.0.get(key).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, key: &str) {
        let entry = self.0.entry(key.to_owned()).or_insert(false);
        *entry = !*entry;
    }

    pub fn enabled_count(&self) -> usize {
        self.0.values().filter(|v| **v).count()
    }
}

/// Creation payload for `POST /api/projects`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewProject {
    pub project_name: String,
    #[serde(flatten)]
    pub interfaces: InterfaceFlags,
}

/// Partial update for `PUT /api/projects/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(flatten)]
    pub interfaces: BTreeMap<String, bool>,
}

impl ProjectPatch {
    pub fn diff(initial: &Project, project_name: &str, flags: &InterfaceFlags) -> Self {
        let project_name = project_name.trim();
        let interfaces = INTERFACES
            .iter()
            .filter(|i| flags.get(i.key) != initial.interface_enabled(i.key))
            .map(|i| (i.key.to_owned(), flags.get(i.key)))
            .collect();
        Self {
            project_name: (project_name != initial.project_name).then(|| project_name.to_owned()),
            interfaces,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.project_name.is_none() && self.interfaces.is_empty()
    }
}

// =============================================================
// 2FA, passwords
// =============================================================

/// `GET /2fa/setup/{username}` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoFactorSetup {
    /// PNG image, base64 without a data-URL prefix.
    pub qr_code_base64: String,
    pub secret: String,
}

impl TwoFactorSetup {
    pub fn qr_data_url(&self) -> String {
        format!("data:image/png;base64,{}", self.qr_code_base64)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OtpRequest {
    pub username: String,
    pub otp: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewPassword {
    pub new_password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

/// Generic `{message}` / `{detail}` acknowledgement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl Acknowledgement {
    pub fn text_or(&self, fallback: &str) -> String {
        self.message
            .as_deref()
            .or(self.detail.as_deref())
            .unwrap_or(fallback)
            .to_owned()
    }
}

// =============================================================
// Account pages
// =============================================================

/// A signed-in device from `/api/user/sessions`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSession {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub device_info: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_active_at: Option<String>,
    #[serde(default)]
    pub is_current: bool,
}

/// `/logs/login/{username}` returns plain descriptions or full log rows.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LoginHistoryEntry {
    Text(String),
    Entry {
        log_description: String,
        #[serde(default)]
        timestamp: Option<String>,
    },
}

impl LoginHistoryEntry {
    pub fn description(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Entry { log_description, .. } => log_description,
        }
    }

    pub fn timestamp(&self) -> Option<&str> {
        match self {
            Self::Text(_) => None,
            Self::Entry { timestamp, .. } => timestamp.as_deref(),
        }
    }
}

/// Per-project notification opt-in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailPreference {
    #[serde(deserialize_with = "deserialize_id")]
    pub project_id: String,
    pub project_name: String,
    #[serde(rename = "receber_notificacoes_alteracoes_interface", alias = "notify_interface_changes", default)]
    pub notify_interface_changes: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EmailPreferenceUpdate {
    #[serde(rename = "receber_notificacoes_alteracoes_interface")]
    pub notify_interface_changes: bool,
}

// =============================================================
// Uploads
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub filename: String,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub interface: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default, alias = "uploadedAt")]
    pub uploaded_at: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

impl UploadRecord {
    /// CSS modifier for the status badge.
    pub fn status_class(&self) -> String {
        format!("status-badge {}", self.status.to_ascii_lowercase())
    }
}

// =============================================================
// Monitoring
// =============================================================

/// Structured audit category stored with each system log.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogCategory {
    Login,
    Logout,
    AutoLogout,
    LoginBlocked,
    PasswordChanged,
    PasswordReset,
    TwoFactorDisabled,
    UserCreated,
    UserUpdated,
    UserDeleted,
    UserStatusChanged,
    ProjectCreated,
    ProjectUpdated,
    EmailNotification,
    #[default]
    #[serde(other)]
    Other,
}

impl LogCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Logout => "Logout",
            Self::AutoLogout => "Automatic logout",
            Self::LoginBlocked => "Login blocked",
            Self::PasswordChanged => "Password changed",
            Self::PasswordReset => "Password reset",
            Self::TwoFactorDisabled => "2FA disabled",
            Self::UserCreated => "User created",
            Self::UserUpdated => "User updated",
            Self::UserDeleted => "User deleted",
            Self::UserStatusChanged => "User status changed",
            Self::ProjectCreated => "Project created",
            Self::ProjectUpdated => "Project updated",
            Self::EmailNotification => "Email notification",
            Self::Other => "Other",
        }
    }

    /// Wire name, as used in filter `<option>` values.
    pub fn key(self) -> String {
        serde_json::to_value(self)
            .ok()
            .and_then(|v| v.as_str().map(str::to_owned))
            .unwrap_or_default()
    }

    pub fn from_key(key: &str) -> Option<Self> {
        serde_json::from_value(serde_json::Value::String(key.to_owned())).ok()
    }
}

/// A row from `GET /logs/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemLog {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub user_username: Option<String>,
    #[serde(default, deserialize_with = "deserialize_category")]
    pub log_type: LogCategory,
    #[serde(default)]
    pub log_description: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// A row from `GET /interface-logs/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceLog {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub user_username: Option<String>,
    #[serde(default)]
    pub alteration_type: Option<String>,
    #[serde(default)]
    pub interface: Option<String>,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(rename = "didFail", alias = "did_fail", default)]
    pub did_fail: bool,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub log_description: Option<String>,
}

// =============================================================
// Helpers
// =============================================================

fn id_from_value<E: serde::de::Error>(value: serde_json::Value) -> Result<String, E> {
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(E::custom("expected string or integer id")),
    }
}

pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    id_from_value(serde_json::Value::deserialize(deserializer)?)
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        other => id_from_value::<D::Error>(other).map(Some),
    }
}

/// `null` reads as [`LogCategory::Other`], like a missing field.
fn deserialize_category<'de, D>(deserializer: D) -> Result<LogCategory, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<LogCategory>::deserialize(deserializer)?.unwrap_or_default())
}
