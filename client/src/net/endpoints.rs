//! Request descriptions for every backend endpoint the portal calls.
//!
//! DESIGN
//! ======
//! Builders here are pure: they produce an [`ApiRequest`] value (method,
//! path, body, bearer) and never touch the network, so paths, encodings, and
//! payloads are unit-tested natively. [`super::api`] turns a request into a
//! browser `fetch`.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use serde::Serialize;

use super::audit::AuditEntry;
use super::error::ApiError;
use super::types::{
    EmailPreferenceUpdate, ForgotPasswordRequest, NewPassword, NewProject, NewUser, OtpRequest,
    ProjectPatch, ResetPasswordRequest, StatusChange, UserPatch,
};
use crate::util::query::{encode_segment, pair, with_query};

/// Backend used when `PORTAL_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Public-IP lookup used when logging a blocked login.
pub const PUBLIC_IP_URL: &str = "https://api.ipify.org?format=json";

/// Multipart CSV upload target.
pub const UPLOAD_CSV_PATH: &str = "/api/upload-csv";

/// Base URL of the REST backend, fixed at build time.
pub fn api_base() -> &'static str {
    option_env!("PORTAL_API_URL").unwrap_or(DEFAULT_API_URL)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    Empty,
    Json(serde_json::Value),
    /// `application/x-www-form-urlencoded` pairs.
    Form(Vec<(String, String)>),
}

/// One HTTP call, described but not yet sent.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Backend-relative path, or an absolute URL used as-is.
    pub path: String,
    pub body: Body,
    pub bearer: Option<String>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), body: Body::Empty, bearer: None }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if `body` cannot be represented as JSON.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        self.body = Body::Json(serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?);
        Ok(self)
    }

    #[must_use]
    pub fn form(mut self, pairs: Vec<(String, String)>) -> Self {
        self.body = Body::Form(pairs);
        self
    }

    #[must_use]
    pub fn bearer(mut self, token: Option<&str>) -> Self {
        self.bearer = token.filter(|t| !t.is_empty()).map(str::to_owned);
        self
    }

    /// Full URL against `base`.
    pub fn url(&self, base: &str) -> String {
        if self.path.starts_with("http://") || self.path.starts_with("https://") {
            return self.path.clone();
        }
        format!("{}{}", base.trim_end_matches('/'), self.path)
    }
}

// =============================================================
// Authentication
// =============================================================

fn credentials(username: &str, password: &str) -> Vec<(String, String)> {
    vec![pair("username", username), pair("password", password)]
}

/// `POST /token` with form-encoded credentials.
pub fn login(username: &str, password: &str) -> ApiRequest {
    ApiRequest::post("/token").form(credentials(username, password))
}

/// `POST /token/change-password`: re-authentication that still succeeds
/// while the password is expired.
pub fn reauthenticate_for_password_change(username: &str, password: &str) -> ApiRequest {
    ApiRequest::post("/token/change-password").form(credentials(username, password))
}

pub fn user_profile(username: &str) -> ApiRequest {
    ApiRequest::get(format!("/users/{}", encode_segment(username)))
}

/// # Errors
///
/// Propagates body serialization failures.
pub fn change_password(username: &str, new_password: &str, token: Option<&str>) -> Result<ApiRequest, ApiError> {
    ApiRequest::put(format!("/users/{}/change-password", encode_segment(username)))
        .json(&NewPassword { new_password: new_password.to_owned() })
        .map(|r| r.bearer(token))
}

pub fn verify_token(token: &str) -> ApiRequest {
    ApiRequest::get(format!("/verify-token/{}", encode_segment(token)))
}

/// # Errors
///
/// Propagates body serialization failures.
pub fn verify_otp(username: &str, otp: &str) -> Result<ApiRequest, ApiError> {
    ApiRequest::post(format!("/verify-2fa/{}", encode_segment(username)))
        .json(&OtpRequest { username: username.to_owned(), otp: otp.trim().to_owned() })
}

pub fn two_factor_setup(username: &str) -> ApiRequest {
    ApiRequest::get(format!("/2fa/setup/{}", encode_segment(username)))
}

pub fn save_two_factor_secret(username: &str, secret: &str) -> ApiRequest {
    ApiRequest::put(format!(
        "/2fa/setup/save-secret/{}/{}",
        encode_segment(username),
        encode_segment(secret)
    ))
}

pub fn disable_two_factor(username: &str, token: Option<&str>) -> ApiRequest {
    ApiRequest::put(format!("/2fa/disable/{}", encode_segment(username))).bearer(token)
}

/// # Errors
///
/// Propagates body serialization failures.
pub fn forgot_password(email: &str) -> Result<ApiRequest, ApiError> {
    ApiRequest::post("/forgot-password").json(&ForgotPasswordRequest { email: email.trim().to_owned() })
}

/// # Errors
///
/// Propagates body serialization failures.
pub fn reset_password(token: &str, new_password: &str) -> Result<ApiRequest, ApiError> {
    ApiRequest::post("/reset-password")
        .json(&ResetPasswordRequest { token: token.to_owned(), new_password: new_password.to_owned() })
}

// =============================================================
// Logs
// =============================================================

/// # Errors
///
/// Propagates body serialization failures.
pub fn record_log(entry: &AuditEntry, token: Option<&str>) -> Result<ApiRequest, ApiError> {
    ApiRequest::post("/logs/").json(entry).map(|r| r.bearer(token))
}

pub fn system_logs(token: Option<&str>) -> ApiRequest {
    ApiRequest::get("/logs/").bearer(token)
}

pub fn interface_logs(token: Option<&str>) -> ApiRequest {
    ApiRequest::get("/interface-logs/").bearer(token)
}

pub fn login_history(username: &str, token: Option<&str>) -> ApiRequest {
    ApiRequest::get(format!("/logs/login/{}", encode_segment(username))).bearer(token)
}

// =============================================================
// Users
// =============================================================

pub fn users(query: &[(String, String)], token: Option<&str>) -> ApiRequest {
    ApiRequest::get(with_query("/api/users", query)).bearer(token)
}

pub fn user(id: &str, token: Option<&str>) -> ApiRequest {
    ApiRequest::get(format!("/api/users/{}", encode_segment(id))).bearer(token)
}

/// # Errors
///
/// Propagates body serialization failures.
pub fn create_user(user: &NewUser, token: Option<&str>) -> Result<ApiRequest, ApiError> {
    ApiRequest::post("/api/users").json(user).map(|r| r.bearer(token))
}

/// # Errors
///
/// Propagates body serialization failures.
pub fn update_user(id: &str, patch: &UserPatch, token: Option<&str>) -> Result<ApiRequest, ApiError> {
    ApiRequest::put(format!("/api/users/{}", encode_segment(id)))
        .json(patch)
        .map(|r| r.bearer(token))
}

/// # Errors
///
/// Propagates body serialization failures.
pub fn set_user_status(id: &str, is_active: bool, token: Option<&str>) -> Result<ApiRequest, ApiError> {
    ApiRequest::put(format!("/api/users/{}/status", encode_segment(id)))
        .json(&StatusChange { is_active })
        .map(|r| r.bearer(token))
}

pub fn delete_user(id: &str, token: Option<&str>) -> ApiRequest {
    ApiRequest::delete(format!("/api/users/{}", encode_segment(id))).bearer(token)
}

pub fn user_autocomplete(query: &str, token: Option<&str>) -> ApiRequest {
    ApiRequest::get(with_query("/api/v1/users/autocomplete", &[pair("q", query.trim())])).bearer(token)
}

// =============================================================
// Projects
// =============================================================

pub fn projects(query: &[(String, String)], token: Option<&str>) -> ApiRequest {
    ApiRequest::get(with_query("/api/projects", query)).bearer(token)
}

pub fn project(id: &str, token: Option<&str>) -> ApiRequest {
    ApiRequest::get(format!("/api/projects/{}", encode_segment(id))).bearer(token)
}

/// # Errors
///
/// Propagates body serialization failures.
pub fn create_project(project: &NewProject, token: Option<&str>) -> Result<ApiRequest, ApiError> {
    ApiRequest::post("/api/projects").json(project).map(|r| r.bearer(token))
}

/// # Errors
///
/// Propagates body serialization failures.
pub fn update_project(id: &str, patch: &ProjectPatch, token: Option<&str>) -> Result<ApiRequest, ApiError> {
    ApiRequest::put(format!("/api/projects/{}", encode_segment(id)))
        .json(patch)
        .map(|r| r.bearer(token))
}

/// # Errors
///
/// Propagates body serialization failures.
pub fn set_project_status(id: &str, is_active: bool, token: Option<&str>) -> Result<ApiRequest, ApiError> {
    ApiRequest::put(format!("/api/projects/{}/status", encode_segment(id)))
        .json(&StatusChange { is_active })
        .map(|r| r.bearer(token))
}

// =============================================================
// Uploads and account
// =============================================================

pub fn upload_history(token: Option<&str>) -> ApiRequest {
    ApiRequest::get("/api/uploads/history").bearer(token)
}

pub fn device_sessions(token: Option<&str>) -> ApiRequest {
    ApiRequest::get("/api/user/sessions").bearer(token)
}

pub fn revoke_device_session(id: &str, token: Option<&str>) -> ApiRequest {
    ApiRequest::delete(format!("/api/user/sessions/{}", encode_segment(id))).bearer(token)
}

pub fn email_preferences(token: Option<&str>) -> ApiRequest {
    ApiRequest::get("/api/v1/email-preferences/projects").bearer(token)
}

/// # Errors
///
/// Propagates body serialization failures.
pub fn update_email_preference(project_id: &str, notify: bool, token: Option<&str>) -> Result<ApiRequest, ApiError> {
    ApiRequest::put(format!("/api/v1/email-preferences/projects/{}", encode_segment(project_id)))
        .json(&EmailPreferenceUpdate { notify_interface_changes: notify })
        .map(|r| r.bearer(token))
}

pub fn public_ip() -> ApiRequest {
    ApiRequest::get(PUBLIC_IP_URL)
}
