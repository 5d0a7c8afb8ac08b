//! Route paths and full-page navigation.

pub const LOGIN: &str = "/";
pub const HOME: &str = "/home";
pub const ADMIN: &str = "/admin";
pub const CHANGE_PASSWORD: &str = "/change-password";
pub const FORGOT_PASSWORD: &str = "/forgot-password";
pub const RESET_PASSWORD: &str = "/reset-password";
pub const TWO_FACTOR_SETUP: &str = "/2fa-setup";
pub const OTP: &str = "/otp-verification";
pub const DISABLE_2FA: &str = "/disable-2fa";
pub const CONNECTED_DEVICES: &str = "/connected-devices";
pub const LOGIN_HISTORY: &str = "/login-history";
pub const EMAIL_PREFERENCES: &str = "/email-preferences";
pub const UPLOAD: &str = "/upload";
pub const MANAGE_USERS: &str = "/admin/manage-users";
pub const CREATE_USER: &str = "/admin/manage-users/create-user";
pub const MANAGE_PROJECTS: &str = "/admin/manage-projects";
pub const CREATE_PROJECT: &str = "/admin/manage-projects/create-project";
pub const MONITORING: &str = "/admin/monitoring";

pub fn edit_user(id: &str) -> String {
    format!("{MANAGE_USERS}/edit-user/{id}")
}

pub fn edit_project(id: &str) -> String {
    format!("{MANAGE_PROJECTS}/edit-project/{id}")
}

/// Reload the document at `path`, dropping all in-memory state.
pub fn hard_redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}

/// Blocking browser confirmation; `false` off-browser.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
