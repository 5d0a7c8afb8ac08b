//! Sign-in state machine: classify the `/token` result and pick the next
//! route.
//!
//! DESIGN
//! ======
//! anonymous -> submitted -> one of
//! password-expired | rate-limited | 2FA setup | OTP challenge | home | failed.
//!
//! Transitions depend only on the response status and the profile flags, so
//! they are pure functions here and the login page only performs effects.
//! The attempt counter and CAPTCHA gate are friction for humans, not a
//! security boundary; throttling is the backend's job (HTTP 429).

#[cfg(test)]
#[path = "login_flow_test.rs"]
mod login_flow_test;

use crate::net::error::{ApiError, GENERIC_MESSAGE};
use crate::net::types::{TokenResponse, UserProfile};
use crate::net::{api, endpoints};
use crate::util::nav;

/// Failed attempts after which the CAPTCHA acknowledgement is required.
pub const CAPTCHA_THRESHOLD: u32 = 3;

pub const AUTH_FAILED: &str = "Authentication failed!";
pub const CREDENTIALS_REQUIRED: &str = "Username and password are required";
pub const PASSWORD_EXPIRED: &str = "Your password has expired. Please change your password.";
pub const RATE_LIMITED: &str = "Too many failed attempts. Please wait before trying again.";

/// How a failed sign-in should be handled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginFailure {
    /// 403: keep the username and send the user to change-password.
    PasswordExpired,
    /// 429: log a block event with the caller's IP.
    RateLimited,
    /// Wrong credentials or another refusal; counts as a failed attempt.
    Rejected(String),
    /// No usable response.
    Unreachable,
}

impl LoginFailure {
    pub fn message(&self) -> String {
        match self {
            Self::PasswordExpired => PASSWORD_EXPIRED.to_owned(),
            Self::RateLimited => RATE_LIMITED.to_owned(),
            Self::Rejected(message) => message.clone(),
            Self::Unreachable => GENERIC_MESSAGE.to_owned(),
        }
    }

    pub fn counts_as_attempt(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

pub fn classify_login_error(err: &ApiError) -> LoginFailure {
    match err {
        ApiError::Status { status: 403, .. } => LoginFailure::PasswordExpired,
        ApiError::RateLimited => LoginFailure::RateLimited,
        ApiError::Unauthorized { detail } | ApiError::Status { detail, .. } => {
            LoginFailure::Rejected(detail.clone().unwrap_or_else(|| AUTH_FAILED.to_owned()))
        }
        ApiError::Validation(message) => LoginFailure::Rejected(message.clone()),
        ApiError::Network(_) | ApiError::Decode(_) | ApiError::Unavailable => LoginFailure::Unreachable,
    }
}

/// First-login accounts set up 2FA regardless of the 2FA flag. Accounts
/// without 2FA go straight home, admins included.
pub fn route_after_login(profile: &UserProfile) -> &'static str {
    if profile.is_first_login {
        nav::TWO_FACTOR_SETUP
    } else if !profile.is_2fa_active {
        nav::HOME
    } else {
        nav::OTP
    }
}

pub fn captcha_required(attempts: u32) -> bool {
    attempts >= CAPTCHA_THRESHOLD
}

pub fn can_submit_login(attempts: u32, captcha_acknowledged: bool, loading: bool) -> bool {
    !loading && (!captcha_required(attempts) || captcha_acknowledged)
}

/// # Errors
///
/// Returns [`ApiError::Validation`] when either field is blank.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), ApiError> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(ApiError::Validation(CREDENTIALS_REQUIRED.to_owned()));
    }
    Ok(())
}

/// Exchange credentials for a token, then load the profile that decides
/// the next route.
///
/// # Errors
///
/// Returns the first failing call's [`ApiError`].
pub async fn authenticate(username: &str, password: &str) -> Result<(String, UserProfile), ApiError> {
    validate_credentials(username, password)?;
    let username = username.trim();
    let token: TokenResponse = api::send(&endpoints::login(username, password)).await?;
    let profile: UserProfile =
        api::send(&endpoints::user_profile(username).bearer(Some(&token.access_token))).await?;
    Ok((token.access_token, profile))
}
