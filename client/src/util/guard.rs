//! Route guard decisions.
//!
//! Every protected route verifies the stored token on mount. Missing,
//! rejected, and unverifiable tokens all clear the session and redirect to
//! sign-in; applying the check again with the same bad token repeats the
//! same outcome. Role-restricted routes also need the profile's role.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::{Role, UserProfile};
use crate::net::{api, endpoints};
use crate::state::session::SessionState;

/// Result of asking the backend about the stored token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verification {
    MissingToken,
    Rejected,
    Accepted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    RedirectLogin,
    /// Signed in, but the role may not see this route.
    RedirectHome,
}

/// Apply a verification result to the session.
pub fn evaluate(
    session: &mut SessionState,
    verification: Verification,
    required: Option<&[Role]>,
    role: Option<Role>,
) -> GuardOutcome {
    match verification {
        Verification::MissingToken | Verification::Rejected => {
            session.clear_credentials();
            GuardOutcome::RedirectLogin
        }
        Verification::Accepted => match required {
            None => GuardOutcome::Allow,
            Some(roles) if role.is_some_and(|r| roles.contains(&r)) => GuardOutcome::Allow,
            Some(_) => GuardOutcome::RedirectHome,
        },
    }
}

/// `GET /verify-token/{token}`. Network failures count as rejection.
pub async fn verify(token: Option<&str>) -> Verification {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return Verification::MissingToken;
    };
    match api::send_empty(&endpoints::verify_token(token)).await {
        Ok(()) => Verification::Accepted,
        Err(e) => {
            leptos::logging::warn!("token verification failed: {e}");
            Verification::Rejected
        }
    }
}

/// Role of the signed-in user, if the profile loads.
pub async fn fetch_role(username: &str, token: Option<&str>) -> Option<Role> {
    api::send::<UserProfile>(&endpoints::user_profile(username).bearer(token))
        .await
        .ok()
        .map(|p| p.role)
}
