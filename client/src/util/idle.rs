//! Inactivity monitor: warn after 55 idle minutes, sign out after 60.
//!
//! DESIGN
//! ======
//! Pointer movement and clicks overwrite the last-activity stamp in storage.
//! A 10-second poll feeds the stamp into [`IdleMonitor::poll`], which owns
//! the decision and its one-shot bookkeeping. The browser wiring in
//! [`install`] only carries out the returned [`IdleAction`].
//!
//! The stamp lives in storage rather than in memory so every tab of the
//! portal sees the same activity.

#[cfg(test)]
#[path = "idle_test.rs"]
mod idle_test;

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::ui::UiState;

pub const POLL_INTERVAL_SECS: u64 = 10;
pub const WARN_AFTER_SECS: i64 = 55 * 60;
pub const LOGOUT_AFTER_SECS: i64 = 60 * 60;

/// What the poll loop should do after one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdleAction {
    Nothing,
    Warn,
    Logout,
}

/// Idle decision state for one page lifetime.
#[derive(Clone, Debug, Default)]
pub struct IdleMonitor {
    warned: bool,
    stopped: bool,
}

impl IdleMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once a logout has been issued; the poll loop should exit.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Decide the action for the current tick.
    ///
    /// A missing activity stamp is treated as "no information" rather than
    /// "idle since the epoch". A clock that runs backwards clamps to zero.
    pub fn poll(&mut self, now_ms: i64, last_activity_ms: Option<i64>, signed_in: bool) -> IdleAction {
        if self.stopped || !signed_in {
            return IdleAction::Nothing;
        }
        let Some(last) = last_activity_ms else {
            return IdleAction::Nothing;
        };
        let idle_secs = now_ms.saturating_sub(last).max(0) / 1000;

        if idle_secs >= LOGOUT_AFTER_SECS {
            self.stopped = true;
            return IdleAction::Logout;
        }
        if idle_secs >= WARN_AFTER_SECS {
            if self.warned {
                return IdleAction::Nothing;
            }
            self.warned = true;
            return IdleAction::Warn;
        }
        self.warned = false;
        IdleAction::Nothing
    }
}

/// Register activity listeners and start the poll loop. Call once from the
/// application root.
pub fn install(session: RwSignal<SessionState>, ui: RwSignal<UiState>) {
    #[cfg(feature = "hydrate")]
    {
        use std::time::Duration;

        use crate::net::{api, audit::AuditEntry};
        use crate::util::clock::now_ms;
        use crate::util::request::TaskScope;
        use crate::util::storage::browser_session;

        let touch = move || {
            browser_session().record_activity(now_ms());
            if ui.get_untracked().idle_warning {
                ui.update(|u| u.idle_warning = false);
            }
        };
        let on_move = window_event_listener(leptos::ev::mousemove, move |_| touch());
        let on_click = window_event_listener(leptos::ev::click, move |_| touch());

        let scope = TaskScope::for_current_owner();
        leptos::task::spawn_local(async move {
            let mut monitor = IdleMonitor::new();
            loop {
                gloo_timers::future::sleep(Duration::from_secs(POLL_INTERVAL_SECS)).await;
                if !scope.is_alive() {
                    break;
                }
                let store = browser_session();
                let signed_in = session.get_untracked().username.is_some();
                match monitor.poll(now_ms(), store.last_activity(), signed_in) {
                    IdleAction::Nothing => {}
                    IdleAction::Warn => {
                        leptos::logging::log!("idle warning shown");
                        ui.update(|u| u.idle_warning = true);
                    }
                    IdleAction::Logout => {
                        let state = session.get_untracked();
                        let entry = AuditEntry::auto_logout(state.username.as_deref().unwrap_or_default(), now_ms());
                        session.update(SessionState::clear_credentials);
                        browser_session().clear_credentials();
                        if let Err(e) = api::record_audit(&entry, state.token.as_deref()).await {
                            leptos::logging::warn!("auto-logout audit failed: {e}");
                        }
                        crate::util::nav::hard_redirect(crate::util::nav::LOGIN);
                        break;
                    }
                }
            }
        });
        on_cleanup(move || {
            on_move.remove();
            on_click.remove();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, ui);
    }
}
