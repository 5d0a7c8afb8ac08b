//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Pure helpers that decide what a page shows live beside
//! it and are tested natively.

pub mod admin;
pub mod change_password;
pub mod connected_devices;
pub mod disable_two_factor;
pub mod email_preferences;
pub mod forgot_password;
pub mod home;
pub mod login;
pub mod login_history;
pub mod otp;
pub mod reset_password;
pub mod two_factor_setup;
pub mod upload;
