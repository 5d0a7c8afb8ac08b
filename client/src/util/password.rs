//! Password-strength rules shown as a live checklist.
//!
//! The checklist is advisory: the backend is the authority on password
//! policy. The client only gates the submit button.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

/// Characters accepted as "special".
pub const SPECIAL_CHARS: &str = "!@#$%^&*";

/// Minimum length, counted in characters.
pub const MIN_LENGTH: usize = 8;

/// One checklist line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordRule {
    Lowercase,
    Uppercase,
    Number,
    Special,
    Length,
}

impl PasswordRule {
    pub const ALL: [Self; 5] = [Self::Lowercase, Self::Uppercase, Self::Number, Self::Special, Self::Length];

    pub fn label(self) -> &'static str {
        match self {
            Self::Lowercase => "A lowercase letter",
            Self::Uppercase => "An uppercase letter",
            Self::Number => "A number",
            Self::Special => "A special character (!@#$%^&*)",
            Self::Length => "At least 8 characters",
        }
    }

    pub fn is_met(self, password: &str) -> bool {
        match self {
            Self::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            Self::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Self::Number => password.chars().any(|c| c.is_ascii_digit()),
            Self::Special => password.chars().any(|c| SPECIAL_CHARS.contains(c)),
            Self::Length => password.chars().count() >= MIN_LENGTH,
        }
    }
}

/// Per-rule pass/fail, in checklist order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordStrength {
    pub lowercase: bool,
    pub uppercase: bool,
    pub number: bool,
    pub special: bool,
    pub length: bool,
}

impl PasswordStrength {
    pub fn evaluate(password: &str) -> Self {
        Self {
            lowercase: PasswordRule::Lowercase.is_met(password),
            uppercase: PasswordRule::Uppercase.is_met(password),
            number: PasswordRule::Number.is_met(password),
            special: PasswordRule::Special.is_met(password),
            length: PasswordRule::Length.is_met(password),
        }
    }

    pub fn all_met(self) -> bool {
        self.lowercase && self.uppercase && self.number && self.special && self.length
    }

    pub fn met(self, rule: PasswordRule) -> bool {
        match rule {
            PasswordRule::Lowercase => self.lowercase,
            PasswordRule::Uppercase => self.uppercase,
            PasswordRule::Number => self.number,
            PasswordRule::Special => self.special,
            PasswordRule::Length => self.length,
        }
    }
}

/// Submit is enabled only when every rule passes and both fields match.
pub fn can_submit_new_password(new_password: &str, confirmation: &str) -> bool {
    PasswordStrength::evaluate(new_password).all_met() && new_password == confirmation
}

/// Inline error for a change or reset form, or `None` when it may be sent.
pub fn validate_new_password(new_password: &str, confirmation: &str) -> Option<&'static str> {
    if new_password.is_empty() || confirmation.is_empty() {
        return Some("Please fill in all fields.");
    }
    if new_password != confirmation {
        return Some("Passwords do not match.");
    }
    if !PasswordStrength::evaluate(new_password).all_met() {
        return Some("Password does not meet the requirements.");
    }
    None
}

/// Reset links only require matching passwords of [`MIN_LENGTH`] or more;
/// the backend applies its own policy.
pub fn validate_reset_password(new_password: &str, confirmation: &str) -> Option<&'static str> {
    if new_password.is_empty() || confirmation.is_empty() {
        return Some("Please fill in all fields.");
    }
    if new_password != confirmation {
        return Some("Passwords do not match.");
    }
    if new_password.chars().count() < MIN_LENGTH {
        return Some("Password must be at least 8 characters long.");
    }
    None
}
