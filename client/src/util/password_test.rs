use super::*;

#[test]
fn short_lowercase_input_only_passes_lowercase() {
    let s = PasswordStrength::evaluate("abc");
    assert_eq!(
        s,
        PasswordStrength { lowercase: true, uppercase: false, number: false, special: false, length: false }
    );
    assert!(!s.all_met());
}

#[test]
fn strong_password_passes_every_rule() {
    let s = PasswordStrength::evaluate("Abc12345!");
    assert!(s.all_met());
    for rule in PasswordRule::ALL {
        assert!(s.met(rule), "{rule:?}");
    }
}

#[test]
fn special_characters_are_limited_to_the_listed_set() {
    assert!(!PasswordRule::Special.is_met("Abc12345?"));
    assert!(PasswordRule::Special.is_met("x&y"));
}

#[test]
fn length_counts_characters_not_bytes() {
    assert!(!PasswordRule::Length.is_met("ééééééé"));
    assert!(PasswordRule::Length.is_met("éééééééé"));
}

#[test]
fn submit_requires_rules_and_matching_confirmation() {
    assert!(can_submit_new_password("Abc12345!", "Abc12345!"));
    assert!(!can_submit_new_password("Abc12345!", "Abc12345?"));
    assert!(!can_submit_new_password("abc", "abc"));
}

#[test]
fn validate_reports_first_problem() {
    assert_eq!(validate_new_password("", "x"), Some("Please fill in all fields."));
    assert_eq!(validate_new_password("Abc12345!", "nope"), Some("Passwords do not match."));
    assert_eq!(validate_new_password("abc", "abc"), Some("Password does not meet the requirements."));
    assert_eq!(validate_new_password("Abc12345!", "Abc12345!"), None);
}

#[test]
fn reset_password_only_checks_length_and_match() {
    assert_eq!(validate_reset_password("", ""), Some("Please fill in all fields."));
    assert_eq!(validate_reset_password("longenough", "longenougH"), Some("Passwords do not match."));
    assert_eq!(validate_reset_password("short", "short"), Some("Password must be at least 8 characters long."));
    assert_eq!(validate_reset_password("alllowercase", "alllowercase"), None);
}
