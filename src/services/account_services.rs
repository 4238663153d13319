// src/services/account_services.rs
use std::sync::LazyLock;

use regex::Regex;

use crate::models::account::{AdminForm, PasswordChangeForm, ProfileForm};
use crate::models::validation::ValidationErrors;
use crate::services::phone_services::strip_non_digits;
use crate::services::validation_services::looks_like_email;

// E.164 without formatting, leading '+' optional, ASCII digits only.
static PROFILE_PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{1,14}$").unwrap());

const MIN_NAME_CHARS: usize = 2;
const MIN_ADMIN_MOBILE_DIGITS: usize = 10;
const MIN_ADMIN_PASSWORD: usize = 6;
const MIN_ACCOUNT_PASSWORD: usize = 8;

fn char_len(value: &str) -> usize {
    value.trim().chars().count()
}

pub fn validate_admin(form: &AdminForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if char_len(&form.name) < MIN_NAME_CHARS {
        errors.add("name", "Name must be at least 2 characters.");
    }
    if strip_non_digits(&form.mobile).len() < MIN_ADMIN_MOBILE_DIGITS {
        errors.add("mobile", "Mobile number must be at least 10 digits.");
    }
    if !looks_like_email(&form.email) {
        errors.add("email", "Please enter a valid email address.");
    }
    if form.password.chars().count() < MIN_ADMIN_PASSWORD {
        errors.add("password", "Password must be at least 6 characters.");
    }

    errors
}

pub fn validate_profile(form: &ProfileForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if char_len(&form.full_name) < MIN_NAME_CHARS {
        errors.add("fullName", "Name must be at least 2 characters");
    }
    if !looks_like_email(&form.email) {
        errors.add("email", "Invalid email address");
    }
    if !PROFILE_PHONE_REGEX.is_match(form.mobile_no.trim()) {
        errors.add("mobileNo", "Invalid phone number");
    }

    errors
}

pub fn validate_password_change(form: &PasswordChangeForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for (field, value) in [
        ("currentPassword", &form.current_password),
        ("newPassword", &form.new_password),
        ("confirmPassword", &form.confirm_password),
    ] {
        if value.chars().count() < MIN_ACCOUNT_PASSWORD {
            errors.add(field, "Password must be at least 8 characters");
        }
    }

    if form.new_password != form.confirm_password {
        errors.add("confirmPassword", "Passwords don't match");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_form_rules() {
        let errors = validate_admin(&AdminForm {
            name: "A".into(),
            mobile: "+1 555-0100".into(),
            email: "admin@".into(),
            password: "12345".into(),
        });
        assert_eq!(errors.len(), 4);

        let ok = validate_admin(&AdminForm {
            name: "Al".into(),
            mobile: "+1 555-010-0199".into(),
            email: "admin@qrbook.ca".into(),
            password: "123456".into(),
        });
        assert!(ok.is_empty(), "{:?}", ok);
    }

    #[test]
    fn profile_form_rules() {
        let ok = validate_profile(&ProfileForm {
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            mobile_no: "+447946012345".into(),
        });
        assert!(ok.is_empty(), "{:?}", ok);

        let errors = validate_profile(&ProfileForm {
            full_name: " ".into(),
            email: "ada".into(),
            mobile_no: "+0123".into(),
        });
        assert_eq!(errors.get("fullName"), Some("Name must be at least 2 characters"));
        assert_eq!(errors.get("email"), Some("Invalid email address"));
        assert_eq!(errors.get("mobileNo"), Some("Invalid phone number"));
    }

    #[test]
    fn profile_phone_must_be_ascii_digits() {
        let errors = validate_profile(&ProfileForm {
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            mobile_no: "+٩٤٧٧١٢٣٤٥٦٧".into(),
        });
        assert_eq!(errors.get("mobileNo"), Some("Invalid phone number"));
    }

    #[test]
    fn password_change_mismatch() {
        let errors = validate_password_change(&PasswordChangeForm {
            current_password: "old-password".into(),
            new_password: "new-password".into(),
            confirm_password: "new-passw0rd".into(),
        });
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("confirmPassword"), Some("Passwords don't match"));
    }

    #[test]
    fn password_change_length_reported_before_mismatch() {
        let errors = validate_password_change(&PasswordChangeForm {
            current_password: "short".into(),
            new_password: "longenough".into(),
            confirm_password: "short".into(),
        });
        assert_eq!(
            errors.get("confirmPassword"),
            Some("Password must be at least 8 characters")
        );
        assert!(errors.contains("currentPassword"));
        assert!(!errors.contains("newPassword"));
    }
}
