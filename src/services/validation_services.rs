// src/services/validation_services.rs
use std::sync::LazyLock;

use regex::Regex;

use crate::models::card::{CardForm, SocialMediaLink};
use crate::models::country::CountryCallingCode;
use crate::models::platform::Platform;
use crate::models::validation::{FormStep, ValidationErrors};
use crate::services::phone_services::{
    format_phone_number, get_max_length, split_mobile_number, strip_non_digits,
};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").unwrap()
});

// 2-3 digits, 3 digits, 4 digits: nine or ten local digits in total. ASCII
// only, so the shape agrees with `strip_non_digits`.
static LOCAL_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2,3}-[0-9]{3}-[0-9]{4}$").unwrap());

static WEBSITE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?[^\s/.]+(\.[^\s/.]+)+(/\S*)?$").unwrap()
});

const MAX_COUNTRY_CODE_DIGITS: usize = 4;

pub fn looks_like_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}

fn require(errors: &mut ValidationErrors, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.add(field, message);
    }
}

/// Checks a `"+<cc> <local>"` or bare local mobile number. `None` when valid.
pub fn validate_mobile_number(mobile_number: &str) -> Option<String> {
    let trimmed = mobile_number.trim();
    if trimmed.is_empty() {
        return Some("Mobile number is required".to_string());
    }

    let invalid = || Some("Invalid mobile number format".to_string());

    match split_mobile_number(trimmed) {
        (Some(code), local) => {
            let code_digits = strip_non_digits(code);
            if code_digits.len() > MAX_COUNTRY_CODE_DIGITS {
                return invalid();
            }

            let digits = strip_non_digits(local);
            // Whatever the formatter produces for a registered code at full
            // length is accepted, e.g. "+44 7946-012-3456".
            if let Some(calling_code) = CountryCallingCode::lookup(code) {
                if digits.len() == calling_code.max_length
                    && format_phone_number(&digits, code) == local
                {
                    return None;
                }
            }

            if !LOCAL_NUMBER_REGEX.is_match(local) {
                return invalid();
            }
            if digits.len() > get_max_length(code) {
                return Some(format!("Mobile number is too long for {}", code));
            }
            None
        }
        (None, local) => {
            if LOCAL_NUMBER_REGEX.is_match(local) {
                None
            } else {
                invalid()
            }
        }
    }
}

fn validate_personal_info(form: &CardForm, errors: &mut ValidationErrors) {
    require(errors, "name", &form.name, "Name is required");
    require(errors, "pronouns", &form.pronouns, "Pronouns are required");
    require(errors, "jobPosition", &form.job_position, "Job position is required");
}

fn validate_contact(form: &CardForm, errors: &mut ValidationErrors) {
    if let Some(message) = validate_mobile_number(&form.mobile_number) {
        errors.add("mobileNumber", message);
    }

    let email = form.email.trim();
    if email.is_empty() {
        errors.add("email", "Email is required");
    } else if !looks_like_email(email) {
        errors.add("email", "Email is invalid");
    }

    if let Some(website) = form.website.as_deref().map(str::trim) {
        if !website.is_empty() && !WEBSITE_REGEX.is_match(website) {
            errors.add("website", "Website must be a valid URL, e.g. https://example.com");
        }
    }
}

fn validate_social_link(index: usize, link: &SocialMediaLink, errors: &mut ValidationErrors) {
    let platform = link.platform.trim();
    let url = link.url.trim();
    let platform_key = format!("socialMedia{}Platform", index);
    let url_key = format!("socialMedia{}Url", index);

    if platform.is_empty() && url.is_empty() {
        return;
    }
    if platform.is_empty() {
        errors.add(platform_key, "Platform is required");
        return;
    }
    if url.is_empty() {
        errors.add(url_key, "URL is required");
        return;
    }

    match platform.parse::<Platform>() {
        Ok(platform) if !platform.matches(url) => errors.add(
            url_key,
            format!(
                "Invalid {} URL. Expected format: {}",
                platform.label(),
                platform.example_url()
            ),
        ),
        Ok(_) => {}
        Err(e) => errors.add(platform_key, format!("Unsupported platform: {}", e.0)),
    }
}

fn validate_social_media(form: &CardForm, errors: &mut ValidationErrors) {
    for (index, link) in form.social_media.iter().enumerate() {
        validate_social_link(index, link, errors);
    }
}

/// Validates the fields of one wizard page, or all of them for
/// [`FormStep::All`]. Failures are reported only through the returned map.
pub fn validate_form(form: &CardForm, step: FormStep) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if step.includes(FormStep::PersonalInfo) {
        validate_personal_info(form, &mut errors);
    }
    if step.includes(FormStep::Contact) {
        validate_contact(form, &mut errors);
    }
    if step.includes(FormStep::SocialMedia) {
        validate_social_media(form, &mut errors);
    }

    errors
}
