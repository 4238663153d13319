// src/services/phone_services.rs
//
// Phone number grouping as the user types. Every function here is pure and
// total: unknown calling codes fall back to the default rule.
use crate::models::country::{CountryCallingCode, GroupingRule};

const DEFAULT_TYPING_GROUPS: &[usize] = &[2, 3, 4];
const DEFAULT_FULL_GROUPS: &[usize] = &[3, 3, 4];

pub fn strip_non_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// `"+94"`, `"94"` and `" 94"` all become `"+94"`. Empty input stays empty.
pub fn normalize_country_code(country_code: &str) -> String {
    let digits = strip_non_digits(country_code);
    if digits.is_empty() {
        String::new()
    } else {
        format!("+{}", digits)
    }
}

/// Expected local-number length for a calling code, 10 when unknown.
pub fn get_max_length(country_code: &str) -> usize {
    CountryCallingCode::resolve(country_code).max_length
}

// Fills each group in turn; the group being typed into is emitted as-is.
fn group_progressively(digits: &str, groups: &[usize]) -> String {
    let mut parts = Vec::with_capacity(groups.len());
    let mut rest = digits;

    for &size in groups {
        if rest.is_empty() {
            break;
        }
        if rest.len() <= size {
            parts.push(rest);
            rest = "";
            break;
        }
        let (head, tail) = rest.split_at(size);
        parts.push(head);
        rest = tail;
    }

    if !rest.is_empty() {
        parts.push(rest);
    }
    parts.join("-")
}

/// Groups the local digits for display using the rule registered for
/// `country_code`.
///
/// Non-digits are ignored and digits past the code's maximum length are
/// dropped, so formatting the digits of a previous result returns that same
/// result.
pub fn format_phone_number(raw_digits: &str, country_code: &str) -> String {
    let calling_code = CountryCallingCode::resolve(country_code);
    let digits: String = strip_non_digits(raw_digits)
        .chars()
        .take(calling_code.max_length)
        .collect();

    match calling_code.rule {
        GroupingRule::Groups(groups) => group_progressively(&digits, groups),
        GroupingRule::Adaptive if digits.len() == calling_code.max_length => {
            group_progressively(&digits, DEFAULT_FULL_GROUPS)
        }
        GroupingRule::Adaptive => group_progressively(&digits, DEFAULT_TYPING_GROUPS),
    }
}

/// Canonical `"+<cc> <grouped local>"` string for a calling code and whatever
/// the user typed in the local-number box.
pub fn compose_mobile_number(country_code: &str, raw_input: &str) -> String {
    let code = normalize_country_code(country_code);
    let formatted = format_phone_number(raw_input, &code);
    format!("{} {}", code, formatted).trim().to_string()
}

/// Splits `"+<cc> <local>"` into its calling code and local part. Without a
/// `+` prefix followed by digits and whitespace the whole string is local.
pub fn split_mobile_number(mobile_number: &str) -> (Option<&str>, &str) {
    let trimmed = mobile_number.trim();
    let Some(rest) = trimmed.strip_prefix('+') else {
        return (None, trimmed);
    };

    match rest.find(char::is_whitespace) {
        Some(end) if end > 0 && rest[..end].chars().all(|c| c.is_ascii_digit()) => {
            (Some(&trimmed[..end + 1]), rest[end..].trim_start())
        }
        _ => (None, trimmed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_registered_codes() {
        assert_eq!(format_phone_number("1234567890", "+1"), "123-456-7890");
        assert_eq!(format_phone_number("771234567", "+94"), "77-123-4567");
        assert_eq!(format_phone_number("9876543210", "+91"), "98765-43210");
        assert_eq!(format_phone_number("79460123456", "+44"), "7946-012-3456");
    }

    #[test]
    fn formats_progressively_while_typing() {
        assert_eq!(format_phone_number("", "+1"), "");
        assert_eq!(format_phone_number("12", "+1"), "12");
        assert_eq!(format_phone_number("1234", "+1"), "123-4");
        assert_eq!(format_phone_number("1234567", "+1"), "123-456-7");
        assert_eq!(format_phone_number("987654", "+91"), "98765-4");
    }

    #[test]
    fn default_rule_for_unknown_codes() {
        assert_eq!(format_phone_number("12", "+999"), "12");
        assert_eq!(format_phone_number("12345", "+999"), "12-345");
        assert_eq!(format_phone_number("123456789", "+999"), "12-345-6789");
        assert_eq!(format_phone_number("1234567890", "+999"), "123-456-7890");
        assert_eq!(format_phone_number("1234567890", ""), "123-456-7890");
    }

    #[test]
    fn extra_digits_and_separators_are_dropped() {
        assert_eq!(format_phone_number("(123) 456-7890 99", "+1"), "123-456-7890");
        assert_eq!(format_phone_number("7712345678", "+94"), "77-123-4567");
    }

    #[test]
    fn formatting_is_idempotent() {
        for (digits, code) in [
            ("1234567890", "+1"),
            ("123456", "+1"),
            ("771234567", "+94"),
            ("9876543210", "+91"),
            ("79460123456", "+44"),
            ("1234567", "+999"),
        ] {
            let once = format_phone_number(digits, code);
            let twice = format_phone_number(&strip_non_digits(&once), code);
            assert_eq!(once, twice, "not idempotent for {} {}", code, digits);
        }
    }

    #[test]
    fn max_length_table() {
        assert_eq!(get_max_length("+1"), 10);
        assert_eq!(get_max_length("+94"), 9);
        assert_eq!(get_max_length("+91"), 10);
        assert_eq!(get_max_length("+44"), 11);
        assert_eq!(get_max_length("44"), 11);
        assert_eq!(get_max_length("+999"), 10);
    }

    #[test]
    fn compose_builds_canonical_string() {
        assert_eq!(compose_mobile_number("+1", "123 456 7890"), "+1 123-456-7890");
        assert_eq!(compose_mobile_number(" 94", "771234567"), "+94 77-123-4567");
        assert_eq!(compose_mobile_number("+44", ""), "+44");
    }

    #[test]
    fn split_separates_code_and_local() {
        assert_eq!(split_mobile_number("+1 23-456-7890"), (Some("+1"), "23-456-7890"));
        assert_eq!(split_mobile_number(" +94  77-123-4567 "), (Some("+94"), "77-123-4567"));
        assert_eq!(split_mobile_number("23-456-7890"), (None, "23-456-7890"));
        assert_eq!(split_mobile_number("+11234567890"), (None, "+11234567890"));
        assert_eq!(split_mobile_number("+ 123"), (None, "+ 123"));
    }

    #[test]
    fn normalizes_country_codes() {
        assert_eq!(normalize_country_code("1"), "+1");
        assert_eq!(normalize_country_code(" +44"), "+44");
        assert_eq!(normalize_country_code(""), "");
    }
}
