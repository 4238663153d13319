// src/models/country.rs
use serde::Serialize;

use crate::services::phone_services::normalize_country_code;

/// Local-number length used when a calling code has no registered rule.
pub const DEFAULT_MAX_LENGTH: usize = 10;

/// How the local digits of a number are grouped for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingRule {
    /// Fixed digit groups joined with `-`, applied progressively.
    Groups(&'static [usize]),
    /// `XX-XXX-XXXX` while typing, `XXX-XXX-XXXX` once ten digits are in.
    Adaptive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryCallingCode {
    /// Dial code without the leading `+`.
    pub code: &'static str,
    pub max_length: usize,
    pub rule: GroupingRule,
}

const CALLING_CODES: &[CountryCallingCode] = &[
    CountryCallingCode { code: "1", max_length: 10, rule: GroupingRule::Groups(&[3, 3, 4]) },
    CountryCallingCode { code: "94", max_length: 9, rule: GroupingRule::Groups(&[2, 3, 4]) },
    CountryCallingCode { code: "91", max_length: 10, rule: GroupingRule::Groups(&[5, 5]) },
    CountryCallingCode { code: "44", max_length: 11, rule: GroupingRule::Groups(&[4, 3, 4]) },
];

static DEFAULT_CALLING_CODE: CountryCallingCode = CountryCallingCode {
    code: "",
    max_length: DEFAULT_MAX_LENGTH,
    rule: GroupingRule::Adaptive,
};

impl CountryCallingCode {
    /// Registered rule for a dial code, `+` and spacing optional. `None` for
    /// unknown codes.
    pub fn lookup(country_code: &str) -> Option<&'static CountryCallingCode> {
        let normalized = normalize_country_code(country_code);
        let code = normalized.trim_start_matches('+');
        CALLING_CODES.iter().find(|c| c.code == code)
    }

    /// Like `lookup`, but unknown codes get the default rule.
    pub fn resolve(country_code: &str) -> &'static CountryCallingCode {
        Self::lookup(country_code).unwrap_or(&DEFAULT_CALLING_CODE)
    }
}

// Options offered by the card form's country selector.
const DIRECTORY: &[(&str, &str)] = &[
    ("+1", "United States"),
    ("+44", "United Kingdom"),
    ("+91", "India"),
    ("+86", "China"),
    ("+81", "Japan"),
    ("+49", "Germany"),
    ("+33", "France"),
    ("+39", "Italy"),
    ("+7", "Russia"),
    ("+55", "Brazil"),
    ("+52", "Mexico"),
    ("+34", "Spain"),
    ("+61", "Australia"),
    ("+1", "Canada"),
    ("+82", "South Korea"),
    ("+31", "Netherlands"),
    ("+90", "Turkey"),
    ("+966", "Saudi Arabia"),
    ("+27", "South Africa"),
    ("+41", "Switzerland"),
    ("+46", "Sweden"),
    ("+47", "Norway"),
    ("+45", "Denmark"),
    ("+358", "Finland"),
    ("+48", "Poland"),
    ("+43", "Austria"),
    ("+32", "Belgium"),
    ("+351", "Portugal"),
    ("+30", "Greece"),
    ("+353", "Ireland"),
    ("+64", "New Zealand"),
    ("+65", "Singapore"),
    ("+60", "Malaysia"),
    ("+66", "Thailand"),
    ("+62", "Indonesia"),
    ("+84", "Vietnam"),
    ("+63", "Philippines"),
    ("+92", "Pakistan"),
    ("+880", "Bangladesh"),
    ("+94", "Sri Lanka"),
    ("+977", "Nepal"),
    ("+20", "Egypt"),
    ("+212", "Morocco"),
    ("+971", "United Arab Emirates"),
    ("+972", "Israel"),
    ("+98", "Iran"),
    ("+964", "Iraq"),
    ("+36", "Hungary"),
    ("+420", "Czech Republic"),
    ("+421", "Slovakia"),
    ("+40", "Romania"),
    ("+359", "Bulgaria"),
    ("+380", "Ukraine"),
    ("+375", "Belarus"),
    ("+370", "Lithuania"),
    ("+371", "Latvia"),
    ("+372", "Estonia"),
    ("+373", "Moldova"),
    ("+381", "Serbia"),
    ("+385", "Croatia"),
    ("+386", "Slovenia"),
    ("+387", "Bosnia and Herzegovina"),
    ("+389", "North Macedonia"),
    ("+355", "Albania"),
    ("+382", "Montenegro"),
    ("+383", "Kosovo"),
    ("+356", "Malta"),
    ("+357", "Cyprus"),
    ("+354", "Iceland"),
    ("+352", "Luxembourg"),
    ("+377", "Monaco"),
    ("+423", "Liechtenstein"),
    ("+376", "Andorra"),
    ("+378", "San Marino"),
    ("+379", "Vatican City"),
];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryOption {
    pub dial_code: &'static str,
    pub name: &'static str,
    /// e.g. "Sri Lanka (+94)"
    pub label: String,
    pub max_length: usize,
}

pub fn countries() -> Vec<CountryOption> {
    DIRECTORY
        .iter()
        .map(|&(dial_code, name)| CountryOption {
            dial_code,
            name,
            label: format!("{} ({})", name, dial_code),
            max_length: CountryCallingCode::resolve(dial_code).max_length,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_plus_and_whitespace() {
        assert_eq!(CountryCallingCode::lookup("+94").map(|c| c.max_length), Some(9));
        assert_eq!(CountryCallingCode::lookup("44").map(|c| c.max_length), Some(11));
        assert_eq!(CountryCallingCode::lookup(" +1 ").map(|c| c.code), Some("1"));
        assert!(CountryCallingCode::lookup("+999").is_none());
    }

    #[test]
    fn lookup_accepts_space_after_plus() {
        assert_eq!(CountryCallingCode::lookup("+ 44").map(|c| c.max_length), Some(11));
        assert_eq!(CountryCallingCode::resolve("+ 94").rule, GroupingRule::Groups(&[2, 3, 4]));
        assert!(CountryCallingCode::lookup("").is_none());
    }

    #[test]
    fn resolve_falls_back_to_default() {
        let fallback = CountryCallingCode::resolve("+999");
        assert_eq!(fallback.max_length, DEFAULT_MAX_LENGTH);
        assert_eq!(fallback.rule, GroupingRule::Adaptive);
    }

    #[test]
    fn directory_carries_labels_and_lengths() {
        let all = countries();
        let uk = all.iter().find(|c| c.name == "United Kingdom").unwrap();
        assert_eq!(uk.label, "United Kingdom (+44)");
        assert_eq!(uk.max_length, 11);

        let canada = all.iter().find(|c| c.name == "Canada").unwrap();
        assert_eq!(canada.dial_code, "+1");
        assert_eq!(canada.max_length, 10);

        assert_eq!(all.iter().filter(|c| c.dial_code == "+1").count(), 2);
    }
}
