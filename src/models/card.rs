// src/models/card.rs
use serde::{Deserialize, Serialize};

use crate::services::phone_services::{
    compose_mobile_number, get_max_length, split_mobile_number, strip_non_digits,
};

/// One `{platform, url}` row of the social media step. Platform stays a raw
/// string here so an unsupported value is reported as a field error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialMediaLink {
    pub platform: String,
    pub url: String,
}

impl SocialMediaLink {
    pub fn new(platform: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            url: url.into(),
        }
    }
}

/// Business card data as collected by the three-step wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardForm {
    pub name: String,
    pub pronouns: String,
    pub job_position: String,
    /// "+<country code> <grouped local number>"
    pub mobile_number: String,
    pub email: String,
    pub website: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    /// URL of an already uploaded image.
    pub profile_image: Option<String>,
    pub social_media: Vec<SocialMediaLink>,
}

fn trim_optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl CardForm {
    /// Copy with whitespace trimmed, blank social rows dropped and a
    /// full-length mobile number regrouped into canonical form. Anything else
    /// (no country code, partial number) is left as typed.
    pub fn normalized(&self) -> CardForm {
        let mobile = self.mobile_number.trim();
        let mobile_number = match split_mobile_number(mobile) {
            (Some(code), local) if strip_non_digits(local).len() == get_max_length(code) => {
                compose_mobile_number(code, local)
            }
            _ => mobile.to_string(),
        };

        CardForm {
            name: self.name.trim().to_string(),
            pronouns: self.pronouns.trim().to_string(),
            job_position: self.job_position.trim().to_string(),
            mobile_number,
            email: self.email.trim().to_string(),
            website: trim_optional(&self.website),
            address: trim_optional(&self.address),
            description: trim_optional(&self.description),
            profile_image: trim_optional(&self.profile_image),
            social_media: self
                .social_media
                .iter()
                .filter(|link| !link.platform.trim().is_empty() || !link.url.trim().is_empty())
                .map(|link| SocialMediaLink::new(link.platform.trim(), link.url.trim()))
                .collect(),
        }
    }
}
