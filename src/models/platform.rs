// src/models/platform.rs
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

// Host match is case-sensitive; scheme, `www.` and the trailing slash are optional.
static TIKTOK_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?(www\.)?tiktok\.com/@[A-Za-z0-9._-]+/?$").unwrap()
});
static INSTAGRAM_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?(www\.)?instagram\.com/[A-Za-z0-9._]+/?$").unwrap()
});
static YOUTUBE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?(www\.)?youtube\.com/(c/|channel/|@)?[A-Za-z0-9._-]+/?$").unwrap()
});
static FACEBOOK_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?(www\.)?facebook\.com/[A-Za-z0-9.]+/?$").unwrap()
});
static WHATSAPP_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?(www\.)?(wa\.me/[0-9]+|whatsapp\.com/send\?phone=[0-9]+)/?$").unwrap()
});
static LINKEDIN_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?(www\.)?linkedin\.com/in/[A-Za-z0-9_-]+/?$").unwrap()
});
static GITHUB_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?(www\.)?github\.com/[A-Za-z0-9-]+/?$").unwrap()
});

/// Social media services a card can link to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    TikTok,
    Instagram,
    YouTube,
    Facebook,
    WhatsApp,
    LinkedIn,
    GitHub,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported platform: {0}")]
pub struct UnknownPlatform(pub String);

impl Platform {
    pub const ALL: [Platform; 7] = [
        Platform::TikTok,
        Platform::Instagram,
        Platform::YouTube,
        Platform::Facebook,
        Platform::WhatsApp,
        Platform::LinkedIn,
        Platform::GitHub,
    ];

    /// Key used by the front-end and in stored cards.
    pub fn value(&self) -> &'static str {
        match self {
            Platform::TikTok => "tiktok",
            Platform::Instagram => "instagram",
            Platform::YouTube => "youtube",
            Platform::Facebook => "facebook",
            Platform::WhatsApp => "whatsapp",
            Platform::LinkedIn => "linkedin",
            Platform::GitHub => "github",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Platform::TikTok => "TikTok",
            Platform::Instagram => "Instagram",
            Platform::YouTube => "YouTube",
            Platform::Facebook => "Facebook",
            Platform::WhatsApp => "WhatsApp",
            Platform::LinkedIn => "LinkedIn",
            Platform::GitHub => "GitHub",
        }
    }

    pub fn example_url(&self) -> &'static str {
        match self {
            Platform::TikTok => "https://tiktok.com/@username",
            Platform::Instagram => "https://instagram.com/username",
            Platform::YouTube => "https://youtube.com/@channel",
            Platform::Facebook => "https://facebook.com/username",
            Platform::WhatsApp => "https://wa.me/1234567890",
            Platform::LinkedIn => "https://linkedin.com/in/profile-name",
            Platform::GitHub => "https://github.com/username",
        }
    }

    fn url_pattern(&self) -> &'static Regex {
        match self {
            Platform::TikTok => &*TIKTOK_URL,
            Platform::Instagram => &*INSTAGRAM_URL,
            Platform::YouTube => &*YOUTUBE_URL,
            Platform::Facebook => &*FACEBOOK_URL,
            Platform::WhatsApp => &*WHATSAPP_URL,
            Platform::LinkedIn => &*LINKEDIN_URL,
            Platform::GitHub => &*GITHUB_URL,
        }
    }

    pub fn matches(&self, url: &str) -> bool {
        self.url_pattern().is_match(url)
    }
}

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.value() == s)
            .ok_or_else(|| UnknownPlatform(s.to_string()))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Catalog entry returned by `GET /api/platforms`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformInfo {
    pub value: &'static str,
    pub label: &'static str,
    pub example_url: &'static str,
}

pub fn platform_catalog() -> Vec<PlatformInfo> {
    Platform::ALL
        .iter()
        .map(|p| PlatformInfo {
            value: p.value(),
            label: p.label(),
            example_url: p.example_url(),
        })
        .collect()
}
