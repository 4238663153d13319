// src/dtos/phone_dtos.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatPhoneIn {
    /// falls back to the configured default when missing
    pub country_code: Option<String>,
    /// empty on a country change before anything was typed
    #[serde(default)]
    pub number: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatPhoneOut {
    pub country_code: String,
    pub formatted: String,
    pub mobile_number: String,
    pub max_length: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxLengthQuery {
    pub country_code: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxLengthOut {
    pub country_code: String,
    pub max_length: usize,
}
