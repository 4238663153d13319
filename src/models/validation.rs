// src/models/validation.rs
use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Field key -> human readable message. Empty means the form (or step) is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for `field`. The first message for a field wins.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepError {
    #[error("step must be one of -1, 0, 1, 2 (got {0})")]
    OutOfRange(i64),
    #[error("step must be an integer (got {0:?})")]
    NotANumber(String),
}

/// Wizard page whose fields get checked. `All` is the final submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStep {
    PersonalInfo,
    Contact,
    SocialMedia,
    #[default]
    All,
}

impl FormStep {
    pub fn index(&self) -> i64 {
        match self {
            FormStep::PersonalInfo => 0,
            FormStep::Contact => 1,
            FormStep::SocialMedia => 2,
            FormStep::All => -1,
        }
    }

    /// Whether validating `self` covers the fields of `page`.
    pub fn includes(&self, page: FormStep) -> bool {
        *self == FormStep::All || *self == page
    }
}

impl TryFrom<i64> for FormStep {
    type Error = StepError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(FormStep::All),
            0 => Ok(FormStep::PersonalInfo),
            1 => Ok(FormStep::Contact),
            2 => Ok(FormStep::SocialMedia),
            other => Err(StepError::OutOfRange(other)),
        }
    }
}

impl FromStr for FormStep {
    type Err = StepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| StepError::NotANumber(s.to_string()))?;
        FormStep::try_from(value)
    }
}
