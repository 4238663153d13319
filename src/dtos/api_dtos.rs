// src/dtos/api_dtos.rs
use serde::Serialize;

use crate::models::validation::ValidationErrors;

/// Envelope shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: String,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            data,
        }
    }
}

/// Outcome of validating any of the forms.
#[derive(Debug, Serialize)]
pub struct ValidationOut<T: Serialize> {
    pub valid: bool,
    pub errors: ValidationErrors,
    /// Normalized form, only when `valid`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<T>,
}
