// src/errors.rs
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::dtos::api_dtos::ApiResponse;
use crate::models::validation::StepError;

/// Request-level failures. Field validation problems are not errors; they
/// travel inside `ValidationErrors`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid step: {0}")]
    InvalidStep(#[from] StepError),
    #[error("invalid request: {0}")]
    BadRequest(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidStep(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiResponse::<()>::error(self.to_string(), None))
    }
}
