pub mod account_handlers;
pub mod card_handlers;
pub mod catalog_handlers;
pub mod phone_handlers;

use actix_web::{web, HttpResponse};
use log::debug;
use serde::Serialize;

use crate::dtos::api_dtos::{ApiResponse, ValidationOut};
use crate::errors::ApiError;
use crate::models::validation::ValidationErrors;

/// 200 with the (optional) normalized form when `errors` is empty, 400 with
/// the error map otherwise.
pub(crate) fn validation_response<T: Serialize>(
    errors: ValidationErrors,
    valid_form: impl FnOnce() -> Option<T>,
) -> HttpResponse {
    if errors.is_empty() {
        return HttpResponse::Ok().json(ApiResponse::success(
            "Validation passed",
            ValidationOut {
                valid: true,
                errors,
                form: valid_form(),
            },
        ));
    }

    let fields: Vec<&str> = errors.iter().map(|(field, _)| field).collect();
    debug!("validation failed on: {}", fields.join(", "));

    let message = match errors.len() {
        1 => "1 field needs attention".to_string(),
        n => format!("{} fields need attention", n),
    };
    HttpResponse::BadRequest().json(ApiResponse::error(
        message,
        Some(ValidationOut::<T> {
            valid: false,
            errors,
            form: None,
        }),
    ))
}

/// Registers every route plus the JSON body error handler.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into());

    cfg.app_data(json_config)
        .service(catalog_handlers::health)
        .service(
            web::scope("/api")
                .service(card_handlers::validate_card)
                .service(phone_handlers::format_phone)
                .service(phone_handlers::max_length)
                .service(catalog_handlers::list_countries)
                .service(catalog_handlers::list_platforms)
                .service(account_handlers::validate_admin_form)
                .service(account_handlers::validate_profile_form)
                .service(account_handlers::validate_password_form),
        );
}
