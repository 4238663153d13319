// src/handlers/phone_handlers.rs
use actix_web::{get, post, web, HttpResponse, Responder};
use log::debug;

use crate::config::AppConfig;
use crate::dtos::api_dtos::ApiResponse;
use crate::dtos::phone::{FormatPhoneIn, FormatPhoneOut, MaxLengthOut, MaxLengthQuery};
use crate::services::phone_services::{
    compose_mobile_number, format_phone_number, get_max_length, normalize_country_code,
};

// A '+' in a query string decodes to a space, so "?countryCode=+44" arrives
// as " 44"; normalizing puts the '+' back.
fn country_code_or_default(raw: Option<&str>, cfg: &AppConfig) -> String {
    let code = raw.map(normalize_country_code).unwrap_or_default();
    if code.is_empty() {
        cfg.default_country_code.clone()
    } else {
        code
    }
}

/// POST /api/phone/format
/// Called on every keystroke and on country change.
#[post("/phone/format")]
pub async fn format_phone(
    cfg: web::Data<AppConfig>,
    body: web::Json<FormatPhoneIn>,
) -> impl Responder {
    let country_code = country_code_or_default(body.country_code.as_deref(), &cfg);
    let formatted = format_phone_number(&body.number, &country_code);
    let mobile_number = compose_mobile_number(&country_code, &body.number);

    debug!("formatted phone for {}: {}", country_code, formatted);

    HttpResponse::Ok().json(ApiResponse::success(
        "Phone number formatted",
        FormatPhoneOut {
            max_length: get_max_length(&country_code),
            country_code,
            formatted,
            mobile_number,
        },
    ))
}

/// GET /api/phone/max-length?countryCode=+44
#[get("/phone/max-length")]
pub async fn max_length(
    cfg: web::Data<AppConfig>,
    query: web::Query<MaxLengthQuery>,
) -> impl Responder {
    let country_code = country_code_or_default(query.country_code.as_deref(), &cfg);

    HttpResponse::Ok().json(ApiResponse::success(
        "Max length resolved",
        MaxLengthOut {
            max_length: get_max_length(&country_code),
            country_code,
        },
    ))
}
