// src/handlers/catalog_handlers.rs
use actix_web::{get, HttpResponse, Responder};
use serde::Serialize;

use crate::dtos::api_dtos::ApiResponse;
use crate::models::country::countries;
use crate::models::platform::platform_catalog;

#[derive(Serialize)]
struct HealthOut {
    service: &'static str,
    version: &'static str,
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::success(
        "ok",
        HealthOut {
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        },
    ))
}

/// GET /api/countries
/// Options for the country code selector.
#[get("/countries")]
pub async fn list_countries() -> impl Responder {
    let countries = countries();
    HttpResponse::Ok().json(ApiResponse::success(
        format!("{} countries", countries.len()),
        countries,
    ))
}

/// GET /api/platforms
#[get("/platforms")]
pub async fn list_platforms() -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::success("Supported platforms", platform_catalog()))
}
