// src/handlers/account_handlers.rs
use actix_web::{post, web, Responder};
use log::debug;

use crate::handlers::validation_response;
use crate::models::account::{AdminForm, PasswordChangeForm, ProfileForm};
use crate::services::account_services::{
    validate_admin, validate_password_change, validate_profile,
};

// Account forms are never echoed back: they carry passwords.

/// POST /api/admins/validate
#[post("/admins/validate")]
pub async fn validate_admin_form(body: web::Json<AdminForm>) -> impl Responder {
    let errors = validate_admin(&body);
    debug!("admin form errors={}", errors.len());
    validation_response::<()>(errors, || None)
}

/// POST /api/profile/validate
#[post("/profile/validate")]
pub async fn validate_profile_form(body: web::Json<ProfileForm>) -> impl Responder {
    let errors = validate_profile(&body);
    debug!("profile form errors={}", errors.len());
    validation_response::<()>(errors, || None)
}

/// POST /api/password/validate
#[post("/password/validate")]
pub async fn validate_password_form(body: web::Json<PasswordChangeForm>) -> impl Responder {
    let errors = validate_password_change(&body);
    debug!("password form errors={}", errors.len());
    validation_response::<()>(errors, || None)
}
