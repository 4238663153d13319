// src/handlers/card_handlers.rs
use actix_web::{post, web, Responder};
use log::debug;

use crate::handlers::validation_response;
use crate::middleware::step_extractor::StepFilter;
use crate::models::card::CardForm;
use crate::services::validation_services::validate_form;

/// POST /api/cards/validate?step=N
/// Checks one wizard page (0 personal, 1 contact, 2 social) or, without
/// `step`, the whole card before submit. A valid card comes back normalized.
#[post("/cards/validate")]
pub async fn validate_card(
    step: StepFilter,
    body: web::Json<CardForm>,
) -> impl Responder {
    let StepFilter(step) = step;
    let form = body.into_inner();
    let errors = validate_form(&form, step);

    debug!(
        "card validation step={} errors={}",
        step.index(),
        errors.len()
    );

    validation_response(errors, || Some(form.normalized()))
}
