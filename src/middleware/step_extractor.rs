// src/middleware/step_extractor.rs
use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures::future::{ready, Ready};
use log::warn;

use crate::dtos::card::StepQuery;
use crate::errors::ApiError;
use crate::models::validation::FormStep;

/// Wizard step taken from `?step=`. Missing or empty means the whole form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepFilter(pub FormStep);

impl FromRequest for StepFilter {
    type Error = ApiError;
    type Future = Ready<Result<StepFilter, ApiError>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let query = match web::Query::<StepQuery>::from_query(req.query_string()) {
            Ok(q) => q.into_inner(),
            Err(e) => return ready(Err(ApiError::BadRequest(e.to_string()))),
        };

        let step = match query.step.as_deref().map(str::trim) {
            None | Some("") => Ok(FormStep::All),
            Some(raw) => raw.parse::<FormStep>(),
        };

        ready(step.map(StepFilter).map_err(|e| {
            warn!("rejected step filter {:?}: {}", query.step, e);
            ApiError::from(e)
        }))
    }
}
