// src/dtos/card_dtos.rs
use serde::Deserialize;

/// `?step=` of `POST /api/cards/validate`; absent means the whole form.
#[derive(Debug, Deserialize)]
pub struct StepQuery {
    pub step: Option<String>,
}
