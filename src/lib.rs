//! Validation and normalization service for QR business card forms.
//!
//! The rules live in [`services`] as pure functions; [`handlers`] exposes them
//! to the front-end over a small JSON API.
pub mod config;
pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

pub use models::card::{CardForm, SocialMediaLink};
pub use models::validation::{FormStep, ValidationErrors};
pub use services::phone_services::{format_phone_number, get_max_length};
pub use services::validation_services::validate_form;
