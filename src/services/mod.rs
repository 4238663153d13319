pub mod account_services;
pub mod phone_services;
pub mod validation_services;
