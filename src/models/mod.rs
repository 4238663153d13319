pub mod account;
pub mod card;
pub mod country;
pub mod platform;
pub mod validation;
