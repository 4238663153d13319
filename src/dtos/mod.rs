pub mod api_dtos;
pub mod card_dtos;
pub mod phone_dtos;
// alias so handlers can write `crate::dtos::card` / `crate::dtos::phone`
pub use card_dtos as card;
pub use phone_dtos as phone;
