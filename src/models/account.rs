// src/models/account.rs
use serde::Deserialize;

/// Dashboard "add admin" form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AdminForm {
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub password: String,
}

/// Edit-profile form of a signed-in user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileForm {
    pub full_name: String,
    pub email: String,
    pub mobile_no: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PasswordChangeForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}
