use serde::Deserialize;
use validator::Validate;

/// Form payload emitted when saving the profile page.
#[derive(Debug, Deserialize, Validate)]
pub struct ProfileForm {
    /// Display name.
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    /// Contact email.
    #[validate(email)]
    pub email: String,
    /// Optional phone number.
    #[validate(length(max = 32))]
    pub phone: Option<String>,
    /// Shipping address.
    #[validate(length(min = 1, max = 256))]
    pub address: String,
}
