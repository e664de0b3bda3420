use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Result type returned by the checkout form helpers.
pub type CheckoutFormResult<T> = Result<T, CheckoutFormError>;

/// Errors that can occur while processing the checkout form.
#[derive(Debug, Error)]
pub enum CheckoutFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The card number contains characters other than digits and spaces.
    #[error("card number must contain only digits")]
    InvalidCardNumber,
    /// The expiry is not in MM/YY form.
    #[error("expiry date must use the MM/YY format")]
    InvalidExpiry,
    /// The security code is not 3 or 4 digits.
    #[error("security code must be 3 or 4 digits")]
    InvalidCvv,
}

/// Shipping and payment details collected at checkout. The demo validates
/// shape only; nothing is charged or stored.
#[derive(Debug, Deserialize, Validate)]
pub struct CheckoutForm {
    #[validate(length(min = 1, max = 64))]
    pub first_name: String,
    #[validate(length(min = 1, max = 64))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 128))]
    pub address: String,
    #[validate(length(min = 1, max = 64))]
    pub city: String,
    #[validate(length(min = 1, max = 64))]
    pub state: String,
    #[validate(length(min = 1, max = 16))]
    pub zip_code: String,
    #[validate(length(min = 12, max = 23))]
    pub card_number: String,
    #[validate(length(min = 1, max = 64))]
    pub card_name: String,
    #[validate(length(min = 5, max = 5))]
    pub expiry_date: String,
    #[validate(length(min = 3, max = 4))]
    pub cvv: String,
}

impl CheckoutForm {
    /// Runs field validation plus the format checks the derive cannot
    /// express.
    pub fn ensure_valid(&self) -> CheckoutFormResult<()> {
        self.validate()?;

        let digits: String = self
            .card_number
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .collect();
        if digits.is_empty() || !digits.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(CheckoutFormError::InvalidCardNumber);
        }

        let mut parts = self.expiry_date.splitn(2, '/');
        let month = parts.next().unwrap_or_default();
        let year = parts.next().unwrap_or_default();
        let month_ok = month.len() == 2
            && month.chars().all(|ch| ch.is_ascii_digit())
            && matches!(month.parse::<u8>(), Ok(1..=12));
        let year_ok = year.len() == 2 && year.chars().all(|ch| ch.is_ascii_digit());
        if !month_ok || !year_ok {
            return Err(CheckoutFormError::InvalidExpiry);
        }

        if !self.cvv.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(CheckoutFormError::InvalidCvv);
        }

        Ok(())
    }
}
