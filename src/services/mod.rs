use thiserror::Error;

use crate::repository::RepositoryError;

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod dashboard;
pub mod favorites;
pub mod orders;
pub mod profile;
pub mod shop;

/// Errors surfaced by the service layer. Every variant maps to a
/// user-facing fallback: a flash message, a redirect or a dedicated page.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The visitor's role does not allow the requested page or action.
    #[error("not authorized")]
    Unauthorized,
    /// The requested record does not exist.
    #[error("not found")]
    NotFound,
    /// The coupon code is not recognized; the active discount resets to 0.
    #[error("invalid coupon code")]
    InvalidCoupon,
    /// Checkout was attempted with an empty bag.
    #[error("cart is empty")]
    EmptyCart,
    /// The action is a placeholder in the demo.
    #[error("feature not implemented")]
    NotImplemented,
    /// A form payload failed validation.
    #[error("{0}")]
    Form(String),
    /// A repository call failed.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Formats an amount in cents as a dollar string, e.g. `1299` -> `12.99`.
pub(crate) fn format_cents(cents: i64) -> String {
    format!("{:.2}", cents as f64 / 100.0)
}
