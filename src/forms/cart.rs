use serde::Deserialize;
use validator::Validate;

fn default_quantity() -> i32 {
    1
}

/// Payload of the quantity stepper on the cart page.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityForm {
    /// Zero-based position of the line in the bag.
    pub index: usize,
    /// Requested quantity; values below 1 leave the bag unchanged.
    pub quantity: i32,
}

/// Payload of the remove button on the cart page.
#[derive(Debug, Deserialize)]
pub struct RemoveLineForm {
    /// Zero-based position of the line in the bag.
    pub index: usize,
}

/// Payload of the coupon entry field.
#[derive(Debug, Deserialize, Validate)]
pub struct ApplyCouponForm {
    /// Code entered by the shopper.
    #[validate(length(min = 1, max = 32))]
    pub code: String,
}

/// Payload of the add-to-bag form on the product detail page.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    /// Selected color variant.
    pub color: String,
    /// Selected size variant.
    pub size: String,
    /// Requested quantity.
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}
