use serde::Serialize;

use crate::domain::cart::{self, CartLineItem, PriceBreakdown};
use crate::domain::coupon;
use crate::repository::{CartReader, CartWriter};
use crate::services::{ServiceError, ServiceResult, format_cents};

/// One row of the cart table, with formatted amounts for the template.
#[derive(Debug, Serialize)]
pub struct CartLineView {
    pub product_id: i32,
    pub name: String,
    pub image: String,
    pub color: String,
    pub size: String,
    pub quantity: i32,
    pub price_formatted: String,
    pub line_total_formatted: String,
}

impl From<&CartLineItem> for CartLineView {
    fn from(line: &CartLineItem) -> Self {
        Self {
            product_id: line.product_id,
            name: line.name.clone(),
            image: line.image.clone(),
            color: line.color.clone(),
            size: line.size.clone(),
            quantity: line.quantity,
            price_formatted: format_cents(line.price_cents),
            line_total_formatted: format_cents(line.line_total_cents()),
        }
    }
}

/// Price summary with formatted amounts for the template.
#[derive(Debug, Serialize)]
pub struct PriceBreakdownView {
    pub subtotal: String,
    pub discount: String,
    pub shipping: String,
    pub tax: Option<String>,
    pub total: String,
}

impl From<PriceBreakdown> for PriceBreakdownView {
    fn from(breakdown: PriceBreakdown) -> Self {
        Self {
            subtotal: format_cents(breakdown.subtotal_cents),
            discount: format_cents(breakdown.discount_cents),
            shipping: format_cents(breakdown.shipping_cents),
            tax: breakdown.tax_cents.map(format_cents),
            total: format_cents(breakdown.total_cents),
        }
    }
}

/// Data required to render the cart page.
pub struct CartPageData {
    pub items: Vec<CartLineView>,
    pub breakdown: PriceBreakdownView,
    /// Active discount percentage, echoed next to the discount row.
    pub discount_percent: u8,
}

/// Loads the cart page. The active discount comes from the caller's
/// ephemeral session state, not from the store.
pub fn load_cart_page<S>(store: &S, discount_percent: u8) -> ServiceResult<CartPageData>
where
    S: CartReader + ?Sized,
{
    let lines = store.get_cart().map_err(ServiceError::from)?;
    let breakdown = PriceBreakdown::cart(&lines, discount_percent);

    Ok(CartPageData {
        items: lines.iter().map(CartLineView::from).collect(),
        breakdown: breakdown.into(),
        discount_percent,
    })
}

/// Applies the quantity stepper. Quantities below 1 leave the bag unchanged;
/// otherwise the store is rewritten with the updated line.
pub fn change_quantity<S>(store: &S, index: usize, quantity: i32) -> ServiceResult<()>
where
    S: CartReader + CartWriter + ?Sized,
{
    if quantity < 1 {
        return Ok(());
    }

    let lines = store.get_cart().map_err(ServiceError::from)?;
    if index >= lines.len() {
        return Err(ServiceError::NotFound);
    }

    let lines = cart::update_quantity(lines, index, quantity);
    store.set_cart(&lines).map_err(ServiceError::from)?;
    Ok(())
}

/// Removes the line at `index`, returning its name for the notice.
pub fn remove_item<S>(store: &S, index: usize) -> ServiceResult<String>
where
    S: CartReader + CartWriter + ?Sized,
{
    let lines = store.get_cart().map_err(ServiceError::from)?;
    let name = lines
        .get(index)
        .map(|line| line.name.clone())
        .ok_or(ServiceError::NotFound)?;

    let lines = cart::remove_line(lines, index);
    store.set_cart(&lines).map_err(ServiceError::from)?;
    Ok(name)
}

/// Validates a coupon code against the static table. A recognized code
/// yields its percentage; anything else is `InvalidCoupon`, and the caller
/// resets the active discount to 0 before surfacing the inline message.
pub fn apply_coupon(code: &str) -> ServiceResult<u8> {
    coupon::discount_for(code).ok_or(ServiceError::InvalidCoupon)
}
