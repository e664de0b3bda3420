use crate::domain::cart::PriceBreakdown;
use crate::domain::order::CheckoutState;
use crate::forms::checkout::CheckoutForm;
use crate::repository::{CartReader, CartWriter};
use crate::services::cart::{CartLineView, PriceBreakdownView};
use crate::services::{ServiceError, ServiceResult};

/// Data required to render the checkout page. An empty `items` list renders
/// the empty-state prompt instead of the forms.
pub struct CheckoutPageData {
    pub items: Vec<CartLineView>,
    pub breakdown: PriceBreakdownView,
}

/// Loads the checkout summary, which includes sales tax on top of the cart
/// figures.
pub fn load_checkout_page<S>(store: &S, discount_percent: u8) -> ServiceResult<CheckoutPageData>
where
    S: CartReader + ?Sized,
{
    let lines = store.get_cart().map_err(ServiceError::from)?;
    let breakdown = PriceBreakdown::checkout(&lines, discount_percent);

    Ok(CheckoutPageData {
        items: lines.iter().map(CartLineView::from).collect(),
        breakdown: breakdown.into(),
    })
}

/// Receipt returned by a completed checkout.
pub struct OrderReceipt {
    /// Final charge in cents, including discount, shipping and tax.
    pub total_cents: i64,
    /// Terminal state of the checkout flow.
    pub state: CheckoutState,
}

/// Validates the checkout form and walks the checkout state machine forward.
/// An empty bag blocks the order; success clears the persisted cart, so the
/// next visit starts with a fresh bag.
pub fn place_order<S>(
    store: &S,
    form: &CheckoutForm,
    discount_percent: u8,
) -> ServiceResult<OrderReceipt>
where
    S: CartReader + CartWriter + ?Sized,
{
    form.ensure_valid()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let lines = store.get_cart().map_err(ServiceError::from)?;
    if lines.is_empty() {
        return Err(ServiceError::EmptyCart);
    }

    let breakdown = PriceBreakdown::checkout(&lines, discount_percent);

    // Editing -> Submitting -> Completed, forward only. Payment capture is
    // out of scope, so submitting always succeeds.
    let state = CheckoutState::default().advance().advance();
    store.clear_cart().map_err(ServiceError::from)?;

    Ok(OrderReceipt {
        total_cents: breakdown.total_cents,
        state,
    })
}
