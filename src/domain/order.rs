use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Fulfilment states shown on the order-history page.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Processing,
    Shipped,
    Delivered,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        };
        f.write_str(label)
    }
}

/// A line summary inside a past order.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrderItem {
    /// Product name snapshot at purchase time.
    pub name: String,
    /// Unit price snapshot in cents.
    pub price_cents: i64,
    /// Units purchased.
    pub quantity: i32,
}

/// A past order shown on the history page. Orders are fixture data; checkout
/// intentionally does not append to this history.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Order {
    /// Unique identifier of the order.
    pub id: i32,
    /// Human-friendly order reference.
    pub reference: String,
    /// Current fulfilment state.
    pub status: OrderStatus,
    /// Order total in cents, including shipping and tax.
    pub total_cents: i64,
    /// Line summaries for the order.
    pub items: Vec<OrderItem>,
    /// When the order was placed.
    pub placed_at: NaiveDateTime,
}

/// Lifecycle of a checkout attempt. The flow only moves forward; there is no
/// retry or cancel, and `Completed` is terminal for the cart instance that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutState {
    #[default]
    Editing,
    Submitting,
    Completed,
}

impl CheckoutState {
    /// Advances one step. `Completed` stays `Completed`.
    pub fn advance(self) -> Self {
        match self {
            CheckoutState::Editing => CheckoutState::Submitting,
            CheckoutState::Submitting | CheckoutState::Completed => CheckoutState::Completed,
        }
    }

    pub fn is_completed(self) -> bool {
        matches!(self, CheckoutState::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkout_only_moves_forward() {
        let state = CheckoutState::default();
        assert_eq!(state, CheckoutState::Editing);

        let state = state.advance();
        assert_eq!(state, CheckoutState::Submitting);

        let state = state.advance();
        assert!(state.is_completed());

        // Terminal: advancing a completed checkout changes nothing.
        assert_eq!(state.advance(), CheckoutState::Completed);
    }
}
