use serde::Serialize;

use crate::domain::order::Order;
use crate::domain::session::Session;
use crate::fixtures;
use crate::services::{ServiceError, ServiceResult, format_cents};

/// One row of the order-history table.
#[derive(Debug, Serialize)]
pub struct OrderView {
    pub id: i32,
    pub reference: String,
    pub status: String,
    pub placed_on: String,
    pub item_count: i32,
    pub total_formatted: String,
}

impl From<Order> for OrderView {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            reference: order.reference,
            status: order.status.to_string(),
            placed_on: order.placed_at.format("%B %e, %Y").to_string(),
            item_count: order.items.iter().map(|item| item.quantity).sum(),
            total_formatted: format_cents(order.total_cents),
        }
    }
}

/// Data required to render the order-history page.
pub struct OrdersPageData {
    pub orders: Vec<OrderView>,
}

/// Loads the order history for a signed-in visitor. The history is fixture
/// data; checkout never appends to it.
pub fn load_orders_page(session: &Session) -> ServiceResult<OrdersPageData> {
    if !session.is_signed_in() {
        return Err(ServiceError::Unauthorized);
    }

    let orders = fixtures::sample_orders()
        .into_iter()
        .map(OrderView::from)
        .collect();

    Ok(OrdersPageData { orders })
}

/// Placeholder: re-ordering a past order is not part of the demo.
pub fn reorder(session: &Session, _order_id: i32) -> ServiceResult<()> {
    if !session.is_signed_in() {
        return Err(ServiceError::Unauthorized);
    }
    Err(ServiceError::NotImplemented)
}

/// Placeholder: review writing is not part of the demo.
pub fn write_review(session: &Session, _order_id: i32) -> ServiceResult<()> {
    if !session.is_signed_in() {
        return Err(ServiceError::Unauthorized);
    }
    Err(ServiceError::NotImplemented)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::UserType;

    #[test]
    fn order_history_requires_a_session() {
        let result = load_orders_page(&Session::anonymous());
        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn order_history_lists_fixture_orders() {
        let session = Session::signed_in(UserType::User);
        let data = load_orders_page(&session).expect("expected success");

        assert_eq!(data.orders.len(), 3);
        assert_eq!(data.orders[0].reference, "LUX-2025-0114");
        assert_eq!(data.orders[0].total_formatted, "212.03");
    }

    #[test]
    fn reorder_and_reviews_are_stubs() {
        let session = Session::signed_in(UserType::User);
        assert!(matches!(
            reorder(&session, 1),
            Err(ServiceError::NotImplemented)
        ));
        assert!(matches!(
            write_review(&session, 1),
            Err(ServiceError::NotImplemented)
        ));
    }
}
