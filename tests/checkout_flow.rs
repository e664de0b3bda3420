use luxe_storefront::domain::cart::{self, CartLineItem};
use luxe_storefront::forms::checkout::CheckoutForm;
use luxe_storefront::repository::{CartReader, CartWriter, DieselStore};
use luxe_storefront::services::checkout::{load_checkout_page, place_order};
use luxe_storefront::services::{ServiceError, cart as cart_service};

mod common;

fn line(product_id: i32, price_cents: i64, quantity: i32) -> CartLineItem {
    CartLineItem {
        product_id,
        name: format!("Product {product_id}"),
        price_cents,
        image: String::new(),
        color: cart::DEFAULT_COLOR.to_string(),
        size: cart::DEFAULT_SIZE.to_string(),
        quantity,
    }
}

fn checkout_form() -> CheckoutForm {
    CheckoutForm {
        first_name: "Alex".to_string(),
        last_name: "Laurent".to_string(),
        email: "alex@example.com".to_string(),
        address: "12 Rue de la Paix".to_string(),
        city: "New York".to_string(),
        state: "NY".to_string(),
        zip_code: "10001".to_string(),
        card_number: "4242 4242 4242 4242".to_string(),
        card_name: "Alex Laurent".to_string(),
        expiry_date: "08/27".to_string(),
        cvv: "123".to_string(),
    }
}

#[test]
fn checkout_clears_the_persisted_bag() {
    let test_db = common::TestDb::new();
    let store = DieselStore::new(test_db.pool());

    store.set_cart(&[line(1, 5000, 2)]).unwrap();

    let page = load_checkout_page(&store, 10).unwrap();
    assert_eq!(page.breakdown.total, "103.99");

    let receipt = place_order(&store, &checkout_form(), 10).unwrap();
    assert!(receipt.state.is_completed());
    assert_eq!(receipt.total_cents, 10399);

    // A completed checkout is terminal for this bag; the next one starts
    // empty.
    assert!(store.get_cart().unwrap().is_empty());
}

#[test]
fn checkout_on_an_empty_bag_is_blocked() {
    let test_db = common::TestDb::new();
    let store = DieselStore::new(test_db.pool());

    let result = place_order(&store, &checkout_form(), 0);
    assert!(matches!(result, Err(ServiceError::EmptyCart)));
}

#[test]
fn cart_mutations_persist_between_page_loads() {
    let test_db = common::TestDb::new();
    let store = DieselStore::new(test_db.pool());

    store.set_cart(&[line(1, 5000, 1), line(2, 7900, 1)]).unwrap();

    cart_service::change_quantity(&store, 0, 3).unwrap();
    cart_service::remove_item(&store, 1).unwrap();

    let page = cart_service::load_cart_page(&store, 0).unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].quantity, 3);
    assert_eq!(page.breakdown.subtotal, "150.00");
    assert_eq!(page.breakdown.total, "155.99");
}
