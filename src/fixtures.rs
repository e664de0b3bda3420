//! Deterministic seed data for the demo storefront. The catalog and order
//! history are fixture inputs, not generated at load time, so pages render
//! the same on every run.

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::order::{Order, OrderItem, OrderStatus};
use crate::domain::product::{Category, Product, ProductStatus};

fn listed_on(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(10, 0, 0))
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: i32,
    name: &str,
    description: &str,
    price_cents: i64,
    stock: i32,
    category: Category,
    status: ProductStatus,
    sales: i32,
    listed: NaiveDateTime,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price_cents,
        stock,
        category,
        status,
        sales,
        image: format!("/assets/products/{id}.svg"),
        colors: ["Black", "White", "Gold", "Silver"]
            .into_iter()
            .map(str::to_string)
            .collect(),
        sizes: ["S", "M", "L", "XL"].into_iter().map(str::to_string).collect(),
        created_at: listed,
        updated_at: listed,
    }
}

/// The seeded product catalog.
pub fn seed_products() -> Vec<Product> {
    vec![
        product(
            1,
            "Cashmere Wrap Coat",
            "Double-faced cashmere with a relaxed shawl collar",
            18900,
            12,
            Category::Clothing,
            ProductStatus::Published,
            54,
            listed_on(2025, 1, 6),
        ),
        product(
            2,
            "Silk Evening Scarf",
            "Hand-rolled mulberry silk in a signature print",
            7900,
            40,
            Category::Accessories,
            ProductStatus::Published,
            87,
            listed_on(2025, 1, 20),
        ),
        product(
            3,
            "Velvet Lounge Cushion",
            "Cotton velvet cushion with brushed brass piping",
            5400,
            25,
            Category::HomeDecor,
            ProductStatus::Published,
            38,
            listed_on(2025, 2, 3),
        ),
        product(
            4,
            "Merino Roll-Neck Sweater",
            "Extra-fine merino knitted in a seamless construction",
            12500,
            18,
            Category::Clothing,
            ProductStatus::Published,
            65,
            listed_on(2025, 2, 17),
        ),
        product(
            5,
            "Calfskin Card Holder",
            "Vegetable-tanned calfskin with hand-painted edges",
            9800,
            30,
            Category::Accessories,
            ProductStatus::Published,
            42,
            listed_on(2025, 3, 2),
        ),
        product(
            6,
            "Smoked Glass Carafe",
            "Mouth-blown carafe in a smoked amber finish",
            6700,
            15,
            Category::HomeDecor,
            ProductStatus::Draft,
            0,
            listed_on(2025, 3, 16),
        ),
        product(
            7,
            "Pleated Midi Skirt",
            "Knife pleats in a fluid crepe that moves with you",
            11200,
            22,
            Category::Clothing,
            ProductStatus::Published,
            29,
            listed_on(2025, 4, 1),
        ),
        product(
            8,
            "Gold-Plated Cuff",
            "Sculptural cuff finished in 18k gold plating",
            15600,
            9,
            Category::Accessories,
            ProductStatus::Published,
            73,
            listed_on(2025, 4, 14),
        ),
        product(
            9,
            "Alpaca Throw Blanket",
            "Baby alpaca woven in a herringbone pattern",
            16400,
            11,
            Category::HomeDecor,
            ProductStatus::Published,
            51,
            listed_on(2025, 5, 5),
        ),
        product(
            10,
            "Linen Resort Shirt",
            "Garment-washed European linen with shell buttons",
            8900,
            27,
            Category::Clothing,
            ProductStatus::Draft,
            0,
            listed_on(2025, 5, 19),
        ),
        product(
            11,
            "Leather Weekend Tote",
            "Full-grain leather tote with a detachable pouch",
            24800,
            7,
            Category::Accessories,
            ProductStatus::Published,
            96,
            listed_on(2025, 6, 2),
        ),
        product(
            12,
            "Stoneware Vase Set",
            "Three hand-thrown vases in graduated heights",
            7300,
            20,
            Category::HomeDecor,
            ProductStatus::Published,
            24,
            listed_on(2025, 6, 23),
        ),
    ]
}

/// Past orders shown on the history page. Checkout never appends here;
/// order persistence is out of scope for the demo.
pub fn sample_orders() -> Vec<Order> {
    vec![
        Order {
            id: 1,
            reference: "LUX-2025-0114".to_string(),
            status: OrderStatus::Delivered,
            total_cents: 21203,
            items: vec![
                OrderItem {
                    name: "Cashmere Wrap Coat".to_string(),
                    price_cents: 18900,
                    quantity: 1,
                },
            ],
            placed_at: listed_on(2025, 1, 14),
        },
        Order {
            id: 2,
            reference: "LUX-2025-0402".to_string(),
            status: OrderStatus::Shipped,
            total_cents: 19003,
            items: vec![
                OrderItem {
                    name: "Silk Evening Scarf".to_string(),
                    price_cents: 7900,
                    quantity: 1,
                },
                OrderItem {
                    name: "Calfskin Card Holder".to_string(),
                    price_cents: 9800,
                    quantity: 1,
                },
            ],
            placed_at: listed_on(2025, 4, 2),
        },
        Order {
            id: 3,
            reference: "LUX-2025-0619".to_string(),
            status: OrderStatus::Processing,
            total_cents: 12295,
            items: vec![
                OrderItem {
                    name: "Velvet Lounge Cushion".to_string(),
                    price_cents: 5400,
                    quantity: 2,
                },
            ],
            placed_at: listed_on(2025, 6, 19),
        },
    ]
}

/// Account details pre-filling the profile form.
pub struct ProfileDefaults {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
}

pub fn profile_defaults() -> ProfileDefaults {
    ProfileDefaults {
        name: "Alex Laurent",
        email: "alex.laurent@example.com",
        phone: "+1 555 010 7788",
        address: "12 Rue de la Paix, Suite 4, New York, NY 10001",
    }
}
