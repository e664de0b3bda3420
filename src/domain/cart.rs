use serde::{Deserialize, Serialize};

/// Flat shipping fee in cents, charged whenever the bag is non-empty.
pub const SHIPPING_FLAT_CENTS: i64 = 599;
/// Sales tax percentage applied by the checkout summary.
pub const TAX_RATE_PERCENT: i64 = 8;

/// Variant color assigned by quick-add paths that skip the detail page.
pub const DEFAULT_COLOR: &str = "Default";
/// Variant size assigned by quick-add paths that skip the detail page.
pub const DEFAULT_SIZE: &str = "M";

/// One row of the shopping bag: a product variant plus a quantity, with the
/// name, price and image denormalized at add time.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CartLineItem {
    /// Identifier of the product this line was created from.
    pub product_id: i32,
    /// Product name snapshot.
    pub name: String,
    /// Unit price snapshot in cents.
    pub price_cents: i64,
    /// Image asset path snapshot.
    pub image: String,
    /// Selected color variant.
    pub color: String,
    /// Selected size variant.
    pub size: String,
    /// Number of units, always at least 1.
    pub quantity: i32,
}

impl CartLineItem {
    /// Total value of this line in cents.
    pub fn line_total_cents(&self) -> i64 {
        self.price_cents * i64::from(self.quantity)
    }

    /// Whether `other` refers to the same product variant. Lines merge on
    /// the (product, color, size) key.
    pub fn same_variant(&self, other: &CartLineItem) -> bool {
        self.product_id == other.product_id && self.color == other.color && self.size == other.size
    }
}

/// Sum of all line values in cents.
pub fn subtotal_cents(lines: &[CartLineItem]) -> i64 {
    lines.iter().map(CartLineItem::line_total_cents).sum()
}

/// Adds `candidate` to the bag. An existing line with the same
/// (product, color, size) key absorbs the candidate's quantity; otherwise the
/// candidate is appended as a new last line.
pub fn add_or_merge(mut lines: Vec<CartLineItem>, candidate: CartLineItem) -> Vec<CartLineItem> {
    match lines.iter_mut().find(|line| line.same_variant(&candidate)) {
        Some(existing) => existing.quantity += candidate.quantity,
        None => lines.push(candidate),
    }
    lines
}

/// Replaces the quantity of the line at `index`. Quantities below 1 and
/// out-of-range indexes leave the bag unchanged.
pub fn update_quantity(
    mut lines: Vec<CartLineItem>,
    index: usize,
    quantity: i32,
) -> Vec<CartLineItem> {
    if quantity < 1 {
        return lines;
    }
    if let Some(line) = lines.get_mut(index) {
        line.quantity = quantity;
    }
    lines
}

/// Removes exactly one line by position; later lines shift down. An
/// out-of-range index leaves the bag unchanged.
pub fn remove_line(mut lines: Vec<CartLineItem>, index: usize) -> Vec<CartLineItem> {
    if index < lines.len() {
        lines.remove(index);
    }
    lines
}

/// Price summary for the bag. The cart page omits tax; checkout includes it.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub subtotal_cents: i64,
    pub discount_cents: i64,
    pub shipping_cents: i64,
    pub tax_cents: Option<i64>,
    pub total_cents: i64,
}

impl PriceBreakdown {
    /// Summary shown on the cart page: subtotal, discount and flat shipping.
    pub fn cart(lines: &[CartLineItem], discount_percent: u8) -> Self {
        Self::build(lines, discount_percent, false)
    }

    /// Summary shown at checkout, which additionally charges sales tax.
    pub fn checkout(lines: &[CartLineItem], discount_percent: u8) -> Self {
        Self::build(lines, discount_percent, true)
    }

    fn build(lines: &[CartLineItem], discount_percent: u8, with_tax: bool) -> Self {
        let subtotal_cents = subtotal_cents(lines);
        // The coupon table caps percentages at 100, so the discount can
        // never exceed the subtotal.
        let discount_cents = subtotal_cents * i64::from(discount_percent.min(100)) / 100;
        let shipping_cents = if subtotal_cents > 0 {
            SHIPPING_FLAT_CENTS
        } else {
            0
        };
        let tax_cents = with_tax.then(|| subtotal_cents * TAX_RATE_PERCENT / 100);
        let total_cents =
            subtotal_cents - discount_cents + shipping_cents + tax_cents.unwrap_or(0);

        Self {
            subtotal_cents,
            discount_cents,
            shipping_cents,
            tax_cents,
            total_cents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product_id: i32, color: &str, size: &str, price_cents: i64, quantity: i32) -> CartLineItem {
        CartLineItem {
            product_id,
            name: format!("Product {product_id}"),
            price_cents,
            image: String::new(),
            color: color.to_string(),
            size: size.to_string(),
            quantity,
        }
    }

    #[test]
    fn subtotal_sums_price_times_quantity() {
        let lines = vec![line(1, "Black", "M", 5000, 2), line(2, "Gold", "S", 1250, 3)];
        assert_eq!(subtotal_cents(&lines), 13750);
        assert_eq!(PriceBreakdown::cart(&lines, 0).subtotal_cents, 13750);
    }

    #[test]
    fn cart_breakdown_matches_reference_figures() {
        // One item at $50.00, quantity 2, 10% off.
        let lines = vec![line(1, "Black", "M", 5000, 2)];
        let breakdown = PriceBreakdown::cart(&lines, 10);

        assert_eq!(breakdown.subtotal_cents, 10000);
        assert_eq!(breakdown.discount_cents, 1000);
        assert_eq!(breakdown.shipping_cents, 599);
        assert_eq!(breakdown.tax_cents, None);
        assert_eq!(breakdown.total_cents, 9599);
    }

    #[test]
    fn checkout_breakdown_adds_tax() {
        let lines = vec![line(1, "Black", "M", 5000, 2)];
        let breakdown = PriceBreakdown::checkout(&lines, 10);

        assert_eq!(breakdown.tax_cents, Some(800));
        assert_eq!(breakdown.total_cents, 10399);
    }

    #[test]
    fn empty_bag_is_free_to_ship() {
        let breakdown = PriceBreakdown::cart(&[], 10);
        assert_eq!(breakdown.subtotal_cents, 0);
        assert_eq!(breakdown.shipping_cents, 0);
        assert_eq!(breakdown.total_cents, 0);
    }

    #[test]
    fn add_or_merge_collapses_identical_variants() {
        let lines = add_or_merge(Vec::new(), line(1, "Black", "M", 5000, 1));
        let lines = add_or_merge(lines, line(1, "Black", "M", 5000, 1));

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 2);
    }

    #[test]
    fn add_or_merge_keeps_distinct_variants_apart() {
        let lines = add_or_merge(Vec::new(), line(1, "Black", "M", 5000, 1));
        let lines = add_or_merge(lines, line(1, "Gold", "M", 5000, 1));
        let lines = add_or_merge(lines, line(1, "Black", "L", 5000, 1));

        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.quantity == 1));
    }

    #[test]
    fn update_quantity_floors_at_one() {
        let lines = vec![line(1, "Black", "M", 5000, 2)];

        let unchanged = update_quantity(lines.clone(), 0, 0);
        assert_eq!(unchanged, lines);

        let bumped = update_quantity(lines, 0, 5);
        assert_eq!(bumped[0].quantity, 5);
    }

    #[test]
    fn update_quantity_ignores_out_of_range_index() {
        let lines = vec![line(1, "Black", "M", 5000, 2)];
        let unchanged = update_quantity(lines.clone(), 3, 4);
        assert_eq!(unchanged, lines);
    }

    #[test]
    fn remove_line_shifts_later_lines_down() {
        let lines = vec![
            line(1, "Black", "M", 5000, 1),
            line(2, "Gold", "S", 6000, 2),
            line(3, "White", "L", 7000, 3),
        ];

        let remaining = remove_line(lines, 1);

        assert_eq!(remaining.len(), 2);
        assert_eq!(remaining[0].product_id, 1);
        assert_eq!(remaining[1].product_id, 3);
        assert_eq!(remaining[1].quantity, 3);
    }
}
