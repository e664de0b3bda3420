use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    /// Static promotion table. Keys are stored lowercased; lookups match
    /// case-insensitively. Percentages stay within 0–100 by construction.
    static ref COUPONS: HashMap<&'static str, u8> = {
        let mut table = HashMap::new();
        table.insert("luxury10", 10);
        table.insert("luxury20", 20);
        table.insert("vip30", 30);
        table
    };
}

/// Looks up `code` against the coupon table, ignoring case and surrounding
/// whitespace. Returns the discount percentage for a recognized code.
pub fn discount_for(code: &str) -> Option<u8> {
    COUPONS.get(code.trim().to_lowercase().as_str()).copied()
}
