use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{Category, NewProduct, ProductStatus, UpdateProduct};

/// Maximum allowed length for a product name.
const NAME_MAX_LEN: u64 = 128;
/// Maximum allowed length for a product description.
const DESCRIPTION_MAX_LEN: u64 = 512;

/// Result type returned by the product form helpers.
pub type ProductFormResult<T> = Result<T, ProductFormError>;

/// Errors that can occur while processing dashboard product forms.
#[derive(Debug, Error)]
pub enum ProductFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after trimming.
    #[error("product name cannot be empty")]
    EmptyName,
    /// The provided price is not a non-negative amount like `79` or `79.50`.
    #[error("invalid price `{value}`")]
    InvalidPrice { value: String },
    /// The stock level is negative.
    #[error("stock cannot be negative")]
    NegativeStock,
    /// The category does not belong to the fixed set.
    #[error("unknown category `{value}`")]
    UnknownCategory { value: String },
    /// The status is neither `Published` nor `Draft`.
    #[error("unknown status `{value}`")]
    UnknownStatus { value: String },
}

/// Form payload emitted when submitting the dashboard "Add product" form.
#[derive(Debug, Deserialize, Validate)]
pub struct AddProductForm {
    /// Name entered by the seller.
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    /// Optional longer description.
    #[validate(length(max = DESCRIPTION_MAX_LEN))]
    pub description: Option<String>,
    /// Price as entered, e.g. `79` or `79.50`.
    pub price: String,
    /// Initial stock level.
    pub stock: i32,
    /// Category label from the fixed set.
    pub category: String,
    /// `Published` or `Draft`.
    pub status: String,
}

impl AddProductForm {
    /// Validates and converts the payload into a domain `NewProduct`.
    pub fn into_new_product(self) -> ProductFormResult<NewProduct> {
        self.validate()?;

        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ProductFormError::EmptyName);
        }

        let price_cents = parse_price_cents(&self.price)?;
        if self.stock < 0 {
            return Err(ProductFormError::NegativeStock);
        }
        let category = parse_category(&self.category)?;
        let status = parse_status(&self.status)?;

        let mut new_product = NewProduct::new(name, price_cents, category)
            .with_stock(self.stock)
            .with_status(status);

        if let Some(description) = self.description.as_deref() {
            let description = description.trim();
            if !description.is_empty() {
                new_product = new_product.with_description(description);
            }
        }

        Ok(new_product)
    }
}

/// Form payload emitted when saving the dashboard "Edit product" form.
#[derive(Debug, Deserialize, Validate)]
pub struct EditProductForm {
    /// Identifier of the product being edited.
    pub product_id: i32,
    /// Updated name.
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    /// Updated description.
    #[validate(length(max = DESCRIPTION_MAX_LEN))]
    pub description: Option<String>,
    /// Updated price as entered.
    pub price: String,
    /// Updated stock level.
    pub stock: i32,
    /// Updated category label.
    pub category: String,
    /// Updated status label.
    pub status: String,
}

impl EditProductForm {
    /// Validates and converts the payload into a domain `UpdateProduct`.
    pub fn into_update_product(self) -> ProductFormResult<UpdateProduct> {
        self.validate()?;

        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ProductFormError::EmptyName);
        }

        let price_cents = parse_price_cents(&self.price)?;
        if self.stock < 0 {
            return Err(ProductFormError::NegativeStock);
        }
        let category = parse_category(&self.category)?;
        let status = parse_status(&self.status)?;

        let mut update = UpdateProduct::new()
            .name(name)
            .price_cents(price_cents)
            .stock(self.stock)
            .category(category)
            .status(status);

        if let Some(description) = self.description.as_deref() {
            update = update.description(description.trim());
        }

        Ok(update)
    }
}

/// Parses a decimal price like `79`, `79.5` or `79.50` into cents.
fn parse_price_cents(value: &str) -> ProductFormResult<i64> {
    let trimmed = value.trim();
    let invalid = || ProductFormError::InvalidPrice {
        value: value.to_string(),
    };

    let (dollars_part, cents_part) = match trimmed.split_once('.') {
        Some((dollars, cents)) => (dollars, cents),
        None => (trimmed, ""),
    };

    if dollars_part.is_empty() || !dollars_part.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(invalid());
    }
    if cents_part.len() > 2 || !cents_part.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(invalid());
    }

    let dollars = dollars_part.parse::<i64>().map_err(|_| invalid())?;
    let cents = match cents_part.len() {
        0 => 0,
        1 => cents_part.parse::<i64>().map_err(|_| invalid())? * 10,
        _ => cents_part.parse::<i64>().map_err(|_| invalid())?,
    };

    Ok(dollars * 100 + cents)
}

fn parse_category(value: &str) -> ProductFormResult<Category> {
    value
        .parse()
        .map_err(|value| ProductFormError::UnknownCategory { value })
}

fn parse_status(value: &str) -> ProductFormResult<ProductStatus> {
    value
        .parse()
        .map_err(|value| ProductFormError::UnknownStatus { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_form(price: &str) -> AddProductForm {
        AddProductForm {
            name: " Brushed Wool Beret ".to_string(),
            description: Some(" Soft brushed wool ".to_string()),
            price: price.to_string(),
            stock: 5,
            category: "Accessories".to_string(),
            status: "Published".to_string(),
        }
    }

    #[test]
    fn converts_and_sanitizes_a_new_product() {
        let product = add_form("79.50").into_new_product().expect("valid form");

        assert_eq!(product.name, "Brushed Wool Beret");
        assert_eq!(product.description, "Soft brushed wool");
        assert_eq!(product.price_cents, 7950);
        assert_eq!(product.stock, 5);
        assert_eq!(product.category, Category::Accessories);
        assert_eq!(product.status, ProductStatus::Published);
    }

    #[test]
    fn parses_whole_and_single_decimal_prices() {
        assert_eq!(
            add_form("79").into_new_product().expect("whole").price_cents,
            7900
        );
        assert_eq!(
            add_form("79.5").into_new_product().expect("tenths").price_cents,
            7950
        );
    }

    #[test]
    fn rejects_malformed_prices() {
        for bad in ["", "-5", "12.345", "abc", "12,50"] {
            assert!(
                matches!(
                    add_form(bad).into_new_product(),
                    Err(ProductFormError::InvalidPrice { .. })
                ),
                "price `{bad}` should be rejected"
            );
        }
    }

    #[test]
    fn rejects_unknown_category_and_status() {
        let mut form = add_form("10");
        form.category = "Garden".to_string();
        assert!(matches!(
            form.into_new_product(),
            Err(ProductFormError::UnknownCategory { .. })
        ));

        let mut form = add_form("10");
        form.status = "Archived".to_string();
        assert!(matches!(
            form.into_new_product(),
            Err(ProductFormError::UnknownStatus { .. })
        ));
    }

    #[test]
    fn edit_form_builds_a_full_patch() {
        let form = EditProductForm {
            product_id: 7,
            name: "Pleated Midi Skirt".to_string(),
            description: None,
            price: "112".to_string(),
            stock: 3,
            category: "Clothing".to_string(),
            status: "Draft".to_string(),
        };

        let update = form.into_update_product().expect("valid form");
        assert_eq!(update.name.as_deref(), Some("Pleated Midi Skirt"));
        assert_eq!(update.price_cents, Some(11200));
        assert_eq!(update.stock, Some(3));
        assert_eq!(update.category, Some(Category::Clothing));
        assert_eq!(update.status, Some(ProductStatus::Draft));
        assert_eq!(update.description, None);
    }
}
