use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Fixed set of departments a product can be listed under.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Clothing,
    Accessories,
    #[serde(rename = "Home Decor")]
    HomeDecor,
}

impl Category {
    /// All categories, in the order the dashboard filter presents them.
    pub const ALL: [Category; 3] = [
        Category::Clothing,
        Category::Accessories,
        Category::HomeDecor,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Clothing => "Clothing",
            Category::Accessories => "Accessories",
            Category::HomeDecor => "Home Decor",
        };
        f.write_str(label)
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "Clothing" => Ok(Category::Clothing),
            "Accessories" => Ok(Category::Accessories),
            "Home Decor" => Ok(Category::HomeDecor),
            other => Err(other.to_string()),
        }
    }
}

/// Publication state of a product listing.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ProductStatus {
    Published,
    Draft,
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProductStatus::Published => "Published",
            ProductStatus::Draft => "Draft",
        };
        f.write_str(label)
    }
}

impl FromStr for ProductStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "Published" => Ok(ProductStatus::Published),
            "Draft" => Ok(ProductStatus::Draft),
            other => Err(other.to_string()),
        }
    }
}

/// Orderings supported by catalog listings.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum ProductSort {
    #[default]
    Newest,
    Oldest,
    PriceHigh,
    PriceLow,
    BestSelling,
}

impl FromStr for ProductSort {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "newest" => Ok(ProductSort::Newest),
            "oldest" => Ok(ProductSort::Oldest),
            "priceHigh" => Ok(ProductSort::PriceHigh),
            "priceLow" => Ok(ProductSort::PriceLow),
            "bestSelling" => Ok(ProductSort::BestSelling),
            other => Err(other.to_string()),
        }
    }
}

/// Domain representation of a catalog product.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name shown to shoppers.
    pub name: String,
    /// Longer description shown on cards and the detail page.
    pub description: String,
    /// Price in the smallest currency unit (cents).
    pub price_cents: i64,
    /// Units currently available.
    pub stock: i32,
    /// Department the product is listed under.
    pub category: Category,
    /// Whether the product is visible on the storefront.
    pub status: ProductStatus,
    /// Lifetime sales count, used by the best-selling sort.
    pub sales: i32,
    /// Path to the product image asset.
    pub image: String,
    /// Colors offered on the detail page.
    pub colors: Vec<String>,
    /// Sizes offered on the detail page.
    pub sizes: Vec<String>,
    /// Timestamp for when the product was listed.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last edit to the listing.
    pub updated_at: NaiveDateTime,
}

/// Payload required to list a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Human-readable name shown to shoppers.
    pub name: String,
    /// Longer description shown on cards and the detail page.
    pub description: String,
    /// Price in the smallest currency unit (cents).
    pub price_cents: i64,
    /// Units available at listing time.
    pub stock: i32,
    /// Department the product is listed under.
    pub category: Category,
    /// Initial publication state.
    pub status: ProductStatus,
    /// Path to the product image asset.
    pub image: String,
    /// Timestamp captured when the payload was created.
    pub created_at: NaiveDateTime,
}

impl NewProduct {
    /// Build a new listing payload with the supplied details and current timestamp.
    pub fn new(name: impl Into<String>, price_cents: i64, category: Category) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            name: name.into(),
            description: String::new(),
            price_cents,
            stock: 0,
            category,
            status: ProductStatus::Published,
            image: String::new(),
            created_at: now,
        }
    }

    /// Attach a descriptive text to the payload.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the initial stock level.
    pub fn with_stock(mut self, stock: i32) -> Self {
        self.stock = stock;
        self
    }

    /// Override the default `Published` status.
    pub fn with_status(mut self, status: ProductStatus) -> Self {
        self.status = status;
        self
    }

    /// Attach an image asset path to the payload.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

/// Patch data applied when editing an existing product.
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    /// Optional name update.
    pub name: Option<String>,
    /// Optional description update.
    pub description: Option<String>,
    /// Optional price update in cents.
    pub price_cents: Option<i64>,
    /// Optional stock update.
    pub stock: Option<i32>,
    /// Optional category update.
    pub category: Option<Category>,
    /// Optional status update.
    pub status: Option<ProductStatus>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateProduct {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateProduct {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            name: None,
            description: None,
            price_cents: None,
            stock: None,
            category: None,
            status: None,
            updated_at: now,
        }
    }

    /// Update the product name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Update the product description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Update the product price.
    pub fn price_cents(mut self, price_cents: i64) -> Self {
        self.price_cents = Some(price_cents);
        self
    }

    /// Update the stock level.
    pub fn stock(mut self, stock: i32) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Move the product to a different category.
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Publish or unpublish the product.
    pub fn status(mut self, status: ProductStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Query definition used to filter and order catalog listings.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    /// Optional name or description search term.
    pub search: Option<String>,
    /// Optional category filter; `None` matches every category.
    pub category: Option<Category>,
    /// Optional status filter; `None` matches every status.
    pub status: Option<ProductStatus>,
    /// Ordering applied after filtering.
    pub sort: ProductSort,
    /// Optional pagination applied by the repository, never by the engine.
    pub pagination: Option<Pagination>,
}

impl CatalogQuery {
    /// Construct a query that matches the whole catalog, newest first.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by a search term applied to the name or description.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Filter the results to a single category.
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Filter the results to a single publication status.
    pub fn status(mut self, status: ProductStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Apply an ordering other than the default `Newest`.
    pub fn sort(mut self, sort: ProductSort) -> Self {
        self.sort = sort;
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Applies the query's filters and ordering to `products`, returning a new
/// collection. Matching is conjunctive, the search term is a case-insensitive
/// substring over name or description, and ties keep their original relative
/// order. Pagination is the caller's concern and is ignored here.
pub fn filter_and_sort(products: &[Product], query: &CatalogQuery) -> Vec<Product> {
    let needle = query
        .search
        .as_deref()
        .map(str::to_lowercase)
        .filter(|term| !term.is_empty());

    let mut matched: Vec<Product> = products
        .iter()
        .filter(|product| {
            let matches_search = needle.as_deref().is_none_or(|term| {
                product.name.to_lowercase().contains(term)
                    || product.description.to_lowercase().contains(term)
            });
            let matches_category = query
                .category
                .is_none_or(|category| product.category == category);
            let matches_status = query.status.is_none_or(|status| product.status == status);

            matches_search && matches_category && matches_status
        })
        .cloned()
        .collect();

    // Vec::sort_by is stable, which keeps tie order deterministic.
    match query.sort {
        ProductSort::Newest => matched.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        ProductSort::Oldest => matched.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        ProductSort::PriceHigh => matched.sort_by(|a, b| b.price_cents.cmp(&a.price_cents)),
        ProductSort::PriceLow => matched.sort_by(|a, b| a.price_cents.cmp(&b.price_cents)),
        ProductSort::BestSelling => matched.sort_by(|a, b| b.sales.cmp(&a.sales)),
    }

    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, day)
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .unwrap_or_default()
    }

    fn product(id: i32, name: &str, price_cents: i64, listed_on: u32) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: "Premium quality with exquisite craftsmanship".to_string(),
            price_cents,
            stock: 10,
            category: Category::Accessories,
            status: ProductStatus::Published,
            sales: 0,
            image: String::new(),
            colors: Vec::new(),
            sizes: Vec::new(),
            created_at: day(listed_on),
            updated_at: day(listed_on),
        }
    }

    #[test]
    fn empty_criteria_returns_everything_in_sort_order() {
        let products = vec![
            product(1, "Silk Scarf", 5900, 1),
            product(2, "Leather Belt", 7900, 3),
            product(3, "Wool Hat", 4900, 2),
        ];

        let newest = filter_and_sort(&products, &CatalogQuery::new());
        assert_eq!(
            newest.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![2, 3, 1]
        );

        let cheapest =
            filter_and_sort(&products, &CatalogQuery::new().sort(ProductSort::PriceLow));
        assert_eq!(
            cheapest.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![3, 1, 2]
        );
    }

    #[test]
    fn filtering_is_idempotent() {
        let products = vec![
            product(1, "Silk Scarf", 5900, 1),
            product(2, "Leather Belt", 7900, 3),
            product(3, "Silk Robe", 18900, 2),
        ];
        let query = CatalogQuery::new()
            .search("silk")
            .sort(ProductSort::PriceHigh);

        let once = filter_and_sort(&products, &query);
        let twice = filter_and_sort(&once, &query);

        assert_eq!(
            once.iter().map(|p| p.id).collect::<Vec<_>>(),
            twice.iter().map(|p| p.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn search_matches_name_or_description_case_insensitively() {
        let mut products = vec![
            product(1, "Silk Scarf", 5900, 1),
            product(2, "Leather Belt", 7900, 2),
        ];
        products[1].description = "Hand-stitched SILK lining".to_string();

        let found = filter_and_sort(&products, &CatalogQuery::new().search("SiLk"));
        assert_eq!(found.len(), 2);

        let none = filter_and_sort(&products, &CatalogQuery::new().search("cashmere"));
        assert!(none.is_empty());
    }

    #[test]
    fn matching_is_conjunctive() {
        let mut products = vec![
            product(1, "Silk Scarf", 5900, 1),
            product(2, "Silk Robe", 18900, 2),
        ];
        products[1].status = ProductStatus::Draft;

        let query = CatalogQuery::new()
            .search("silk")
            .status(ProductStatus::Published);
        let found = filter_and_sort(&products, &query);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[test]
    fn sort_is_stable_on_ties() {
        let mut products = vec![
            product(1, "First", 5000, 1),
            product(2, "Second", 5000, 1),
            product(3, "Third", 5000, 1),
        ];
        products[0].sales = 7;
        products[1].sales = 7;
        products[2].sales = 7;

        for sort in [
            ProductSort::Newest,
            ProductSort::Oldest,
            ProductSort::PriceHigh,
            ProductSort::PriceLow,
            ProductSort::BestSelling,
        ] {
            let sorted = filter_and_sort(&products, &CatalogQuery::new().sort(sort));
            assert_eq!(
                sorted.iter().map(|p| p.id).collect::<Vec<_>>(),
                vec![1, 2, 3],
                "tie order should be preserved for {sort:?}"
            );
        }
    }

    #[test]
    fn input_is_not_mutated() {
        let products = vec![
            product(1, "Silk Scarf", 5900, 1),
            product(2, "Leather Belt", 7900, 3),
        ];

        let _ = filter_and_sort(&products, &CatalogQuery::new().sort(ProductSort::PriceHigh));

        assert_eq!(products[0].id, 1);
        assert_eq!(products[1].id, 2);
    }
}
