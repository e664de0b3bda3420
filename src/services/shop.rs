use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::cart::{self, CartLineItem};
use crate::domain::product::{CatalogQuery, Product, ProductStatus};
use crate::domain::session::Session;
use crate::repository::{CartReader, CartWriter, CatalogReader, FavoriteReader, FavoriteWriter};
use crate::services::{ServiceError, ServiceResult, format_cents};

/// Number of product cards shown on first load.
const DEFAULT_VISIBLE: usize = 15;
/// How many more cards each "load more" step reveals.
const VISIBLE_STEP: usize = 10;

/// Query parameters accepted by the storefront grid.
#[derive(Debug, Default, Deserialize)]
pub struct ShopQuery {
    /// Optional search string entered by the shopper.
    pub search: Option<String>,
    /// How many cards are currently revealed.
    pub visible: Option<usize>,
}

/// One card in the storefront grid.
#[derive(Debug, Serialize)]
pub struct ProductCardView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price_formatted: String,
    pub image: String,
    pub in_cart: bool,
    pub favorite: bool,
}

/// Data required to render the storefront grid.
pub struct ShopPageData {
    /// Cards revealed so far.
    pub products: Vec<ProductCardView>,
    /// Total number of matches, before slicing.
    pub total: usize,
    /// Number of cards currently revealed.
    pub visible: usize,
    /// The `visible` value for the next "load more" step, if any remain.
    pub next_visible: Option<usize>,
    /// Search query echoed back to the view when present.
    pub search: Option<String>,
    /// Number of lines in the bag, for the header badge.
    pub cart_count: usize,
}

/// Loads the storefront grid. Agents never see the storefront; the caller
/// redirects them to their dashboard.
pub fn load_shop_page<C, S>(
    catalog: &C,
    store: &S,
    session: &Session,
    query: ShopQuery,
) -> ServiceResult<ShopPageData>
where
    C: CatalogReader + ?Sized,
    S: CartReader + FavoriteReader + ?Sized,
{
    if session.is_agent() {
        return Err(ServiceError::Unauthorized);
    }

    let mut list_query = CatalogQuery::new().status(ProductStatus::Published);
    if let Some(term) = query.search.as_ref() {
        list_query = list_query.search(term);
    }

    let (total, items) = catalog.list_products(list_query).map_err(ServiceError::from)?;

    let cart_lines = store.get_cart().map_err(ServiceError::from)?;
    let in_cart: HashSet<i32> = cart_lines.iter().map(|line| line.product_id).collect();
    let favorites: HashSet<i32> = store
        .get_favorites()
        .map_err(ServiceError::from)?
        .into_iter()
        .collect();

    // Prefix slicing is a presentation concern and stays out of the
    // filter engine.
    let visible = query.visible.unwrap_or(DEFAULT_VISIBLE).max(1);
    let next_visible = (visible < total).then(|| (visible + VISIBLE_STEP).min(total));

    let products = items
        .into_iter()
        .take(visible)
        .map(|product| card_view(product, &in_cart, &favorites))
        .collect();

    Ok(ShopPageData {
        products,
        total,
        visible,
        next_visible,
        search: query.search,
        cart_count: cart_lines.len(),
    })
}

fn card_view(product: Product, in_cart: &HashSet<i32>, favorites: &HashSet<i32>) -> ProductCardView {
    ProductCardView {
        id: product.id,
        name: product.name,
        description: product.description,
        price_formatted: format_cents(product.price_cents),
        image: product.image,
        in_cart: in_cart.contains(&product.id),
        favorite: favorites.contains(&product.id),
    }
}

/// Data required to render the product detail page.
pub struct ProductPageData {
    pub product: Product,
    pub price_formatted: String,
    pub favorite: bool,
}

/// Loads the product detail page. An unknown id is `NotFound`, which the
/// caller renders as a dedicated page rather than an error.
pub fn load_product_page<C, S>(catalog: &C, store: &S, product_id: i32) -> ServiceResult<ProductPageData>
where
    C: CatalogReader + ?Sized,
    S: FavoriteReader + ?Sized,
{
    let product = catalog
        .get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    let favorite = store
        .get_favorites()
        .map_err(ServiceError::from)?
        .contains(&product_id);

    Ok(ProductPageData {
        price_formatted: format_cents(product.price_cents),
        product,
        favorite,
    })
}

/// Adds one unit of `product_id` to the bag using the fixed default variant.
/// Every add path merges on the same (product, color, size) key, so repeated
/// quick-adds grow the quantity of a single line. Returns the product name.
pub fn quick_add_to_cart<C, S>(catalog: &C, store: &S, product_id: i32) -> ServiceResult<String>
where
    C: CatalogReader + ?Sized,
    S: CartReader + CartWriter + ?Sized,
{
    let product = catalog
        .get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    push_line(store, product, cart::DEFAULT_COLOR, cart::DEFAULT_SIZE, 1)
}

/// Adds the selected variant and quantity from the detail page to the bag.
pub fn add_variant_to_cart<C, S>(
    catalog: &C,
    store: &S,
    product_id: i32,
    color: &str,
    size: &str,
    quantity: i32,
) -> ServiceResult<String>
where
    C: CatalogReader + ?Sized,
    S: CartReader + CartWriter + ?Sized,
{
    let product = catalog
        .get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    if !product.colors.iter().any(|option| option == color) {
        return Err(ServiceError::Form(format!(
            "color `{color}` is not offered for this product"
        )));
    }
    if !product.sizes.iter().any(|option| option == size) {
        return Err(ServiceError::Form(format!(
            "size `{size}` is not offered for this product"
        )));
    }

    push_line(store, product, color, size, quantity)
}

fn push_line<S>(
    store: &S,
    product: Product,
    color: &str,
    size: &str,
    quantity: i32,
) -> ServiceResult<String>
where
    S: CartReader + CartWriter + ?Sized,
{
    // The detail page stepper caps at stock; clamp instead of failing so a
    // stale form cannot push the bag over the available units.
    let quantity = quantity.max(1).min(product.stock.max(1));

    let candidate = CartLineItem {
        product_id: product.id,
        name: product.name.clone(),
        price_cents: product.price_cents,
        image: product.image.clone(),
        color: color.to_string(),
        size: size.to_string(),
        quantity,
    };

    let lines = store.get_cart().map_err(ServiceError::from)?;
    let lines = cart::add_or_merge(lines, candidate);
    store.set_cart(&lines).map_err(ServiceError::from)?;

    Ok(product.name)
}

/// Outcome of a favorite toggle, used for the confirmation notice.
pub struct FavoriteToggle {
    /// Whether the product is now a favorite.
    pub added: bool,
    /// Name of the toggled product.
    pub name: String,
}

/// Adds `product_id` to the favorite set, or removes it if already present.
/// The set stays deduplicated.
pub fn toggle_favorite<C, S>(catalog: &C, store: &S, product_id: i32) -> ServiceResult<FavoriteToggle>
where
    C: CatalogReader + ?Sized,
    S: FavoriteReader + FavoriteWriter + ?Sized,
{
    let product = catalog
        .get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    let mut favorites = store.get_favorites().map_err(ServiceError::from)?;
    let added = if favorites.contains(&product_id) {
        favorites.retain(|id| *id != product_id);
        false
    } else {
        favorites.push(product_id);
        true
    };
    store.set_favorites(&favorites).map_err(ServiceError::from)?;

    Ok(FavoriteToggle {
        added,
        name: product.name,
    })
}
