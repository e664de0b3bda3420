use serde::{Deserialize, Serialize};

use crate::domain::product::{
    CatalogQuery, Category, Product, ProductSort, ProductStatus,
};
use crate::domain::session::Session;
use crate::forms::products::{AddProductForm, EditProductForm};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{CatalogReader, CatalogWriter};
use crate::services::{ServiceError, ServiceResult, format_cents};

/// Query parameters accepted by the dashboard product list.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// Optional search string entered by the seller.
    pub search: Option<String>,
    /// Category filter; absent or `All` matches every category.
    pub category: Option<String>,
    /// Status filter; absent or `All` matches every status.
    pub status: Option<String>,
    /// Sort key; defaults to `newest`.
    pub sort: Option<String>,
    /// Page requested by the UI (1-based).
    pub page: Option<usize>,
}

/// One row of the dashboard product table.
#[derive(Debug, Serialize)]
pub struct ProductRowView {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Price as a decimal string, shown in the table and pre-filling the
    /// edit form.
    pub price: String,
    pub stock: i32,
    pub category: String,
    pub status: String,
    pub sales: i32,
    pub listed_on: String,
}

impl From<Product> for ProductRowView {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: format_cents(product.price_cents),
            stock: product.stock,
            category: product.category.to_string(),
            status: product.status.to_string(),
            sales: product.sales,
            listed_on: product.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Headline figures shown above the product table.
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub total_products: usize,
    pub published: usize,
    pub drafts: usize,
    pub total_sales: i64,
}

/// Data required to render the dashboard page.
pub struct DashboardPageData {
    /// Paginated product rows matching the active filters.
    pub products: Paginated<ProductRowView>,
    /// Headline figures over the whole catalog, ignoring filters.
    pub summary: DashboardSummary,
    /// Filters echoed back to the view.
    pub search: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub sort: String,
}

/// Loads the seller dashboard. Only agents may manage the catalog.
pub fn load_dashboard_page<C>(
    catalog: &C,
    session: &Session,
    query: DashboardQuery,
) -> ServiceResult<DashboardPageData>
where
    C: CatalogReader + ?Sized,
{
    if !session.is_agent() {
        return Err(ServiceError::Unauthorized);
    }

    let DashboardQuery {
        search,
        category,
        status,
        sort,
        page,
    } = query;

    let page = page.unwrap_or(1).max(1);
    let sort_key = parse_sort(sort.as_deref())?;
    let category_filter = parse_wildcard(category.as_deref(), parse_category)?;
    let status_filter = parse_wildcard(status.as_deref(), parse_status)?;

    let mut list_query = CatalogQuery::new()
        .sort(sort_key)
        .paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(term) = search.as_ref() {
        list_query = list_query.search(term);
    }
    if let Some(value) = category_filter {
        list_query = list_query.category(value);
    }
    if let Some(value) = status_filter {
        list_query = list_query.status(value);
    }

    let (total, items) = catalog.list_products(list_query).map_err(ServiceError::from)?;

    let (_, everything) = catalog
        .list_products(CatalogQuery::new())
        .map_err(ServiceError::from)?;
    let summary = DashboardSummary {
        total_products: everything.len(),
        published: everything
            .iter()
            .filter(|product| product.status == ProductStatus::Published)
            .count(),
        drafts: everything
            .iter()
            .filter(|product| product.status == ProductStatus::Draft)
            .count(),
        total_sales: everything
            .iter()
            .map(|product| i64::from(product.sales))
            .sum(),
    };

    let rows: Vec<ProductRowView> = items.into_iter().map(ProductRowView::from).collect();
    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);
    let products = Paginated::new(rows, page, total_pages);

    Ok(DashboardPageData {
        products,
        summary,
        search,
        category: category_filter.map(|value| value.to_string()),
        status: status_filter.map(|value| value.to_string()),
        sort: sort_label(sort_key).to_string(),
    })
}

/// Lists a new product for sale.
pub fn create_product<C>(
    catalog: &C,
    session: &Session,
    form: AddProductForm,
) -> ServiceResult<Product>
where
    C: CatalogWriter + ?Sized,
{
    if !session.is_agent() {
        return Err(ServiceError::Unauthorized);
    }

    let payload = form
        .into_new_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    catalog.create_product(&payload).map_err(ServiceError::from)
}

/// Saves edits to an existing product.
pub fn modify_product<C>(
    catalog: &C,
    session: &Session,
    form: EditProductForm,
) -> ServiceResult<Product>
where
    C: CatalogWriter + ?Sized,
{
    if !session.is_agent() {
        return Err(ServiceError::Unauthorized);
    }

    let product_id = form.product_id;
    let update = form
        .into_update_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    catalog
        .update_product(product_id, &update)
        .map_err(ServiceError::from)
}

/// Removes a product from the catalog. Carts and favorites that reference
/// it are intentionally left alone.
pub fn remove_product<C>(catalog: &C, session: &Session, product_id: i32) -> ServiceResult<()>
where
    C: CatalogWriter + ?Sized,
{
    if !session.is_agent() {
        return Err(ServiceError::Unauthorized);
    }

    catalog.delete_product(product_id).map_err(ServiceError::from)
}

fn parse_sort(value: Option<&str>) -> ServiceResult<ProductSort> {
    match value {
        None | Some("") => Ok(ProductSort::Newest),
        Some(raw) => raw
            .parse()
            .map_err(|raw| ServiceError::Form(format!("unknown sort `{raw}`"))),
    }
}

/// Treats an absent, empty or `All` selection as "no filter".
fn parse_wildcard<T>(
    value: Option<&str>,
    parse: impl Fn(&str) -> ServiceResult<T>,
) -> ServiceResult<Option<T>> {
    match value {
        None | Some("") | Some("All") => Ok(None),
        Some(raw) => parse(raw).map(Some),
    }
}

fn parse_category(raw: &str) -> ServiceResult<Category> {
    raw.parse()
        .map_err(|raw| ServiceError::Form(format!("unknown category `{raw}`")))
}

fn parse_status(raw: &str) -> ServiceResult<ProductStatus> {
    raw.parse()
        .map_err(|raw| ServiceError::Form(format!("unknown status `{raw}`")))
}

fn sort_label(sort: ProductSort) -> &'static str {
    match sort {
        ProductSort::Newest => "newest",
        ProductSort::Oldest => "oldest",
        ProductSort::PriceHigh => "priceHigh",
        ProductSort::PriceLow => "priceLow",
        ProductSort::BestSelling => "bestSelling",
    }
}
