use crate::domain::cart::CartLineItem;
use crate::domain::product::{CatalogQuery, NewProduct, Product, UpdateProduct};
use crate::domain::session::UserType;

pub mod catalog;
pub mod errors;
pub mod store;

#[cfg(test)]
pub mod mock;

pub use catalog::InMemoryCatalog;
pub use errors::{RepositoryError, RepositoryResult};
pub use store::DieselStore;

/// Read access to the persisted shopping bag.
pub trait CartReader {
    fn get_cart(&self) -> RepositoryResult<Vec<CartLineItem>>;
}

/// Write access to the persisted shopping bag. Writes replace the whole
/// collection; the last write wins.
pub trait CartWriter {
    fn set_cart(&self, lines: &[CartLineItem]) -> RepositoryResult<()>;
    fn clear_cart(&self) -> RepositoryResult<()>;
}

/// Read access to the persisted favorite set.
pub trait FavoriteReader {
    fn get_favorites(&self) -> RepositoryResult<Vec<i32>>;
}

/// Write access to the persisted favorite set.
pub trait FavoriteWriter {
    fn set_favorites(&self, product_ids: &[i32]) -> RepositoryResult<()>;
}

/// Read access to the persisted visitor role.
pub trait SessionReader {
    fn get_user_type(&self) -> RepositoryResult<Option<UserType>>;
}

/// Write access to the persisted visitor role.
pub trait SessionWriter {
    fn set_user_type(&self, user_type: UserType) -> RepositoryResult<()>;
    fn clear_user_type(&self) -> RepositoryResult<()>;
}

/// Read-only operations over the product catalog.
pub trait CatalogReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    /// Returns the total match count alongside the (optionally paginated)
    /// items.
    fn list_products(&self, query: CatalogQuery) -> RepositoryResult<(usize, Vec<Product>)>;
}

/// Write operations over the product catalog. Deleting a product never
/// cascades into carts or favorites.
pub trait CatalogWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
    fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
}
