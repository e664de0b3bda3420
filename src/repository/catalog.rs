use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::product::{CatalogQuery, NewProduct, Product, UpdateProduct, filter_and_sort};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CatalogReader, CatalogWriter};

/// In-memory product catalog standing in for a product backend. The catalog
/// is injected into services, so the filter and pricing engines stay
/// testable independently of the seed data.
#[derive(Clone)]
pub struct InMemoryCatalog {
    products: Arc<RwLock<Vec<Product>>>,
    next_id: Arc<AtomicI32>,
}

impl InMemoryCatalog {
    /// Create a catalog pre-populated with `products`.
    pub fn with_products(products: Vec<Product>) -> Self {
        let next_id = products.iter().map(|product| product.id).max().unwrap_or(0) + 1;
        Self {
            products: Arc::new(RwLock::new(products)),
            next_id: Arc::new(AtomicI32::new(next_id)),
        }
    }

    /// Create an empty catalog.
    pub fn empty() -> Self {
        Self::with_products(Vec::new())
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, Vec<Product>>> {
        self.products.read().map_err(|_| RepositoryError::Poisoned)
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, Vec<Product>>> {
        self.products.write().map_err(|_| RepositoryError::Poisoned)
    }
}

impl CatalogReader for InMemoryCatalog {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>> {
        let products = self.read()?;
        Ok(products.iter().find(|product| product.id == id).cloned())
    }

    fn list_products(&self, query: CatalogQuery) -> RepositoryResult<(usize, Vec<Product>)> {
        let products = self.read()?;
        let filtered = filter_and_sort(&products, &query);
        let total = filtered.len();

        let items = match &query.pagination {
            Some(pagination) => {
                let offset = (pagination.page.max(1) - 1) * pagination.per_page;
                filtered
                    .into_iter()
                    .skip(offset)
                    .take(pagination.per_page)
                    .collect()
            }
            None => filtered,
        };

        Ok((total, items))
    }
}

impl CatalogWriter for InMemoryCatalog {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product> {
        let mut products = self.write()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);

        let product = Product {
            id,
            name: new_product.name.clone(),
            description: new_product.description.clone(),
            price_cents: new_product.price_cents,
            stock: new_product.stock,
            category: new_product.category,
            status: new_product.status,
            sales: 0,
            image: new_product.image.clone(),
            colors: default_colors(),
            sizes: default_sizes(),
            created_at: new_product.created_at,
            updated_at: new_product.created_at,
        };

        products.push(product.clone());
        Ok(product)
    }

    fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product> {
        let mut products = self.write()?;
        let product = products
            .iter_mut()
            .find(|product| product.id == product_id)
            .ok_or(RepositoryError::NotFound)?;

        if let Some(name) = &updates.name {
            product.name = name.clone();
        }
        if let Some(description) = &updates.description {
            product.description = description.clone();
        }
        if let Some(price_cents) = updates.price_cents {
            product.price_cents = price_cents;
        }
        if let Some(stock) = updates.stock {
            product.stock = stock;
        }
        if let Some(category) = updates.category {
            product.category = category;
        }
        if let Some(status) = updates.status {
            product.status = status;
        }
        product.updated_at = updates.updated_at;

        Ok(product.clone())
    }

    fn delete_product(&self, product_id: i32) -> RepositoryResult<()> {
        let mut products = self.write()?;
        let before = products.len();
        products.retain(|product| product.id != product_id);

        if products.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

/// Variant options offered on every listing; the demo catalog does not model
/// per-product variant configuration.
fn default_colors() -> Vec<String> {
    ["Black", "White", "Gold", "Silver"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn default_sizes() -> Vec<String> {
    ["S", "M", "L", "XL"].into_iter().map(str::to_string).collect()
}
