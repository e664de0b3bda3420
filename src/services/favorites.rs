use serde::Serialize;

use crate::domain::cart::{self, CartLineItem};
use crate::repository::{
    CartReader, CartWriter, CatalogReader, FavoriteReader, FavoriteWriter,
};
use crate::services::{ServiceError, ServiceResult, format_cents};

/// One card on the favorites page.
#[derive(Debug, Serialize)]
pub struct FavoriteView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price_formatted: String,
    pub image: String,
}

/// Data required to render the favorites page.
pub struct FavoritesPageData {
    pub items: Vec<FavoriteView>,
}

/// Loads the favorites page. Ids that no longer resolve against the catalog
/// are tolerated and simply skipped; the stored set is left as-is.
pub fn load_favorites_page<C, S>(catalog: &C, store: &S) -> ServiceResult<FavoritesPageData>
where
    C: CatalogReader + ?Sized,
    S: FavoriteReader + ?Sized,
{
    let ids = store.get_favorites().map_err(ServiceError::from)?;

    let mut items = Vec::with_capacity(ids.len());
    for id in ids {
        if let Some(product) = catalog.get_product_by_id(id).map_err(ServiceError::from)? {
            items.push(FavoriteView {
                id: product.id,
                name: product.name,
                description: product.description,
                price_formatted: format_cents(product.price_cents),
                image: product.image,
            });
        }
    }

    Ok(FavoritesPageData { items })
}

/// Removes `product_id` from the favorite set. Removing an id that is not
/// present is a no-op.
pub fn remove_favorite<S>(store: &S, product_id: i32) -> ServiceResult<()>
where
    S: FavoriteReader + FavoriteWriter + ?Sized,
{
    let mut favorites = store.get_favorites().map_err(ServiceError::from)?;
    favorites.retain(|id| *id != product_id);
    store.set_favorites(&favorites).map_err(ServiceError::from)?;
    Ok(())
}

/// Adds a favorite to the bag with the default variant, through the same
/// merge key as every other add path. The favorite itself is kept.
pub fn add_favorite_to_cart<C, S>(catalog: &C, store: &S, product_id: i32) -> ServiceResult<String>
where
    C: CatalogReader + ?Sized,
    S: CartReader + CartWriter + ?Sized,
{
    let product = catalog
        .get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    let candidate = CartLineItem {
        product_id: product.id,
        name: product.name.clone(),
        price_cents: product.price_cents,
        image: product.image.clone(),
        color: cart::DEFAULT_COLOR.to_string(),
        size: cart::DEFAULT_SIZE.to_string(),
        quantity: 1,
    };

    let lines = store.get_cart().map_err(ServiceError::from)?;
    let lines = cart::add_or_merge(lines, candidate);
    store.set_cart(&lines).map_err(ServiceError::from)?;

    Ok(product.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::domain::product::{Category, Product, ProductStatus};
    use crate::repository::RepositoryResult;
    use crate::repository::mock::{MockCatalogReader, MockFavoriteReader};

    fn sample_product(id: i32) -> Product {
        let listed = NaiveDate::from_ymd_opt(2025, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default();
        Product {
            id,
            name: format!("Product {id}"),
            description: "Premium quality".to_string(),
            price_cents: 7900,
            stock: 5,
            category: Category::Accessories,
            status: ProductStatus::Published,
            sales: 0,
            image: String::new(),
            colors: vec!["Black".to_string()],
            sizes: vec!["M".to_string()],
            created_at: listed,
            updated_at: listed,
        }
    }

    #[test]
    fn stale_favorite_ids_are_skipped() {
        let mut store = MockFavoriteReader::new();
        store
            .expect_get_favorites()
            .returning(|| Ok(vec![2, 99, 5]));

        let mut catalog = MockCatalogReader::new();
        catalog.expect_get_product_by_id().returning(|id| {
            if id == 99 {
                Ok(None)
            } else {
                Ok(Some(sample_product(id)))
            }
        });

        let data = load_favorites_page(&catalog, &store).expect("expected success");
        let ids: Vec<i32> = data.items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![2, 5]);
    }

    struct FakeFavorites {
        stored: std::cell::RefCell<Vec<i32>>,
    }

    impl FavoriteReader for FakeFavorites {
        fn get_favorites(&self) -> RepositoryResult<Vec<i32>> {
            Ok(self.stored.borrow().clone())
        }
    }

    impl FavoriteWriter for FakeFavorites {
        fn set_favorites(&self, ids: &[i32]) -> RepositoryResult<()> {
            *self.stored.borrow_mut() = ids.to_vec();
            Ok(())
        }
    }

    #[test]
    fn remove_favorite_keeps_the_rest() {
        let store = FakeFavorites {
            stored: std::cell::RefCell::new(vec![2, 5, 8]),
        };

        remove_favorite(&store, 5).expect("expected success");
        assert_eq!(*store.stored.borrow(), vec![2, 8]);

        // Removing again is a no-op.
        remove_favorite(&store, 5).expect("expected success");
        assert_eq!(*store.stored.borrow(), vec![2, 8]);
    }
}
