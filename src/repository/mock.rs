use mockall::mock;

use super::{
    CartReader, CartWriter, CatalogReader, CatalogWriter, FavoriteReader, FavoriteWriter,
    SessionReader, SessionWriter,
};
use crate::domain::cart::CartLineItem;
use crate::domain::product::{CatalogQuery, NewProduct, Product, UpdateProduct};
use crate::domain::session::UserType;
use crate::repository::errors::RepositoryResult;

mock! {
    pub CartReader {}

    impl CartReader for CartReader {
        fn get_cart(&self) -> RepositoryResult<Vec<CartLineItem>>;
    }
}

mock! {
    pub CartWriter {}

    impl CartWriter for CartWriter {
        fn set_cart(&self, lines: &[CartLineItem]) -> RepositoryResult<()>;
        fn clear_cart(&self) -> RepositoryResult<()>;
    }
}

mock! {
    pub FavoriteReader {}

    impl FavoriteReader for FavoriteReader {
        fn get_favorites(&self) -> RepositoryResult<Vec<i32>>;
    }
}

mock! {
    pub FavoriteWriter {}

    impl FavoriteWriter for FavoriteWriter {
        fn set_favorites(&self, product_ids: &[i32]) -> RepositoryResult<()>;
    }
}

mock! {
    pub SessionReader {}

    impl SessionReader for SessionReader {
        fn get_user_type(&self) -> RepositoryResult<Option<UserType>>;
    }
}

mock! {
    pub SessionWriter {}

    impl SessionWriter for SessionWriter {
        fn set_user_type(&self, user_type: UserType) -> RepositoryResult<()>;
        fn clear_user_type(&self) -> RepositoryResult<()>;
    }
}

mock! {
    pub CatalogReader {}

    impl CatalogReader for CatalogReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: CatalogQuery) -> RepositoryResult<(usize, Vec<Product>)>;
    }
}

mock! {
    pub CatalogWriter {}

    impl CatalogWriter for CatalogWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
    }
}
