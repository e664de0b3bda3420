use diesel::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::db::{DbConnection, DbPool};
use crate::domain::cart::CartLineItem;
use crate::domain::session::UserType;
use crate::models::store::NewStoreEntry;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    CartReader, CartWriter, FavoriteReader, FavoriteWriter, SessionReader, SessionWriter,
};

/// Store key holding the serialized shopping bag.
pub const CART_KEY: &str = "cart";
/// Store key holding the serialized favorite product ids.
pub const FAVORITES_KEY: &str = "favorites";
/// Store key holding the visitor role written at login.
pub const USER_TYPE_KEY: &str = "userType";

/// Diesel-backed flat key-value store over an r2d2 pool. Each key maps to a
/// whole JSON document that is replaced on every write.
#[derive(Clone)]
pub struct DieselStore {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselStore {
    /// Create a new store using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        self.pool
            .get()
            .map_err(|err| RepositoryError::Pool(err.to_string()))
    }

    fn read_value(&self, entry_key: &str) -> RepositoryResult<Option<String>> {
        use crate::schema::local_store;

        let mut conn = self.conn()?;
        let value = local_store::table
            .find(entry_key)
            .select(local_store::value)
            .first::<String>(&mut conn)
            .optional()?;

        Ok(value)
    }

    fn write_value(&self, entry_key: &str, raw: &str) -> RepositoryResult<()> {
        use crate::schema::local_store;

        let mut conn = self.conn()?;
        let entry = NewStoreEntry {
            key: entry_key,
            value: raw,
            updated_at: chrono::Local::now().naive_utc(),
        };
        diesel::replace_into(local_store::table)
            .values(&entry)
            .execute(&mut conn)?;

        Ok(())
    }

    fn delete_value(&self, entry_key: &str) -> RepositoryResult<()> {
        use crate::schema::local_store;

        let mut conn = self.conn()?;
        diesel::delete(local_store::table.find(entry_key)).execute(&mut conn)?;

        Ok(())
    }

    /// Reads and decodes a stored collection. A missing key is the empty
    /// collection; a malformed payload is logged and discarded rather than
    /// failing the page.
    fn read_collection<T>(&self, entry_key: &str) -> RepositoryResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let Some(raw) = self.read_value(entry_key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(items) => Ok(items),
            Err(err) => {
                log::warn!("discarding malformed `{entry_key}` payload: {err}");
                Ok(Vec::new())
            }
        }
    }

    fn write_collection<T>(&self, entry_key: &str, items: &[T]) -> RepositoryResult<()>
    where
        T: Serialize,
    {
        let raw = serde_json::to_string(items)?;
        self.write_value(entry_key, &raw)
    }
}

impl CartReader for DieselStore {
    fn get_cart(&self) -> RepositoryResult<Vec<CartLineItem>> {
        self.read_collection(CART_KEY)
    }
}

impl CartWriter for DieselStore {
    fn set_cart(&self, lines: &[CartLineItem]) -> RepositoryResult<()> {
        self.write_collection(CART_KEY, lines)
    }

    fn clear_cart(&self) -> RepositoryResult<()> {
        self.delete_value(CART_KEY)
    }
}

impl FavoriteReader for DieselStore {
    fn get_favorites(&self) -> RepositoryResult<Vec<i32>> {
        self.read_collection(FAVORITES_KEY)
    }
}

impl FavoriteWriter for DieselStore {
    fn set_favorites(&self, product_ids: &[i32]) -> RepositoryResult<()> {
        self.write_collection(FAVORITES_KEY, product_ids)
    }
}

impl SessionReader for DieselStore {
    fn get_user_type(&self) -> RepositoryResult<Option<UserType>> {
        let Some(raw) = self.read_value(USER_TYPE_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(user_type) => Ok(Some(user_type)),
            Err(err) => {
                log::warn!("discarding malformed `{USER_TYPE_KEY}` payload: {err}");
                Ok(None)
            }
        }
    }
}

impl SessionWriter for DieselStore {
    fn set_user_type(&self, user_type: UserType) -> RepositoryResult<()> {
        let raw = serde_json::to_string(&user_type)?;
        self.write_value(USER_TYPE_KEY, &raw)
    }

    fn clear_user_type(&self) -> RepositoryResult<()> {
        self.delete_value(USER_TYPE_KEY)
    }
}
