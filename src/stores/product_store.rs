use crate::errors::InternalError;
use crate::types::db::product::{self, ActiveModel, Entity as Product};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, EntityTrait, ModelTrait, QueryOrder};

/// ProductStore is the only component that reads or writes the product table
///
/// Every method runs on the connection or transaction it is given, so the
/// caller decides the transaction boundary.
pub struct ProductStore {}

impl ProductStore {
    pub fn new() -> Self {
        Self {}
    }

    /// Fetch every product in primary key order
    pub async fn find_all(
        &self,
        conn: &impl ConnectionTrait,
    ) -> Result<Vec<product::Model>, InternalError> {
        Product::find()
            .order_by_asc(product::Column::Id)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("find_all_products", e))
    }

    pub async fn find_by_id(
        &self,
        conn: &impl ConnectionTrait,
        id: i64,
    ) -> Result<Option<product::Model>, InternalError> {
        Product::find_by_id(id)
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_product_by_id", e))
    }

    /// Persist a product record
    ///
    /// Inserts when the id is not set (the database assigns it), otherwise
    /// overwrites the row with the matching id.
    ///
    /// # Returns
    /// * `Ok(Model)` - The stored row, including its id
    /// * `Err(InternalError)` - Database error
    pub async fn save(
        &self,
        conn: &impl ConnectionTrait,
        record: ActiveModel,
    ) -> Result<product::Model, InternalError> {
        if matches!(record.id, ActiveValue::NotSet) {
            record
                .insert(conn)
                .await
                .map_err(|e| InternalError::database("insert_product", e))
        } else {
            record
                .update(conn)
                .await
                .map_err(|e| InternalError::database("update_product", e))
        }
    }

    /// Delete a product row. The caller guarantees the row exists.
    pub async fn delete(
        &self,
        conn: &impl ConnectionTrait,
        record: product::Model,
    ) -> Result<(), InternalError> {
        record
            .delete(conn)
            .await
            .map_err(|e| InternalError::database("delete_product", e))?;

        Ok(())
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ProductStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductStore").finish()
    }
}
