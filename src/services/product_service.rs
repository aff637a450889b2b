use std::sync::Arc;

use sea_orm::ConnectionTrait;

use crate::app_data::AppData;
use crate::config::{finish_transaction, DatabaseConnections};
use crate::errors::InternalError;
use crate::errors::internal::ProductError;
use crate::mappers::ProductMapper;
use crate::stores::ProductStore;
use crate::types::db::product;
use crate::types::dto::product::{ProductRequest, ProductResponse};

/// Product service that runs each product use case as one transaction
///
/// Reads use a read-only transaction, writes a read-write one. The transaction
/// commits when the operation succeeds and rolls back on any error.
pub struct ProductService {
    connections: DatabaseConnections,
    product_store: Arc<ProductStore>,
    product_mapper: Arc<ProductMapper>,
}

impl ProductService {
    /// Create ProductService from AppData
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            connections: app_data.connections.clone(),
            product_store: app_data.product_store.clone(),
            product_mapper: app_data.product_mapper.clone(),
        }
    }

    /// List all products in store order
    pub async fn list(&self) -> Result<Vec<ProductResponse>, InternalError> {
        let txn = self.connections.begin_read_transaction().await?;
        let result = self.product_store.find_all(&txn).await;
        let records = finish_transaction(txn, result).await?;

        tracing::debug!("Listed {} products", records.len());

        Ok(self.product_mapper.to_responses(records))
    }

    /// Get a single product
    ///
    /// # Returns
    /// * `Ok(ProductResponse)` - The product
    /// * `Err(InternalError::Product(ProductError::NotFound))` - No product with this id
    /// * `Err(InternalError)` - Database error
    pub async fn get(&self, id: i64) -> Result<ProductResponse, InternalError> {
        let txn = self.connections.begin_read_transaction().await?;
        let result = self.find_existing(&txn, id).await;
        let record = finish_transaction(txn, result).await?;

        Ok(self.product_mapper.to_response(record))
    }

    /// Create a product; the database assigns its id
    pub async fn create(&self, request: ProductRequest) -> Result<ProductResponse, InternalError> {
        let txn = self.connections.begin_write_transaction().await?;
        let new_record = self.product_mapper.to_new_record(request);
        let result = self.product_store.save(&txn, new_record).await;
        let record = finish_transaction(txn, result).await?;

        tracing::info!("Product {} created", record.id);

        Ok(self.product_mapper.to_response(record))
    }

    /// Overwrite name, description and price of an existing product
    ///
    /// # Returns
    /// * `Ok(ProductResponse)` - The updated product, same id
    /// * `Err(InternalError::Product(ProductError::NotFound))` - No product with this id
    /// * `Err(InternalError)` - Database error
    pub async fn update(&self, id: i64, request: ProductRequest) -> Result<ProductResponse, InternalError> {
        let txn = self.connections.begin_write_transaction().await?;
        let result = self.update_existing(&txn, id, request).await;
        let record = finish_transaction(txn, result).await?;

        tracing::info!("Product {} updated", record.id);

        Ok(self.product_mapper.to_response(record))
    }

    /// Delete an existing product
    ///
    /// # Returns
    /// * `Ok(())` - Product deleted
    /// * `Err(InternalError::Product(ProductError::NotFound))` - No product with this id
    /// * `Err(InternalError)` - Database error
    pub async fn delete(&self, id: i64) -> Result<(), InternalError> {
        let txn = self.connections.begin_write_transaction().await?;
        let result = self.delete_existing(&txn, id).await;
        finish_transaction(txn, result).await?;

        tracing::info!("Product {} deleted", id);

        Ok(())
    }

    async fn update_existing(
        &self,
        conn: &impl ConnectionTrait,
        id: i64,
        request: ProductRequest,
    ) -> Result<product::Model, InternalError> {
        let record = self.find_existing(conn, id).await?;
        let updated = self.product_mapper.apply_update(record, request);
        self.product_store.save(conn, updated).await
    }

    async fn delete_existing(&self, conn: &impl ConnectionTrait, id: i64) -> Result<(), InternalError> {
        let record = self.find_existing(conn, id).await?;
        self.product_store.delete(conn, record).await
    }

    async fn find_existing(&self, conn: &impl ConnectionTrait, id: i64) -> Result<product::Model, InternalError> {
        self.product_store
            .find_by_id(conn, id)
            .await?
            .ok_or_else(|| ProductError::not_found(id).into())
    }
}
