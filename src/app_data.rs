use std::sync::Arc;
use crate::config::DatabaseConnections;
use crate::mappers::ProductMapper;
use crate::stores::ProductStore;

/// Centralized application data following the main-owned stores pattern
///
/// Everything is created once in main.rs and shared with the services.
///
/// ```text
/// main.rs
///   ↓
/// AppData::init(connections)
///   ├─ connections (DatabaseConnections)
///   ├─ product_store (Arc<ProductStore>)
///   └─ product_mapper (Arc<ProductMapper>)
///   ↓ wrapped in Arc<AppData>
///   └─ ProductService::new(app_data) → ProductApi::new(service)
/// ```
pub struct AppData {
    pub connections: DatabaseConnections,
    pub product_store: Arc<ProductStore>,
    pub product_mapper: Arc<ProductMapper>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// Database connections should be initialized and migrated before calling this.
    pub fn init(connections: DatabaseConnections) -> Self {
        tracing::debug!("Initializing AppData...");

        let product_store = Arc::new(ProductStore::new());
        let product_mapper = Arc::new(ProductMapper::new());

        tracing::debug!("AppData initialization complete");

        Self {
            connections,
            product_store,
            product_mapper,
        }
    }
}
