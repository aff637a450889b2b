// Test utilities shared across unit tests
// Only compiled when running tests

use sea_orm::{Database, DatabaseConnection};
use migration::{Migrator, MigratorTrait};
use crate::{app_data::AppData, config::DatabaseConnections, services::ProductService, types::dto::product::ProductRequest};
use std::sync::Arc;

/// Creates an in-memory database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Creates AppData on top of a fresh in-memory database
///
/// Returns (db, app_data); the raw connection lets tests inspect the table directly.
pub async fn setup_test_app_data() -> (DatabaseConnection, Arc<AppData>) {
    let db = setup_test_db().await;
    let app_data = Arc::new(AppData::init(DatabaseConnections::from_connection(db.clone())));
    (db, app_data)
}

/// Creates a ProductService backed by a fresh in-memory database
pub async fn setup_test_product_service() -> (DatabaseConnection, Arc<ProductService>) {
    let (db, app_data) = setup_test_app_data().await;
    (db, Arc::new(ProductService::new(app_data)))
}

pub fn product_request(name: &str, description: Option<&str>, price: f64) -> ProductRequest {
    ProductRequest {
        name: name.to_string(),
        description: description.map(str::to_string),
        price,
    }
}
