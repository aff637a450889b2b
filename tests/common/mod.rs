// Common test utilities for integration tests

use migration::{Migrator, MigratorTrait};
use poem::Route;
use poem::test::TestClient;
use product_backend::AppData;
use product_backend::api::build_routes;
use product_backend::config::DatabaseConnections;
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;

/// Creates an in-memory product database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

#[allow(dead_code)]
/// Creates a test client for the full route tree on top of a fresh database
pub async fn setup_test_client() -> (DatabaseConnection, TestClient<Route>) {
    let db = setup_test_db().await;
    let app_data = Arc::new(AppData::init(DatabaseConnections::from_connection(db.clone())));
    let client = TestClient::new(build_routes(app_data, "http://localhost:3000"));
    (db, client)
}
