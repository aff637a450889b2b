use thiserror::Error;

pub mod database;
pub mod product;

pub use database::DatabaseError;
pub use product::ProductError;

/// Internal error type for store and service operations
///
/// Separates infrastructure errors (shared) from domain errors (per resource).
/// Not exposed via API - endpoints must convert to ProductApiError.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Product(#[from] ProductError),
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    /// True when the error is the domain-level "no such product" signal
    pub fn is_not_found(&self) -> bool {
        matches!(self, InternalError::Product(ProductError::NotFound { .. }))
    }
}
