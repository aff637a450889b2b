use thiserror::Error;

/// Product domain errors
#[derive(Error, Debug)]
pub enum ProductError {
    /// No product row matches the given id
    #[error("Product not found: {id}")]
    NotFound { id: i64 },
}

impl ProductError {
    pub fn not_found(id: i64) -> Self {
        Self::NotFound { id }
    }
}
