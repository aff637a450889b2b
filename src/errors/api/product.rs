use crate::errors::internal::{InternalError, ProductError};
use poem_openapi::{ApiResponse, payload::PlainText};
use std::fmt;

/// Product endpoint error types
#[derive(ApiResponse, Debug)]
pub enum ProductApiError {
    /// Request payload or path identifier is invalid
    #[oai(status = 400)]
    BadRequest(PlainText<String>),

    /// No product exists with the requested id
    #[oai(status = 404)]
    NotFound,

    /// Internal server error
    #[oai(status = 500)]
    InternalError(PlainText<String>),
}

impl ProductApiError {
    /// Create a BadRequest error carrying the validation message
    pub fn bad_request(message: impl Into<String>) -> Self {
        ProductApiError::BadRequest(PlainText(message.into()))
    }

    /// Convert InternalError to ProductApiError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// Infrastructure details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Product(ProductError::NotFound { id }) => {
                tracing::debug!("Product {} not found", id);
                Self::NotFound
            }
            InternalError::Database(db_err) => {
                tracing::error!("Database error in product operation: {}", db_err);
                Self::internal_server_error()
            }
        }
    }

    /// Generic internal server error, never exposes internal details
    fn internal_server_error() -> Self {
        ProductApiError::InternalError(PlainText("An internal error occurred".to_string()))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            ProductApiError::BadRequest(text) => text.0.clone(),
            ProductApiError::NotFound => String::new(),
            ProductApiError::InternalError(text) => text.0.clone(),
        }
    }

    /// Get the HTTP status code from the error variant
    pub fn status_code(&self) -> u16 {
        match self {
            ProductApiError::BadRequest(_) => 400,
            ProductApiError::NotFound => 404,
            ProductApiError::InternalError(_) => 500,
        }
    }
}

impl From<InternalError> for ProductApiError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for ProductApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
