use poem_openapi::{ApiResponse, Object, payload::Json};
use serde::{Deserialize, Serialize};

/// Request model for creating or updating a product
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRequest {
    /// Name of the product (1-100 characters, not blank)
    #[oai(validator(min_length = 1, max_length = 100))]
    pub name: String,

    /// Optional description of the product
    pub description: Option<String>,

    /// Price of the product, must be greater than or equal to 0
    #[oai(validator(minimum(value = "0")))]
    pub price: f64,
}

/// Response model representing a stored product
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    /// Server-generated product id
    pub id: i64,

    /// Name of the product
    pub name: String,

    /// Optional description of the product
    pub description: Option<String>,

    /// Price of the product
    pub price: f64,
}

/// API response for product creation
#[derive(ApiResponse, Debug)]
pub enum CreateProductApiResponse {
    /// Product created
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
}

/// API response for product deletion
#[derive(ApiResponse, Debug)]
pub enum DeleteProductApiResponse {
    /// Product deleted
    #[oai(status = 204)]
    NoContent,
}
