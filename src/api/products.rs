use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use crate::errors::ProductApiError;
use crate::services::ProductService;
use crate::types::dto::product::{
    CreateProductApiResponse, DeleteProductApiResponse, ProductRequest, ProductResponse,
};
use std::sync::Arc;

/// Product management API endpoints
pub struct ProductApi {
    product_service: Arc<ProductService>,
}

impl ProductApi {
    /// Create a new ProductApi with the given ProductService
    pub fn new(product_service: Arc<ProductService>) -> Self {
        Self { product_service }
    }
}

/// API tags for product endpoints
#[derive(Tags)]
enum ProductTags {
    /// API for managing products
    Products,
}

#[OpenApi]
impl ProductApi {
    /// Get all products
    ///
    /// Returns all products
    #[oai(path = "/products", method = "get", tag = "ProductTags::Products")]
    async fn get_all_products(&self) -> Result<Json<Vec<ProductResponse>>, ProductApiError> {
        let products = self.product_service.list().await?;
        Ok(Json(products))
    }

    /// Get existing product
    ///
    /// Returns a product if it exists
    #[oai(path = "/products/:id", method = "get", tag = "ProductTags::Products")]
    async fn get_product_by_id(&self, id: Path<i64>) -> Result<Json<ProductResponse>, ProductApiError> {
        let product = self.product_service.get(id.0).await?;
        Ok(Json(product))
    }

    /// Create a new product
    ///
    /// Creates a new product with the given details
    #[oai(path = "/products", method = "post", tag = "ProductTags::Products")]
    async fn create_product(
        &self,
        body: Json<ProductRequest>,
    ) -> Result<CreateProductApiResponse, ProductApiError> {
        let request = validate_product_request(body.0)?;
        let product = self.product_service.create(request).await?;
        Ok(CreateProductApiResponse::Created(Json(product)))
    }

    /// Update existing product
    ///
    /// Updates a product with the given details if it exists
    #[oai(path = "/products/:id", method = "put", tag = "ProductTags::Products")]
    async fn update_product(
        &self,
        id: Path<i64>,
        body: Json<ProductRequest>,
    ) -> Result<Json<ProductResponse>, ProductApiError> {
        let request = validate_product_request(body.0)?;
        let product = self.product_service.update(id.0, request).await?;
        Ok(Json(product))
    }

    /// Delete a product
    ///
    /// Deletes the product with the specified id
    #[oai(path = "/products/:id", method = "delete", tag = "ProductTags::Products")]
    async fn delete_product(&self, id: Path<i64>) -> Result<DeleteProductApiResponse, ProductApiError> {
        self.product_service.delete(id.0).await?;
        Ok(DeleteProductApiResponse::NoContent)
    }
}

/// Rejects names made only of whitespace; the declared validators on
/// `ProductRequest` cover length and price while the payload is bound.
fn validate_product_request(request: ProductRequest) -> Result<ProductRequest, ProductApiError> {
    if request.name.trim().is_empty() {
        return Err(ProductApiError::bad_request("Product name must not be empty"));
    }

    Ok(request)
}
