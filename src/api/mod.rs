// API layer - HTTP endpoints
pub mod health;
pub mod products;

use std::sync::Arc;

pub use health::HealthApi;
pub use products::ProductApi;
use poem::Route;
use poem_openapi::OpenApiService;

use crate::{app_data::AppData, services::ProductService};

/// Build the application routes
///
/// * `/products...`, `/health` - the API itself
/// * `/swagger` - Swagger UI
/// * `/openapi.json` - OpenAPI document
pub fn build_routes(app_data: Arc<AppData>, server_url: &str) -> Route {
    let product_service = Arc::new(ProductService::new(app_data));
    let product_api = ProductApi::new(product_service);

    let api_service = OpenApiService::new((HealthApi, product_api), "Product API", "1.0")
        .description("API for managing products")
        .server(server_url);

    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest("/swagger", ui)
        .at("/openapi.json", spec)
        .nest("/", api_service)
}
