// Services layer - Business logic and orchestration
pub mod product_service;

pub use product_service::ProductService;
