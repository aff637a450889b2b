// Database entities - SeaORM models
pub mod product;
