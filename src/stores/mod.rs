// Stores layer - Data access and repository pattern
pub mod product_store;

pub use product_store::ProductStore;
