// API-facing error types
pub mod product;

// Re-exports for convenience
pub use product::ProductApiError;
