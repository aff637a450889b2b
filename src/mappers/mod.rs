// Mappers layer - Conversions between wire DTOs and persisted records
pub mod product_mapper;

pub use product_mapper::ProductMapper;
