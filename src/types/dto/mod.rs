// Wire-facing request/response models
pub mod common;
pub mod product;
