//! Catalog Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid product name: {0}")]
    InvalidName(&'static str),

    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    #[error("Invalid stock: {0}")]
    InvalidStock(i64),
}
