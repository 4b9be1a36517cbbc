//! Catalog Context - 商品目录限界上下文
//!
//! 职责:
//! - 商品元数据（双语名称、描述、价格、库存）

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::Product;
pub use errors::CatalogError;
pub use value_objects::{LocalizedText, Price, ProductId};
