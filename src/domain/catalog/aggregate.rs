//! Catalog Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CatalogError, LocalizedText, Price, ProductId};

/// Product 聚合根
///
/// 不变量:
/// - 名称必须同时有默认语言和阿拉伯语
/// - 库存不能为负，新建时为 0
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: LocalizedText,
    description: Option<String>,
    description_ar: Option<String>,
    price: Price,
    category: Option<String>,
    images: Vec<String>,
    stock: i64,
    created_at: DateTime<Utc>,
}

impl Product {
    /// 创建新商品
    pub fn new(name: LocalizedText, price: Price) -> Self {
        Self {
            id: ProductId::new(),
            name,
            description: None,
            description_ar: None,
            price,
            category: None,
            images: Vec::new(),
            stock: 0,
            created_at: Utc::now(),
        }
    }

    /// 设置双语描述
    pub fn with_description(mut self, default: Option<String>, ar: Option<String>) -> Self {
        self.description = default;
        self.description_ar = ar;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// 设置图片列表（保持顺序）
    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    /// 调整库存
    pub fn set_stock(&mut self, stock: i64) -> Result<(), CatalogError> {
        if stock < 0 {
            return Err(CatalogError::InvalidStock(stock));
        }
        self.stock = stock;
        Ok(())
    }

    // Getters
    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &LocalizedText {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn description_ar(&self) -> Option<&str> {
        self.description_ar.as_deref()
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
