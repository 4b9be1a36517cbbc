//! Catalog Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CatalogError;

/// 商品唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(Uuid);

impl ProductId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 双语文本：默认语言 + 阿拉伯语
///
/// 不变量:
/// - 两种语言都不能为空
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    default: String,
    ar: String,
}

impl LocalizedText {
    pub fn new(default: impl Into<String>, ar: impl Into<String>) -> Result<Self, CatalogError> {
        let default = default.into();
        let ar = ar.into();
        if default.trim().is_empty() {
            return Err(CatalogError::InvalidName("name is required"));
        }
        if ar.trim().is_empty() {
            return Err(CatalogError::InvalidName("Arabic name is required"));
        }
        Ok(Self { default, ar })
    }

    pub fn default_text(&self) -> &str {
        &self.default
    }

    pub fn ar(&self) -> &str {
        &self.ar
    }
}

/// 商品价格
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn new(amount: f64) -> Result<Self, CatalogError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(CatalogError::InvalidPrice(amount));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_text_requires_both_languages() {
        assert!(LocalizedText::new("Shirt", "قميص").is_ok());
        assert!(LocalizedText::new("", "قميص").is_err());
        assert!(LocalizedText::new("Shirt", "   ").is_err());
    }

    #[test]
    fn test_price_rejects_nan_and_negative() {
        assert_eq!(Price::new(199.5).unwrap().amount(), 199.5);
        assert!(Price::new(-1.0).is_err());
        assert!(Price::new(f64::NAN).is_err());
    }
}
