//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（如 SQLite）

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::account::{Role, User};
use crate::domain::catalog::Product;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Product Repository
// ============================================================================

/// 商品实体（用于持久化）
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: Uuid,
    pub name: String,
    pub name_ar: String,
    pub description: Option<String>,
    pub description_ar: Option<String>,
    pub price: f64,
    pub category: Option<String>,
    pub images: Vec<String>,
    pub stock: i64,
    pub created_at: DateTime<Utc>,
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        Self {
            id: *product.id().as_uuid(),
            name: product.name().default_text().to_string(),
            name_ar: product.name().ar().to_string(),
            description: product.description().map(str::to_string),
            description_ar: product.description_ar().map(str::to_string),
            price: product.price().amount(),
            category: product.category().map(str::to_string),
            images: product.images().to_vec(),
            stock: product.stock(),
            created_at: product.created_at(),
        }
    }
}

/// Product Repository Port
#[async_trait]
pub trait ProductRepositoryPort: Send + Sync {
    /// 保存商品（存在则更新）
    async fn save(&self, product: &ProductRecord) -> Result<(), RepositoryError>;

    /// 根据 ID 查找商品
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProductRecord>, RepositoryError>;

    /// 获取所有商品（按创建时间倒序）
    async fn find_all(&self) -> Result<Vec<ProductRecord>, RepositoryError>;

    /// 删除商品
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}

// ============================================================================
// User Repository
// ============================================================================

/// 用户实体（用于持久化）
///
/// password 原样存储
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserRecord {
    fn from(user: &User) -> Self {
        Self {
            id: *user.id().as_uuid(),
            name: user.name().to_string(),
            email: user.email().as_str().to_string(),
            phone: user.phone().map(str::to_string),
            password: user.password().to_string(),
            role: user.role(),
            created_at: user.created_at(),
        }
    }
}

/// User Repository Port
#[async_trait]
pub trait UserRepositoryPort: Send + Sync {
    /// 保存用户，邮箱重复返回 `RepositoryError::Duplicate`
    async fn save(&self, user: &UserRecord) -> Result<(), RepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, RepositoryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepositoryError>;

    async fn find_all(&self) -> Result<Vec<UserRecord>, RepositoryError>;
}
