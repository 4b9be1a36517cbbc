//! Account Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Email, Role, UserId};

/// User 聚合根
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: Email,
    phone: Option<String>,
    // TODO: hash before storing once login validates credentials
    password: String,
    role: Role,
    created_at: DateTime<Utc>,
}

impl User {
    /// 创建新用户（默认角色为 customer）
    pub fn new(
        name: impl Into<String>,
        email: Email,
        phone: Option<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            email,
            phone,
            password: password.into(),
            role: Role::default(),
            created_at: Utc::now(),
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    // Getters
    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
