//! Account Context - 用户账户限界上下文
//!
//! 职责:
//! - 用户资料与角色
//!
//! 注意: 密码按原样保存，没有哈希

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::User;
pub use errors::AccountError;
pub use value_objects::{Email, Role, UserId};
