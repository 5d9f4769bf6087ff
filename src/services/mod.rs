//! 服务层模块
//!
//! 包含核心业务逻辑

pub mod mailserver;
pub mod parser;

pub use mailserver::{MailserverService, ServiceError};
