//! 领域模型模块
//!
//! 纯数据结构与纯函数，不依赖 axum/tokio

pub mod address;
pub mod mailserver;

// Re-exports for convenience
pub use mailserver::{AliasEntry, AliasListResponse, ContainerRef, EmailListResponse, StatusResponse};
