//! 基础设施模块
//!
//! 封装外部依赖（Docker API client）

pub mod docker;

pub use docker::{ContainerRuntime, DockerFactory, DockerRuntime, RuntimeError, RuntimeFactory};
