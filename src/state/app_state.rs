//! 应用状态

use chrono::{DateTime, Utc};

use crate::config::env::EnvConfig;
use crate::infra::docker::{DockerFactory, RuntimeFactory};

/// 应用状态
///
/// 没有跨请求的可变状态；运行时 client 由 factory 按请求获取，
/// 容器配置文件是唯一持久状态
pub struct AppState {
    /// 环境配置
    pub config: EnvConfig,
    /// 容器运行时获取器
    pub runtime: Box<dyn RuntimeFactory>,
    /// 服务启动时间
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: EnvConfig) -> Self {
        Self {
            config,
            runtime: Box::new(DockerFactory),
            started_at: Utc::now(),
        }
    }

    /// 注入自定义运行时获取器，测试用
    pub fn with_runtime_factory(config: EnvConfig, runtime: Box<dyn RuntimeFactory>) -> Self {
        Self {
            config,
            runtime,
            started_at: Utc::now(),
        }
    }
}
