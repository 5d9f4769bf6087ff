//! DMS Alias Agent - docker-mailserver 别名管理代理
//!
//! 通过 Docker exec 调用容器内的 setup 工具，提供别名/邮箱的 HTTP 管理接口

pub mod error;
pub mod infra;
pub mod domain;
pub mod config;
pub mod state;
pub mod api;
pub mod services;

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::env::EnvConfig;
use crate::config::RuntimeConfig;
use crate::state::AppState;

/// 初始化并运行代理服务
///
/// 加载环境配置，绑定监听端口，启动 HTTP 服务
pub async fn init_and_run_agent_with_config(runtime_config: RuntimeConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut config = EnvConfig::from_env();
    if let Some(port) = runtime_config.port_override {
        config.port = port;
    }

    info!(
        version = config::env::constants::VERSION,
        image = %config.mailserver_image,
        port = config.port,
        "Starting dms-alias-agent"
    );

    let state = Arc::new(AppState::new(config.clone()));
    let app = api::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %addr, error = %e, "Failed to bind listener");
            return;
        }
    };

    info!(addr = %addr, "Listening");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "HTTP server exited with error");
    }
}
