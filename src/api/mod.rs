//! API 模块
//!
//! HTTP handlers 和路由组装

pub mod aliases;
pub mod emails;
pub mod status;

use axum::Router;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::services::MailserverService;
use crate::state::AppState;

/// 构建完整的 API 路由
///
/// 裸路径和 /v1 前缀都可达（上游接口挂在 /v1 下）
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        // Status
        .merge(status::router())
        // E-Mails
        .merge(emails::router())
        // Aliases
        .merge(aliases::router());

    Router::new()
        .merge(api.clone())
        .nest("/v1", api)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// 按请求获取运行时 client 并构造服务
///
/// client 的生命周期限定在单个请求内
pub(crate) fn acquire_service(state: &AppState) -> Result<MailserverService, crate::error::ApiError> {
    let runtime = state
        .runtime
        .acquire()
        .map_err(|e| crate::error::ApiError::internal(e.to_string()))?;
    Ok(MailserverService::new(runtime, &state.config))
}
