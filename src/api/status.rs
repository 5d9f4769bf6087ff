//! 容器状态 API
//!
//! 包含 /status 端点

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use std::sync::Arc;

use crate::api::acquire_service;
use crate::domain::mailserver::StatusResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// 创建状态路由
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/status", get(get_status))
}

/// 检查邮件服务器容器是否在运行
///
/// GET /status
///
/// 只做容器列表匹配，不 exec；没有匹配返回 `running: false` 而不是错误
async fn get_status(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let service = acquire_service(&state)?;
    let running = service.is_running().await?;
    Ok(Json(StatusResponse { running }))
}
