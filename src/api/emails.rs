//! 邮箱列表 API
//!
//! 包含 /emails 端点

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use std::sync::Arc;

use crate::api::acquire_service;
use crate::domain::mailserver::EmailListResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// 创建邮箱路由
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/emails", get(list_emails))
}

/// 列出邮件服务器上的所有邮箱地址
///
/// GET /emails
async fn list_emails(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let service = acquire_service(&state)?;
    let emails = service.list_emails().await?;
    Ok(Json(EmailListResponse { emails }))
}
