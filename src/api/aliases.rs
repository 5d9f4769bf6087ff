//! 别名管理 API
//!
//! 包含 /aliases 端点

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};
use std::sync::Arc;

use crate::api::acquire_service;
use crate::domain::mailserver::{AliasEntry, AliasListResponse};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// 创建别名路由
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/aliases", get(list_aliases).post(create_alias))
        .route("/aliases/:alias", delete(delete_alias))
}

/// 列出所有别名
///
/// GET /aliases
async fn list_aliases(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let service = acquire_service(&state)?;
    let aliases = service.list_aliases().await?;
    Ok(Json(AliasListResponse { aliases }))
}

/// 新增别名
///
/// POST /aliases
///
/// 请求体必须同时包含 alias 和 email 字段，反序列化失败统一报 400
async fn create_alias(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AliasEntry>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(entry) = payload.map_err(|_| ApiError::bad_request("Invalid request body"))?;

    let service = acquire_service(&state)?;
    let created = service.create_alias(entry).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// 删除别名
///
/// DELETE /aliases/:alias
async fn delete_alias(
    State(state): State<Arc<AppState>>,
    Path(alias): Path<String>,
) -> ApiResult<impl IntoResponse> {
    if alias.is_empty() {
        return Err(ApiError::bad_request("Alias must be provided"));
    }

    let service = acquire_service(&state)?;
    service.delete_alias(&alias).await?;
    Ok(StatusCode::NO_CONTENT)
}
