//! 统一错误处理
//!
//! 提供 `ApiError` 枚举实现 `IntoResponse`，替代重复的 `(StatusCode, Json<ErrorResponse>)` 模式

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::mailserver::ErrorResponse;
use crate::services::mailserver::ServiceError;

/// 统一 API 错误类型
///
/// 状态码映射沿用上游接口契约：冲突和未找到的别名都报告为 500
#[derive(Debug)]
pub enum ApiError {
    /// 400 - 请求无效
    BadRequest(String),
    /// 500 - 内部错误（运行时失败、容器未找到、别名冲突等）
    Internal(String),
}

impl ApiError {
    /// 创建请求无效错误
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            // 语义校验失败 -> 400
            ServiceError::OwnerNotFound | ServiceError::InvalidAlias => {
                ApiError::BadRequest(err.to_string())
            }
            // 其余全部 -> 500，错误消息原样透传
            ServiceError::AliasAlreadyExists
            | ServiceError::AliasNotFound
            | ServiceError::ContainerNotFound
            | ServiceError::Runtime(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(m) => write!(f, "Bad request: {}", m),
            ApiError::Internal(m) => write!(f, "Internal error: {}", m),
        }
    }
}

impl std::error::Error for ApiError {}

/// 便捷类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::docker::RuntimeError;

    #[test]
    fn test_semantic_failures_map_to_bad_request() {
        assert!(matches!(
            ApiError::from(ServiceError::OwnerNotFound),
            ApiError::BadRequest(_)
        ));
        assert!(matches!(
            ApiError::from(ServiceError::InvalidAlias),
            ApiError::BadRequest(_)
        ));
    }

    #[test]
    fn test_conflict_and_not_found_map_to_internal() {
        // 上游契约：冲突和缺失别名都走 500
        assert!(matches!(
            ApiError::from(ServiceError::AliasAlreadyExists),
            ApiError::Internal(_)
        ));
        assert!(matches!(
            ApiError::from(ServiceError::AliasNotFound),
            ApiError::Internal(_)
        ));
        assert!(matches!(
            ApiError::from(ServiceError::Runtime(RuntimeError::Unavailable(
                "socket unreachable".to_string()
            ))),
            ApiError::Internal(_)
        ));
    }
}
