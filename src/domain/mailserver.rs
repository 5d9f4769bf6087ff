//! 邮件服务器相关领域模型

use serde::{Deserialize, Serialize};

/// 容器引用
///
/// 每个请求重新解析，不跨请求缓存
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRef {
    pub id: String,
    pub image: String,
}

/// 容器运行状态响应
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub running: bool,
}

/// 错误响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// 邮箱列表响应
#[derive(Debug, Serialize, Deserialize)]
pub struct EmailListResponse {
    pub emails: Vec<String>,
}

/// 别名条目，同时作为 POST /aliases 的请求与响应体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    /// 虚拟地址
    pub alias: String,
    /// 归属邮箱地址
    pub email: String,
}

/// 别名列表响应
#[derive(Debug, Serialize, Deserialize)]
pub struct AliasListResponse {
    pub aliases: Vec<AliasEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_response_wire_format() {
        let json = serde_json::to_string(&StatusResponse { running: true }).unwrap();
        assert_eq!(json, r#"{"running":true}"#);
    }

    #[test]
    fn test_error_response_wire_format() {
        let json = serde_json::to_string(&ErrorResponse {
            error: "Something went wrong".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"error":"Something went wrong"}"#);
    }

    #[test]
    fn test_alias_list_wire_format() {
        let json = serde_json::to_string(&AliasListResponse {
            aliases: vec![AliasEntry {
                alias: "alias1@example.com".to_string(),
                email: "user1@example.com".to_string(),
            }],
        })
        .unwrap();
        assert_eq!(
            json,
            r#"{"aliases":[{"alias":"alias1@example.com","email":"user1@example.com"}]}"#
        );
    }

    #[test]
    fn test_email_list_wire_format() {
        let json = serde_json::to_string(&EmailListResponse {
            emails: vec!["user1@example.com".to_string(), "user2@example.com".to_string()],
        })
        .unwrap();
        assert_eq!(
            json,
            r#"{"emails":["user1@example.com","user2@example.com"]}"#
        );
    }
}
