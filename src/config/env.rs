//! 环境变量配置加载

use std::env;

/// 环境配置
#[derive(Clone, Debug)]
pub struct EnvConfig {
    /// 服务监听端口
    pub port: u16,
    /// 邮件服务器容器的镜像名子串（按包含关系匹配）
    pub mailserver_image: String,
    /// 容器内管理工具的命令名
    pub setup_command: String,
}

impl EnvConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(constants::DEFAULT_PORT);

        let mailserver_image = env::var("MAILSERVER_IMAGE")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| constants::DEFAULT_MAILSERVER_IMAGE.to_string());

        let setup_command = env::var("SETUP_COMMAND")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| constants::DEFAULT_SETUP_COMMAND.to_string());

        Self {
            port,
            mailserver_image,
            setup_command,
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            port: constants::DEFAULT_PORT,
            mailserver_image: constants::DEFAULT_MAILSERVER_IMAGE.to_string(),
            setup_command: constants::DEFAULT_SETUP_COMMAND.to_string(),
        }
    }
}

/// 常量
pub mod constants {
    /// 默认监听端口
    pub const DEFAULT_PORT: u16 = 8080;

    /// docker-mailserver 官方镜像名
    pub const DEFAULT_MAILSERVER_IMAGE: &str = "mailserver/docker-mailserver";

    /// 容器内管理工具
    pub const DEFAULT_SETUP_COMMAND: &str = "setup";

    /// 版本号
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}
