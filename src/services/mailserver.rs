//! 别名/邮箱编排服务
//!
//! 组合容器定位、远程 exec、输出解析和地址校验，
//! 所有不变量（别名唯一、归属邮箱存在、地址合法）在这里做前置检查。
//! 前置检查和变更命令之间没有跨请求锁，并发窗口由远端存储自行处理

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::config::env::EnvConfig;
use crate::domain::address::is_valid_address;
use crate::domain::mailserver::{AliasEntry, ContainerRef};
use crate::infra::docker::{ContainerRuntime, RuntimeError};
use crate::services::parser::{parse_alias_list, parse_email_list};

/// 服务层错误
#[derive(Debug, Error)]
pub enum ServiceError {
    /// 没有镜像名匹配的运行中容器
    #[error("mailserver container not found")]
    ContainerNotFound,
    /// 别名已存在（当前接口契约按 500 报告）
    #[error("Alias already exists")]
    AliasAlreadyExists,
    /// 待删除的别名不存在
    #[error("alias not found")]
    AliasNotFound,
    /// 归属邮箱不在邮箱列表中
    #[error("Email does not exist")]
    OwnerNotFound,
    /// 别名地址语法非法
    #[error("Invalid alias")]
    InvalidAlias,
    /// 容器运行时错误
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// 别名/邮箱编排服务
///
/// 每个请求构造一次，持有本次请求作用域内的运行时 client
pub struct MailserverService {
    runtime: Arc<dyn ContainerRuntime>,
    image: String,
    setup: String,
}

impl MailserverService {
    pub fn new(runtime: Arc<dyn ContainerRuntime>, config: &EnvConfig) -> Self {
        Self {
            runtime,
            image: config.mailserver_image.clone(),
            setup: config.setup_command.clone(),
        }
    }

    /// 检查是否有匹配的容器在运行
    ///
    /// 和 [`Self::locate`] 不同，没有匹配不是错误，只有列出容器本身失败才报错
    pub async fn is_running(&self) -> Result<bool, ServiceError> {
        let containers = self.runtime.list_containers().await?;
        Ok(containers.iter().any(|c| c.image.contains(&self.image)))
    }

    /// 定位邮件服务器容器
    ///
    /// 取镜像名包含配置子串的第一个容器，首个匹配即胜出
    async fn locate(&self) -> Result<ContainerRef, ServiceError> {
        let containers = self.runtime.list_containers().await?;
        containers
            .into_iter()
            .find(|c| c.image.contains(&self.image))
            .ok_or(ServiceError::ContainerNotFound)
    }

    /// 列出所有邮箱地址
    pub async fn list_emails(&self) -> Result<Vec<String>, ServiceError> {
        let container = self.locate().await?;
        let output = self.run_setup(&container.id, &["email", "list"]).await?;
        Ok(parse_email_list(&output))
    }

    /// 列出所有别名
    pub async fn list_aliases(&self) -> Result<Vec<AliasEntry>, ServiceError> {
        let container = self.locate().await?;
        let output = self.run_setup(&container.id, &["alias", "list"]).await?;
        Ok(parse_alias_list(&output))
    }

    /// 创建别名
    ///
    /// 前置检查按固定顺序短路：别名唯一 -> 归属邮箱存在 -> 别名语法合法，
    /// 全部通过才下发变更命令。远端工具的退出状态不检查，
    /// 传输层成功即视为成功
    pub async fn create_alias(&self, entry: AliasEntry) -> Result<AliasEntry, ServiceError> {
        let container = self.locate().await?;

        let aliases = {
            let output = self.run_setup(&container.id, &["alias", "list"]).await?;
            parse_alias_list(&output)
        };
        if aliases.iter().any(|a| a.alias == entry.alias) {
            return Err(ServiceError::AliasAlreadyExists);
        }

        let emails = {
            let output = self.run_setup(&container.id, &["email", "list"]).await?;
            parse_email_list(&output)
        };
        if !emails.iter().any(|e| e == &entry.email) {
            return Err(ServiceError::OwnerNotFound);
        }

        if !is_valid_address(&entry.alias) {
            return Err(ServiceError::InvalidAlias);
        }

        self.run_setup(
            &container.id,
            &["alias", "add", entry.alias.as_str(), entry.email.as_str()],
        )
        .await?;

        info!(alias = %entry.alias, email = %entry.email, "Alias created");
        Ok(entry)
    }

    /// 删除别名
    ///
    /// 先在当前列表中找到条目，删除命令需要别名和归属邮箱两个参数
    pub async fn delete_alias(&self, alias: &str) -> Result<(), ServiceError> {
        let container = self.locate().await?;

        let aliases = {
            let output = self.run_setup(&container.id, &["alias", "list"]).await?;
            parse_alias_list(&output)
        };
        let existing = aliases
            .into_iter()
            .find(|a| a.alias == alias)
            .ok_or(ServiceError::AliasNotFound)?;

        self.run_setup(
            &container.id,
            &["alias", "del", existing.alias.as_str(), existing.email.as_str()],
        )
        .await?;

        info!(alias = %existing.alias, "Alias deleted");
        Ok(())
    }

    /// 在容器内执行 setup 子命令并解码输出
    async fn run_setup(&self, container_id: &str, args: &[&str]) -> Result<String, ServiceError> {
        let mut argv = vec![self.setup.clone()];
        argv.extend(args.iter().map(|s| s.to_string()));

        debug!(container = %container_id, ?argv, "Running setup command");
        let bytes = self.runtime.exec_capture(container_id, &argv).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
