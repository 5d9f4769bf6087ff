//! Docker 运行时封装
//!
//! `ContainerRuntime` 抽象容器运行时的最小能力集（列出容器、exec 捕获输出），
//! 生产实现走 bollard，测试用 double 替换

use async_trait::async_trait;
use bollard::container::ListContainersOptions;
use bollard::exec::{CreateExecOptions, StartExecResults};
use bollard::Docker;
use futures_util::StreamExt;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::domain::mailserver::ContainerRef;

/// 容器运行时错误
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// 运行时不可达（socket 连接失败、列出容器失败）
    #[error("container runtime unavailable: {0}")]
    Unavailable(String),
    /// 创建 exec 上下文失败（例如容器在 locate 和 exec 之间消失）
    #[error("failed to create exec: {0}")]
    ExecCreate(String),
    /// attach exec 失败
    #[error("failed to attach exec: {0}")]
    ExecAttach(String),
    /// 读取输出流中断
    #[error("failed to read exec output: {0}")]
    StreamRead(String),
}

/// 容器运行时最小能力集
#[async_trait]
pub trait ContainerRuntime: Send + Sync {
    /// 列出当前运行中的容器
    async fn list_containers(&self) -> Result<Vec<ContainerRef>, RuntimeError>;

    /// 在指定容器内执行命令，返回合并的 stdout/stderr 字节流
    ///
    /// 不设超时，由调用方决定截止策略
    async fn exec_capture(&self, container_id: &str, argv: &[String])
        -> Result<Vec<u8>, RuntimeError>;
}

/// 运行时获取器
///
/// 每个请求获取一个新的 client，请求结束即释放，不跨请求共享
pub trait RuntimeFactory: Send + Sync {
    fn acquire(&self) -> Result<Arc<dyn ContainerRuntime>, RuntimeError>;
}

/// bollard 实现
pub struct DockerRuntime {
    client: Docker,
}

impl DockerRuntime {
    /// 按环境默认方式连接本地 Docker daemon
    pub fn connect() -> Result<Self, RuntimeError> {
        let client = Docker::connect_with_local_defaults()
            .map_err(|e| RuntimeError::Unavailable(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ContainerRuntime for DockerRuntime {
    async fn list_containers(&self) -> Result<Vec<ContainerRef>, RuntimeError> {
        let containers = self
            .client
            .list_containers(Some(ListContainersOptions::<String>::default()))
            .await
            .map_err(|e| RuntimeError::Unavailable(e.to_string()))?;

        Ok(containers
            .into_iter()
            .map(|c| ContainerRef {
                id: c.id.unwrap_or_default(),
                image: c.image.unwrap_or_default(),
            })
            .collect())
    }

    async fn exec_capture(
        &self,
        container_id: &str,
        argv: &[String],
    ) -> Result<Vec<u8>, RuntimeError> {
        debug!(container = %container_id, ?argv, "Creating exec");

        let exec = self
            .client
            .create_exec(
                container_id,
                CreateExecOptions {
                    cmd: Some(argv.to_vec()),
                    attach_stdout: Some(true),
                    attach_stderr: Some(true),
                    ..Default::default()
                },
            )
            .await
            .map_err(|e| RuntimeError::ExecCreate(e.to_string()))?;

        let results = self
            .client
            .start_exec(&exec.id, None)
            .await
            .map_err(|e| RuntimeError::ExecAttach(e.to_string()))?;

        match results {
            StartExecResults::Attached { mut output, .. } => {
                let mut buf = Vec::new();
                while let Some(chunk) = output.next().await {
                    let chunk = chunk.map_err(|e| RuntimeError::StreamRead(e.to_string()))?;
                    buf.extend_from_slice(&chunk.into_bytes());
                }
                Ok(buf)
            }
            StartExecResults::Detached => Ok(Vec::new()),
        }
    }
}

/// 每请求新建 bollard client 的 factory
#[derive(Default)]
pub struct DockerFactory;

impl RuntimeFactory for DockerFactory {
    fn acquire(&self) -> Result<Arc<dyn ContainerRuntime>, RuntimeError> {
        Ok(Arc::new(DockerRuntime::connect()?))
    }
}
