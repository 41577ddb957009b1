use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    config::Config,
    error::PipelineError,
    llm::{CompletionBackend, client::LLMClient},
    transcript::Transcript,
    warehouse::{BigQueryWarehouse, Warehouse},
};

/// 会话上下文。两个客户端句柄与会话记录都在这里，
/// 每个会话构建一次，管道各阶段只读复用，没有进程级单例
#[derive(Clone)]
pub struct SessionContext {
    /// LLM调用器，用于与模型服务通信
    pub llm: Arc<dyn CompletionBackend>,
    /// 仓库调用器，用于执行合成的查询
    pub warehouse: Arc<dyn Warehouse>,
    /// 配置
    pub config: Config,
    /// 会话记录，只追加
    pub transcript: Arc<RwLock<Transcript>>,
}

impl SessionContext {
    /// 创建新的会话上下文。凭据或客户端构建失败对会话是致命的
    pub fn new(config: Config) -> Result<Self, PipelineError> {
        let llm = LLMClient::new(config.llm.clone()).map_err(PipelineError::Connection)?;
        let warehouse =
            BigQueryWarehouse::new(config.warehouse.clone()).map_err(PipelineError::Connection)?;

        Ok(Self {
            llm: Arc::new(llm),
            warehouse: Arc::new(warehouse),
            config,
            transcript: Arc::new(RwLock::new(Transcript::new())),
        })
    }

    /// 用外部提供的后端组装上下文，测试经由这里注入脚本化实现
    pub fn with_backends(
        config: Config,
        llm: Arc<dyn CompletionBackend>,
        warehouse: Arc<dyn Warehouse>,
    ) -> Self {
        Self {
            llm,
            warehouse,
            config,
            transcript: Arc::new(RwLock::new(Transcript::new())),
        }
    }

    /// 启动时检查模型连接
    pub async fn check_connection(&self) -> Result<(), PipelineError> {
        println!("🔄 Checking model connection...");
        match self
            .llm
            .complete("System: You are a helpful assistant.", "Hello")
            .await
        {
            Ok(_) => {
                println!("✅ Model connection OK");
                Ok(())
            }
            Err(e) => {
                eprintln!("❌ Model connection failed: {}", e);
                Err(PipelineError::Connection(e))
            }
        }
    }
}
