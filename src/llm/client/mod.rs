//! LLM客户端 - 提供统一的LLM服务接口

use anyhow::Result;
use async_trait::async_trait;
use std::future::Future;

use crate::config::LLMConfig;
use crate::llm::CompletionBackend;

mod providers;

use providers::ProviderClient;

/// LLM客户端。每个会话构建一次，之后只读复用
#[derive(Clone)]
pub struct LLMClient {
    config: LLMConfig,
    client: ProviderClient,
}

impl LLMClient {
    /// 创建新的LLM客户端
    pub fn new(config: LLMConfig) -> Result<Self> {
        let client = ProviderClient::new(&config)?;
        Ok(Self { client, config })
    }

    /// 通用重试逻辑。retry_attempts默认为1，即显式的快速失败策略
    async fn retry_with_backoff<T, F, Fut>(&self, operation: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, anyhow::Error>>,
    {
        let max_retries = self.config.retry_attempts;
        let retry_delay_ms = self.config.retry_delay_ms;
        let mut retries = 0;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(err) => {
                    retries += 1;
                    if retries >= max_retries {
                        return Err(err);
                    }
                    eprintln!(
                        "❌ Model call failed, retrying ({} / {}): {}",
                        retries, max_retries, err
                    );
                    tokio::time::sleep(std::time::Duration::from_millis(retry_delay_ms)).await;
                }
            }
        }
    }

    /// 单轮对话方法
    pub async fn prompt(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        self.retry_with_backoff(|| async {
            self.client
                .complete(&self.config.model, system_prompt, user_prompt, &self.config)
                .await
        })
        .await
    }
}

#[async_trait]
impl CompletionBackend for LLMClient {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        self.prompt(system_prompt, user_prompt).await
    }
}
