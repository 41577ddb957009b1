//! LLM访问层 - 管道通过CompletionBackend这个seam调用模型服务
//!
//! 三个阶段（Router、Synthesizer、Composer）各发起一次单轮调用，
//! 无流式、无工具，温度由配置固定为0。

use anyhow::Result;
use async_trait::async_trait;

pub mod client;

/// 单轮补全后端。测试用脚本化实现替换真实客户端
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// 发起一次system+user的单轮调用，返回模型的自由文本
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;
}
