//! LLM Provider支持模块
//!
//! 每次调用即时构建agent：三个阶段的system prompt各不相同，
//! 没有可以跨调用复用的agent状态。

use anyhow::Result;
use rig::{
    client::CompletionClient,
    completion::Prompt,
    providers::gemini::completion::gemini_api_types::{AdditionalParameters, GenerationConfig},
};

use crate::config::{LLMConfig, LLMProvider};

/// 统一的Provider客户端枚举
#[derive(Clone)]
pub enum ProviderClient {
    OpenAI(rig::providers::openai::Client),
    OpenRouter(rig::providers::openrouter::Client),
    Anthropic(rig::providers::anthropic::Client),
    DeepSeek(rig::providers::deepseek::Client),
    Gemini(rig::providers::gemini::Client),
    Ollama(rig::providers::ollama::Client),
}

impl ProviderClient {
    /// 根据配置创建相应的provider客户端
    pub fn new(config: &LLMConfig) -> Result<Self> {
        let client = match config.provider {
            LLMProvider::OpenAI => ProviderClient::OpenAI(
                rig::providers::openai::Client::builder(&config.api_key)
                    .base_url(&config.api_base_url)
                    .build(),
            ),
            LLMProvider::OpenRouter => ProviderClient::OpenRouter(
                rig::providers::openrouter::Client::builder(&config.api_key).build(),
            ),
            LLMProvider::Anthropic => ProviderClient::Anthropic(
                rig::providers::anthropic::ClientBuilder::new(&config.api_key).build()?,
            ),
            LLMProvider::DeepSeek => ProviderClient::DeepSeek(
                rig::providers::deepseek::Client::builder(&config.api_key)
                    .base_url(&config.api_base_url)
                    .build(),
            ),
            LLMProvider::Gemini => ProviderClient::Gemini(
                rig::providers::gemini::Client::builder(&config.api_key).build()?,
            ),
            LLMProvider::Ollama => {
                ProviderClient::Ollama(rig::providers::ollama::Client::builder().build())
            }
        };
        Ok(client)
    }

    /// 构建一个无工具的单轮agent并执行prompt。
    /// 温度与max_tokens取自配置，温度默认为0
    pub async fn complete(
        &self,
        model: &str,
        system_prompt: &str,
        user_prompt: &str,
        config: &LLMConfig,
    ) -> Result<String> {
        match self {
            ProviderClient::OpenAI(client) => {
                let agent = client
                    .completion_model(model)
                    .completions_api()
                    .into_agent_builder()
                    .preamble(system_prompt)
                    .max_tokens(config.max_tokens.into())
                    .temperature(config.temperature)
                    .build();
                agent.prompt(user_prompt).await.map_err(|e| e.into())
            }
            ProviderClient::OpenRouter(client) => {
                let agent = client
                    .agent(model)
                    .preamble(system_prompt)
                    .max_tokens(config.max_tokens.into())
                    .temperature(config.temperature)
                    .build();
                agent.prompt(user_prompt).await.map_err(|e| e.into())
            }
            ProviderClient::Anthropic(client) => {
                let agent = client
                    .agent(model)
                    .preamble(system_prompt)
                    .max_tokens(config.max_tokens.into())
                    .temperature(config.temperature)
                    .build();
                agent.prompt(user_prompt).await.map_err(|e| e.into())
            }
            ProviderClient::DeepSeek(client) => {
                let agent = client
                    .agent(model)
                    .preamble(system_prompt)
                    .max_tokens(config.max_tokens.into())
                    .temperature(config.temperature)
                    .build();
                agent.prompt(user_prompt).await.map_err(|e| e.into())
            }
            ProviderClient::Gemini(client) => {
                let generation_config = GenerationConfig::default();
                let additional = AdditionalParameters::default().with_config(generation_config);
                let agent = client
                    .agent(model)
                    .preamble(system_prompt)
                    .max_tokens(config.max_tokens.into())
                    .temperature(config.temperature)
                    .additional_params(serde_json::to_value(additional)?)
                    .build();
                agent.prompt(user_prompt).await.map_err(|e| e.into())
            }
            ProviderClient::Ollama(client) => {
                let agent = client
                    .agent(model)
                    .preamble(system_prompt)
                    .max_tokens(config.max_tokens.into())
                    .temperature(config.temperature)
                    .build();
                agent.prompt(user_prompt).await.map_err(|e| e.into())
            }
        }
    }
}
