use crate::config::{Config, LLMProvider};
use clap::Parser;
use std::path::PathBuf;

/// OwlScout - AI驱动的对话式选校引擎
#[derive(Parser, Debug)]
#[command(name = "OwlScout (owlscout-rs)")]
#[command(
    about = "AI-powered conversational college search. It chats with a student, decides when a turn needs a data lookup, writes warehouse SQL from the collected intent and summarizes the matching schools in plain language."
)]
#[command(version)]
pub struct Args {
    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 仓库项目标识
    #[arg(short, long)]
    pub project_id: Option<String>,

    /// 仓库Bearer访问令牌
    #[arg(long)]
    pub warehouse_token: Option<String>,

    /// LLM Provider (openai, openrouter, anthropic, deepseek, gemini, ollama)
    #[arg(long)]
    pub llm_provider: Option<String>,

    /// LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// LLM API基地址
    #[arg(long)]
    pub llm_api_base_url: Option<String>,

    /// 模型名称
    #[arg(short, long)]
    pub model: Option<String>,

    /// 最大tokens数
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// 温度参数
    #[arg(long)]
    pub temperature: Option<f64>,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 将CLI参数转换为配置
    pub fn into_config(self) -> Config {
        let mut config = if let Some(config_path) = &self.config {
            // 如果显式指定了配置文件路径，从该路径加载
            Config::from_file(config_path)
                .unwrap_or_else(|_| panic!("⚠️ Unable to read config file {:?}", config_path))
        } else {
            // 如果没有显式指定配置文件，尝试从默认位置加载
            let default_config_path = std::env::current_dir()
                .unwrap_or_else(|_| std::path::PathBuf::from("."))
                .join("owlscout.toml");

            if default_config_path.exists() {
                Config::from_file(&default_config_path).unwrap_or_else(|_| {
                    panic!(
                        "⚠️ Unable to read default config file {:?}",
                        default_config_path
                    )
                })
            } else {
                Config::default()
            }
        };

        // 覆盖LLM配置
        if let Some(provider_str) = self.llm_provider {
            if let Ok(provider) = provider_str.parse::<LLMProvider>() {
                config.llm.provider = provider;
            } else {
                eprintln!(
                    "⚠️ Unknown provider: {}, keeping {}",
                    provider_str, config.llm.provider
                );
            }
        }
        if let Some(llm_api_base_url) = self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url;
        }
        if let Some(llm_api_key) = self.llm_api_key {
            config.llm.api_key = llm_api_key;
        }
        if let Some(model) = self.model {
            config.llm.model = model;
        }
        if let Some(max_tokens) = self.max_tokens {
            config.llm.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            config.llm.temperature = temperature;
        }

        // 覆盖仓库配置
        if let Some(project_id) = self.project_id {
            config.warehouse.project_id = project_id;
        }
        if let Some(warehouse_token) = self.warehouse_token {
            config.warehouse.access_token = warehouse_token;
        }

        // 其他配置
        config.verbose = self.verbose;

        config
    }
}

// Include tests
#[cfg(test)]
mod tests;
