use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

/// LLM Provider类型
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum LLMProvider {
    #[serde(rename = "openai")]
    OpenAI,
    #[serde(rename = "openrouter")]
    #[default]
    OpenRouter,
    #[serde(rename = "anthropic")]
    Anthropic,
    #[serde(rename = "deepseek")]
    DeepSeek,
    #[serde(rename = "gemini")]
    Gemini,
    #[serde(rename = "ollama")]
    Ollama,
}

impl std::fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMProvider::OpenAI => write!(f, "openai"),
            LLMProvider::OpenRouter => write!(f, "openrouter"),
            LLMProvider::Anthropic => write!(f, "anthropic"),
            LLMProvider::DeepSeek => write!(f, "deepseek"),
            LLMProvider::Gemini => write!(f, "gemini"),
            LLMProvider::Ollama => write!(f, "ollama"),
        }
    }
}

impl std::str::FromStr for LLMProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(LLMProvider::OpenAI),
            "openrouter" => Ok(LLMProvider::OpenRouter),
            "anthropic" => Ok(LLMProvider::Anthropic),
            "deepseek" => Ok(LLMProvider::DeepSeek),
            "gemini" => Ok(LLMProvider::Gemini),
            "ollama" => Ok(LLMProvider::Ollama),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// LLM模型配置
    pub llm: LLMConfig,

    /// 仓库配置
    pub warehouse: WarehouseConfig,

    /// 是否启用详细日志
    pub verbose: bool,
}

/// LLM模型配置
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LLMConfig {
    /// LLM Provider类型
    pub provider: LLMProvider,

    /// LLM API KEY
    pub api_key: String,

    /// LLM API基地址
    pub api_base_url: String,

    /// 模型名称
    pub model: String,

    /// 最大tokens
    pub max_tokens: u32,

    /// 温度。固定为0以保证三个阶段的可复现性
    pub temperature: f64,

    /// 重试次数。1表示快速失败不重试，这是默认策略
    pub retry_attempts: u32,

    /// 重试间隔（毫秒）
    pub retry_delay_ms: u64,
}

/// 仓库（表格查询服务）配置
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WarehouseConfig {
    /// 仓库项目标识
    pub project_id: String,

    /// REST API基地址
    pub api_base_url: String,

    /// Bearer访问令牌
    pub access_token: String,

    /// 超时时间（秒）
    pub timeout_seconds: u64,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm: LLMConfig::default(),
            warehouse: WarehouseConfig::default(),
            verbose: false,
        }
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: LLMProvider::default(),
            api_key: std::env::var("OWLSCOUT_LLM_API_KEY").unwrap_or_default(),
            api_base_url: String::from("https://openrouter.ai/api/v1"),
            model: String::from("anthropic/claude-3.5-sonnet"),
            max_tokens: 8192,
            temperature: 0.0,
            retry_attempts: 1,
            retry_delay_ms: 2000,
        }
    }
}

impl Default for WarehouseConfig {
    fn default() -> Self {
        Self {
            project_id: std::env::var("OWLSCOUT_WAREHOUSE_PROJECT")
                .unwrap_or_else(|_| String::from("tpzcollegesearch")),
            api_base_url: String::from("https://bigquery.googleapis.com/bigquery/v2"),
            access_token: std::env::var("OWLSCOUT_WAREHOUSE_TOKEN").unwrap_or_default(),
            timeout_seconds: 60,
        }
    }
}
