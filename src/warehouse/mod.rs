//! 仓库访问层 - 对BigQuery REST接口的单次查询封装
//!
//! 合成的查询文本原样提交，一次往返取回全部行；
//! 所有值按接口约定以字符串到达，语义转换在查询文本层完成。

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde::Deserialize;

use crate::config::WarehouseConfig;
use crate::types::{ResultRow, ResultSet};

/// 表格查询服务的seam。测试用预置结果的实现替换
#[async_trait]
pub trait Warehouse: Send + Sync {
    /// 执行一条查询并返回全部行。零行是有效结果而非错误
    async fn run_query(&self, sql: &str) -> Result<ResultSet>;
}

/// BigQuery REST实现，每个会话构建一次
pub struct BigQueryWarehouse {
    config: WarehouseConfig,
    http: reqwest::Client,
}

impl BigQueryWarehouse {
    pub fn new(config: WarehouseConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to build warehouse HTTP client")?;
        Ok(Self { config, http })
    }

    fn queries_endpoint(&self) -> String {
        format!(
            "{}/projects/{}/queries",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.project_id
        )
    }
}

#[async_trait]
impl Warehouse for BigQueryWarehouse {
    async fn run_query(&self, sql: &str) -> Result<ResultSet> {
        if self.config.access_token.is_empty() {
            bail!("warehouse access token is not configured (set OWLSCOUT_WAREHOUSE_TOKEN)");
        }

        let request = serde_json::json!({
            "query": sql,
            "useLegacySql": false,
        });

        let response = self
            .http
            .post(self.queries_endpoint())
            .bearer_auth(&self.config.access_token)
            .json(&request)
            .send()
            .await
            .context("warehouse request failed")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("failed to read warehouse response body")?;

        if !status.is_success() {
            bail!("warehouse rejected the query ({}): {}", status, api_error_message(&body));
        }

        parse_query_response(&body)
    }
}

// --- REST响应的wire类型 ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QueryResponse {
    #[serde(default)]
    job_complete: bool,
    schema: Option<TableSchema>,
    #[serde(default)]
    rows: Vec<WireRow>,
    #[serde(default)]
    errors: Vec<WireError>,
}

#[derive(Debug, Deserialize)]
struct TableSchema {
    #[serde(default)]
    fields: Vec<FieldSchema>,
}

#[derive(Debug, Deserialize)]
struct FieldSchema {
    name: String,
}

#[derive(Debug, Deserialize)]
struct WireRow {
    #[serde(default)]
    f: Vec<WireCell>,
}

#[derive(Debug, Deserialize)]
struct WireCell {
    #[serde(default)]
    v: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct WireError {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// 从失败响应体中提取可读的错误信息，解析失败时退回原文
fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => body.to_string(),
    }
}

/// 把成功响应体解析为ResultSet。
/// 单次往返内未完成的作业视为错误（不做轮询）
fn parse_query_response(body: &str) -> Result<ResultSet> {
    let response: QueryResponse =
        serde_json::from_str(body).context("failed to parse warehouse response")?;

    if !response.errors.is_empty() {
        let detail: Vec<String> = response.errors.into_iter().map(|e| e.message).collect();
        bail!("warehouse reported errors: {}", detail.join("; "));
    }

    if !response.job_complete {
        bail!("warehouse query did not complete within a single round-trip");
    }

    let columns: Vec<String> = response
        .schema
        .map(|s| s.fields.into_iter().map(|f| f.name).collect())
        .unwrap_or_default();

    let mut set = ResultSet::new(columns);
    for wire_row in response.rows {
        let mut row = ResultRow::new();
        for (cell, column) in wire_row.f.into_iter().zip(set.columns.iter()) {
            let value = match cell.v {
                serde_json::Value::String(s) => Some(s),
                serde_json::Value::Null => None,
                other => Some(other.to_string()),
            };
            row.insert(column.clone(), value);
        }
        set.rows.push(row);
    }

    Ok(set)
}
