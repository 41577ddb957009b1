//! Query Synthesizer - 把检索意图翻译为仓库可执行的StandardSQL
//!
//! 表引用仅由仓库项目标识参数化；列契约与转换规则全部来自schema模块。
//! 模型输出只做一次表面清洗（剥掉代码围栏），不做语义校验，
//! 语法问题交由仓库自身的错误报告暴露。

use std::sync::LazyLock;

use regex::Regex;

use crate::error::PipelineError;
use crate::pipeline::context::SessionContext;
use crate::schema;

/// 构建Synthesizer的系统prompt：完全限定表引用、列契约、转换策略
pub fn build_system_prompt(project: &str) -> String {
    format!(
        r#"You are a BigQuery SQL expert. Write a valid StandardSQL query.
Dataset: {table}

IMPORTANT: All columns are STRING. You MUST use SAFE_CAST() for any number comparison.

SCHEMA:
{schema}
STRATEGY GUIDE:
1. **'Boston'**: Use {metro} — expand other metro areas into their constituent cities the same way.
2. **Majors**: WHERE SAFE_CAST(PCIP52 AS FLOAT64) > 0.05
3. **SAT**: SAFE_CAST(SAT_AVG AS INT64) BETWEEN ([Score] - 150) AND ([Score] + 150)
4. **Community Colleges**: WHERE SAFE_CAST(ICLEVEL AS INT64) = 2. DO NOT filter by SAT.

CRITICAL RULES:
1. Use SAFE_CAST(Column AS TYPE) for numbers.
2. Filter NULLs ONLY for the metric being requested.
3. Return ONLY SQL."#,
        table = schema::qualified_table(project),
        schema = schema::render_schema_block(),
        metro = schema::render_metro_example(),
    )
}

static OPENING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```[A-Za-z0-9_-]*[ \t]*\r?\n?").unwrap());
static CLOSING_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r?\n?```\s*$").unwrap());

/// 执行前对模型输出做的唯一变换：剥掉包裹的代码围栏并去除首尾空白。
/// 对已干净的查询文本是幂等的
pub fn sanitize(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_opening = OPENING_FENCE.replace(trimmed, "");
    let without_closing = CLOSING_FENCE.replace(&without_opening, "");
    without_closing.trim().to_string()
}

/// 发起一次Synthesizer调用并清洗输出
pub async fn synthesize(context: &SessionContext, intent: &str) -> Result<String, PipelineError> {
    let system_prompt = build_system_prompt(&context.config.warehouse.project_id);
    let user_prompt = format!("Question: {}", intent);

    let raw = context
        .llm
        .complete(&system_prompt, &user_prompt)
        .await
        .map_err(PipelineError::Synthesis)?;

    Ok(sanitize(&raw))
}
