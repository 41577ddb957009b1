//! Answer Composer - 把查询结果总结为面向高中生的自然语言
//!
//! 行序列化有显式预算：行数与字节双上限，超出部分不进入prompt，
//! 截断事实写在prompt里。完整结果仍由展示层以表格渲染。

use crate::error::PipelineError;
use crate::pipeline::context::SessionContext;
use crate::types::ResultSet;

/// 进入Composer prompt的最大行数
pub const MAX_PROMPT_ROWS: usize = 40;

/// 进入Composer prompt的行序列化最大字节数
pub const MAX_PROMPT_BYTES: usize = 24 * 1024;

pub const SYSTEM_PROMPT: &str =
    "You are a friendly College Mentor named 'Owl'. Summarize the data clearly for a high school student.";

/// 按列顺序把结果行序列化为文本，应用行数与字节预算。
/// 发生截断时在开头注明实际包含的行数
pub fn serialize_rows(results: &ResultSet) -> String {
    let mut body = String::new();
    let mut included = 0;

    for row in &results.rows {
        if included >= MAX_PROMPT_ROWS {
            break;
        }
        let line = results
            .columns
            .iter()
            .map(|column| {
                let value = row.get(column).and_then(|v| v.as_deref()).unwrap_or("NULL");
                format!("{}: {}", column, value)
            })
            .collect::<Vec<_>>()
            .join(" | ");
        if body.len() + line.len() + 1 > MAX_PROMPT_BYTES {
            break;
        }
        body.push_str(&line);
        body.push('\n');
        included += 1;
    }

    if included < results.len() {
        format!(
            "(showing the first {} of {} rows)\n{}",
            included,
            results.len(),
            body
        )
    } else {
        body
    }
}

/// 构建用户侧prompt：原始意图、已执行的查询、序列化的结果行
pub fn build_user_prompt(intent: &str, query: &str, results: &ResultSet) -> String {
    format!(
        "Question: {}\nSQL Query: {}\nData Results:\n{}",
        intent,
        query,
        serialize_rows(results)
    )
}

/// 发起一次Composer调用。编排器保证结果集非空
pub async fn compose(
    context: &SessionContext,
    intent: &str,
    query: &str,
    results: &ResultSet,
) -> Result<String, PipelineError> {
    debug_assert!(!results.is_empty());

    let user_prompt = build_user_prompt(intent, query, results);

    context
        .llm
        .complete(SYSTEM_PROMPT, &user_prompt)
        .await
        .map_err(PipelineError::Composition)
}
