//! Router - 判定当前回合是继续追问还是发起检索
//!
//! 判定规则放在prompt里而不是代码里：累计细节少于两个必须CHAT，
//! 两个及以上、或用户明确要求看结果时必须SEARCH。

use crate::error::PipelineError;
use crate::pipeline::context::SessionContext;
use crate::types::RoutingDecision;

/// 提供给Router的滚动历史条数
pub const HISTORY_WINDOW: usize = 4;

pub const SYSTEM_PROMPT: &str = r#"You are a friendly College Mentor named 'Owl'.
Your goal is to decide if you need to SEARCH for schools or just CHAT with the student.

Concrete details are: field of study, location, budget, test score, school type.

INSTRUCTIONS:
1. **If the request is VAGUE (Only 1 detail)**: DO NOT SEARCH.
   - Example: 'I want to study Physics' -> CHAT: 'Physics is great! Do you have a specific city or state in mind?'
   - Example: 'Schools in Boston' -> CHAT: 'Boston has many schools! What do you want to study?'
2. **If the request is SPECIFIC (2+ details)**: SEARCH.
   - Example: 'Physics in Boston' -> SEARCH: Physics schools in Boston
   - Example: 'Cheap schools for nursing' -> SEARCH: Affordable nursing schools
3. **If the user explicitly asks to search**: SEARCH.
   - Example: 'Just show me the list' -> SEARCH: ...

YOUR RESPONSE must start with CHAT: or SEARCH:"#;

/// 构建用户侧prompt：滚动历史加最新输入
pub fn build_user_prompt(history: &str, input: &str) -> String {
    format!(
        "CHAT HISTORY:\n{}\n\nLATEST USER MESSAGE:\n{}\n\nYOUR RESPONSE (Start with CHAT: or SEARCH:):",
        history, input
    )
}

/// 发起一次Router调用，并在模型调用边界把自由文本解析为结构化决策。
/// 每个用户回合恰好调用一次
pub async fn route(
    context: &SessionContext,
    input: &str,
) -> Result<RoutingDecision, PipelineError> {
    let history = context.transcript.read().await.render_tail(HISTORY_WINDOW);
    let user_prompt = build_user_prompt(&history, input);

    let raw = context
        .llm
        .complete(SYSTEM_PROMPT, &user_prompt)
        .await
        .map_err(PipelineError::RouterInvocation)?;

    Ok(RoutingDecision::parse(&raw)?)
}
