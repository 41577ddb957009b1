//! 回合编排器 - 每个用户回合走一遍的状态机
//!
//! ROUTING -> {DONE | SEARCHING -> {EXECUTING -> {COMPOSING -> DONE | EMPTY -> DONE}
//!             | FAILED -> DONE}}
//!
//! 三次模型调用与一次仓库调用严格串行，回合内不并发、不可取消。

use crate::error::PipelineError;
use crate::pipeline::agents::{composer, router, synthesizer};
use crate::pipeline::context::SessionContext;
use crate::transcript::NO_MATCHES_MESSAGE;
use crate::types::{ResultSet, Role, RoutingDecision};

/// 一个回合的终态产出
#[derive(Debug)]
pub enum TurnOutcome {
    /// 追问式回复，未触发任何仓库调用
    Chat(String),
    /// 完整的检索回合：摘要、已执行的查询与全量结果
    Answer {
        summary: String,
        query: String,
        results: ResultSet,
    },
    /// 查询成功但零行命中
    NoMatches,
}

/// 处理一个用户回合。
/// 搜索分支内的任何失败都在这里被捕获为PipelineError并结束回合；
/// 失败的回合不向历史追加助手消息，零结果的回合则会追加
pub async fn handle_turn(
    context: &SessionContext,
    input: &str,
) -> Result<TurnOutcome, PipelineError> {
    {
        let mut transcript = context.transcript.write().await;
        transcript.append(Role::User, input);
    }

    // ROUTING：每个用户回合恰好产生一个决策
    let intent = match router::route(context, input).await? {
        RoutingDecision::Chat { reply } => {
            let mut transcript = context.transcript.write().await;
            transcript.append(Role::Assistant, reply.clone());
            return Ok(TurnOutcome::Chat(reply));
        }
        RoutingDecision::Search { intent } => intent,
    };

    // SEARCHING
    println!("🔍 Searching for: {}", intent);
    let query = synthesizer::synthesize(context, &intent).await?;

    // EXECUTING
    println!("👀 Reading the results...");
    let results = context
        .warehouse
        .run_query(&query)
        .await
        .map_err(PipelineError::Execution)?;

    // EMPTY：有效终态，写入历史
    if results.is_empty() {
        let mut transcript = context.transcript.write().await;
        transcript.append(Role::Assistant, NO_MATCHES_MESSAGE);
        return Ok(TurnOutcome::NoMatches);
    }

    // COMPOSING
    println!("✨ Writing up your answer...");
    let summary = composer::compose(context, &intent, &query, &results).await?;

    {
        let mut transcript = context.transcript.write().await;
        transcript.append(Role::Assistant, summary.clone());
    }

    Ok(TurnOutcome::Answer {
        summary,
        query,
        results,
    })
}
