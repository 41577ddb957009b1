use crate::error::RoutingError;

/// Router对单个用户回合的分类结果，每个回合恰好产生一个
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingDecision {
    /// 信息不足，继续追问
    Chat { reply: String },
    /// 信息充分，携带提炼后的检索意图
    Search { intent: String },
}

const CHAT_PREFIX: &str = "CHAT:";
const SEARCH_PREFIX: &str = "SEARCH:";

impl RoutingDecision {
    /// 在模型调用边界把自由文本解析为结构化决策。
    /// 两个前缀都不存在时返回命名错误，不做静默兜底。
    pub fn parse(raw: &str) -> Result<Self, RoutingError> {
        let trimmed = raw.trim();

        if let Some(reply) = trimmed.strip_prefix(CHAT_PREFIX) {
            return Ok(RoutingDecision::Chat {
                reply: reply.trim().to_string(),
            });
        }

        if let Some(intent) = trimmed.strip_prefix(SEARCH_PREFIX) {
            return Ok(RoutingDecision::Search {
                intent: intent.trim().to_string(),
            });
        }

        Err(RoutingError::UnrecognizedDecision {
            raw: raw.to_string(),
        })
    }
}
