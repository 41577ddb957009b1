//! 会话记录 - 进程内的只追加消息序列
//!
//! 会话历史只存在于当前会话，不做跨会话持久化。
//! 除显式的重置操作外只允许追加。

use crate::types::{Role, Turn};

/// 首次进入会话时的固定欢迎语
pub const WELCOME_GREETING: &str = "Hoot! 🦉 Welcome to the OwlScout College Search!\n\n\
I am here to help you find your perfect school. Tell me a little about yourself!\n\n\
What do you want to study, or do you have a dream city in mind?";

/// 重置会话后的固定欢迎语
pub const RESTART_GREETING: &str =
    "Hoot! 🦉 Ready for a fresh start. What are we looking for now?";

/// 查询零结果时展示给用户的警示
pub const NO_MATCHES_WARNING: &str =
    "I couldn't find any schools that match exactly. Try widening your search?";

/// 查询零结果时写入历史的消息，与展示的警示文案不同
pub const NO_MATCHES_MESSAGE: &str = "I couldn't find any schools that match exactly.";

/// 会话记录。初始即带一条助手欢迎消息
#[derive(Debug)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            turns: vec![Turn::new(Role::Assistant, WELCOME_GREETING)],
        }
    }

    /// 追加一条消息
    pub fn append(&mut self, role: Role, text: impl Into<String>) {
        self.turns.push(Turn::new(role, text));
    }

    /// 重置：丢弃全部历史，替换为单条重启欢迎语
    pub fn reset(&mut self) {
        self.turns = vec![Turn::new(Role::Assistant, RESTART_GREETING)];
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// 渲染最近n条消息为`role: text`的文本，供Router的prompt使用
    pub fn render_tail(&self, n: usize) -> String {
        let start = self.turns.len().saturating_sub(n);
        self.turns[start..]
            .iter()
            .map(|t| format!("{}: {}", t.role, t.text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// Include tests
#[cfg(test)]
mod tests;
