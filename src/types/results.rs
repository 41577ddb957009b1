use std::collections::HashMap;

/// 仓库返回的一行数据。所有值按仓库约定均为字符串，NULL为None
pub type ResultRow = HashMap<String, Option<String>>;

/// 一次查询的完整结果。空结果集是有效的终态而非错误
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    /// 列名，保持仓库schema中的顺序，供表格渲染使用
    pub columns: Vec<String>,
    pub rows: Vec<ResultRow>,
}

impl ResultSet {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// 按列顺序取某一行的值，缺列与NULL统一视为None
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .and_then(|v| v.as_deref())
    }
}
