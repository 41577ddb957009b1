//! 仓库表的固定schema契约 - Synthesizer必须遵守的常量描述
//!
//! 仓库中所有列的存储类型都是STRING，数值比较必须经过显式的
//! SAFE_CAST转换，这里记录每列的语义类型与转换目标。

/// 列的语义类型。存储类型恒为STRING
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticType {
    /// 小数指标，SAFE_CAST AS FLOAT64
    Float,
    /// 整数指标，SAFE_CAST AS INT64
    Int,
    /// 文档化整数编码的类别列，SAFE_CAST AS INT64
    Category,
    /// 纯文本列，不做转换
    Text,
}

impl SemanticType {
    /// 数值比较时的转换目标类型
    pub fn cast_target(&self) -> Option<&'static str> {
        match self {
            SemanticType::Float => Some("FLOAT64"),
            SemanticType::Int | SemanticType::Category => Some("INT64"),
            SemanticType::Text => None,
        }
    }
}

/// 单列描述
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub semantic: SemanticType,
    pub description: &'static str,
}

/// 固定的列契约，进程级常量
pub const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec {
        name: "INSTNM",
        semantic: SemanticType::Text,
        description: "Institution name",
    },
    ColumnSpec {
        name: "CITY",
        semantic: SemanticType::Text,
        description: "City",
    },
    ColumnSpec {
        name: "STABBR",
        semantic: SemanticType::Text,
        description: "State abbreviation",
    },
    ColumnSpec {
        name: "ADM_RATE",
        semantic: SemanticType::Float,
        description: "Admission rate",
    },
    ColumnSpec {
        name: "SAT_AVG",
        semantic: SemanticType::Int,
        description: "Average SAT score",
    },
    ColumnSpec {
        name: "C150_4",
        semantic: SemanticType::Float,
        description: "Graduation rate",
    },
    ColumnSpec {
        name: "TUITIONFEE_IN",
        semantic: SemanticType::Float,
        description: "In-state tuition",
    },
    ColumnSpec {
        name: "TUITIONFEE_OUT",
        semantic: SemanticType::Float,
        description: "Out-of-state tuition",
    },
    ColumnSpec {
        name: "UGDS",
        semantic: SemanticType::Int,
        description: "Undergraduate enrollment size",
    },
    ColumnSpec {
        name: "UGDS_WHITE",
        semantic: SemanticType::Float,
        description: "Share of white students",
    },
    ColumnSpec {
        name: "UGDS_BLACK",
        semantic: SemanticType::Float,
        description: "Share of black students",
    },
    ColumnSpec {
        name: "UGDS_HISP",
        semantic: SemanticType::Float,
        description: "Share of hispanic students",
    },
    ColumnSpec {
        name: "UGDS_ASIAN",
        semantic: SemanticType::Float,
        description: "Share of asian students",
    },
    ColumnSpec {
        name: "CONTROL",
        semantic: SemanticType::Category,
        description: "School control: 1=Public, 2=Private",
    },
    ColumnSpec {
        name: "ICLEVEL",
        semantic: SemanticType::Category,
        description: "Institution level: 1=4-year, 2=2-year",
    },
    ColumnSpec {
        name: "MD_EARN_WNE_P10",
        semantic: SemanticType::Float,
        description: "Median earnings 10 years after entry",
    },
    ColumnSpec {
        name: "PCIP11",
        semantic: SemanticType::Float,
        description: "Share of Computer Science degrees (0.15 = 15%)",
    },
    ColumnSpec {
        name: "PCIP52",
        semantic: SemanticType::Float,
        description: "Share of Business degrees (0.15 = 15%)",
    },
    ColumnSpec {
        name: "PCIP51",
        semantic: SemanticType::Float,
        description: "Share of Health/Nursing degrees (0.15 = 15%)",
    },
];

/// Boston都会区的城市展开列表。
/// Synthesizer的prompt把它作为别名规则的硬编码示例，模型对其他都会区做同样的泛化
pub const BOSTON_METRO_CITIES: &[&str] = &[
    "Boston",
    "Cambridge",
    "Chestnut Hill",
    "Medford",
    "Waltham",
    "Newton",
    "Brookline",
    "Quincy",
    "Somerville",
];

/// 仓库内固定的数据集与表名
pub const DATASET: &str = "most_recent_cohorts_institution";
pub const TABLE: &str = "collegedata";

/// 完全限定的表引用，仅由仓库项目标识参数化
pub fn qualified_table(project: &str) -> String {
    format!("`{}.{}.{}`", project, DATASET, TABLE)
}

/// 按名称查找列
pub fn column(name: &str) -> Option<&'static ColumnSpec> {
    COLUMNS.iter().find(|c| c.name == name)
}

/// 需要SAFE_CAST的数值列（含类别编码列）
pub fn numeric_columns() -> impl Iterator<Item = &'static ColumnSpec> {
    COLUMNS.iter().filter(|c| c.semantic.cast_target().is_some())
}

/// 渲染Synthesizer prompt中的schema区块，每列一行，
/// 数值列标注其SAFE_CAST目标类型
pub fn render_schema_block() -> String {
    let mut block = String::new();
    for col in COLUMNS {
        match col.semantic.cast_target() {
            Some(target) => block.push_str(&format!(
                "- {} ({}; STRING -> SAFE_CAST AS {})\n",
                col.name, col.description, target
            )),
            None => block.push_str(&format!("- {} ({})\n", col.name, col.description)),
        }
    }
    block
}

/// 渲染Boston都会区展开示例
pub fn render_metro_example() -> String {
    let cities: Vec<String> = BOSTON_METRO_CITIES
        .iter()
        .map(|c| format!("'{}'", c))
        .collect();
    format!("CITY IN ({})", cities.join(", "))
}

// Include tests
#[cfg(test)]
mod tests;
