use thiserror::Error;

/// Router阶段的命名错误。
/// 模型输出缺少任一前缀时不再静默传播，而是显式失败
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("router reply carried neither CHAT: nor SEARCH: prefix: {raw:?}")]
    UnrecognizedDecision { raw: String },
}

/// 管道错误分类。
/// 搜索分支内的所有失败都在编排器边界被捕获并展示给用户，
/// 不重试、不退避，也不向会话历史追加任何内容
#[derive(Debug, Error)]
pub enum PipelineError {
    /// 会话启动期的凭据或客户端构建失败，对整个会话是致命的
    #[error("connection error: {0}")]
    Connection(#[source] anyhow::Error),

    /// Router调用失败或输出不可解析
    #[error("routing failed: {0}")]
    Routing(#[from] RoutingError),

    /// Router的模型调用本身失败
    #[error("router invocation failed: {0}")]
    RouterInvocation(#[source] anyhow::Error),

    /// Synthesizer调用或清洗失败
    #[error("query synthesis failed: {0}")]
    Synthesis(#[source] anyhow::Error),

    /// 仓库执行失败（查询畸形、仓库拒绝、传输失败）
    #[error("warehouse execution failed: {0}")]
    Execution(#[source] anyhow::Error),

    /// Composer调用失败
    #[error("answer composition failed: {0}")]
    Composition(#[source] anyhow::Error),
}
