use std::io;
use thiserror::Error;

/// 职位数据加载错误
///
/// 在加载边界被捕获并记录日志，不会继续向上传播。
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// 网络请求失败（包括浏览器环境不可用）
    #[error("网络请求失败: {0}")]
    Network(String),

    /// 服务器返回非成功状态码
    #[error("响应状态异常: {status}")]
    Status { status: u16 },

    /// JSON 文档无法解析为职位列表
    #[error("职位数据解析失败: {0}")]
    Malformed(#[from] serde_json::Error),

    /// 职位包读写或解压失败
    #[error("职位包处理失败: {0}")]
    Bundle(#[from] io::Error),

    /// 职位数据不满足构建要求
    #[error("职位数据校验失败: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, DataLoadError>;
