//! 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，支持错误链式传播。

use std::io;
use thiserror::Error;

/// todos 错误类型
#[derive(Debug, Error)]
pub enum TodoError {
    /// 网络不可达、连接被拒、超时等
    #[error("Transport error: {0}")]
    Transport(String),

    /// 服务端返回 4xx/5xx
    #[error("HTTP {code}: {body}")]
    Status { code: u16, body: String },

    /// 响应体不是预期的 JSON 结构
    #[error("Malformed response body: {0}")]
    MalformedBody(String),

    /// I/O 错误（配置文件、日志文件等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML 序列化错误
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON 解析错误
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),
}

/// todos Result 类型别名
pub type Result<T> = std::result::Result<T, TodoError>;

impl TodoError {
    /// 创建 Transport 错误
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// 创建 MalformedBody 错误
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedBody(msg.into())
    }

    /// 创建 Config 错误
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// HTTP 状态码（仅 Status 变体）
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}
