//! 合并层统一错误处理
//!
//! 所有错误都直接返回给调用方，合并层内部不做重试。
//! 数据源读取失败会中止整个合并过程，不会暴露部分结果。

use thiserror::Error;

pub mod codes;

pub use codes::{ErrorCode, PublicError, ToPublicError};

use crate::core::cursor_state::CursorState;

/// 合并层错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MergeError {
    #[error("数据源读取失败: {0}")]
    SourceRead(String),

    #[error("Column index out of range: {0}")]
    ColumnIndexOutOfRange(usize),

    #[error("未知列标签: {0}")]
    UnknownColumnLabel(String),

    #[error("游标未定位到有效行: {0}")]
    InvalidCursorState(CursorState),

    #[error("类型不匹配: 期望 {expected}, 实际 {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("内存限制超出: {0}")]
    MemoryLimitExceeded(String),

    #[error("配置错误: {0}")]
    Config(String),
}

/// 统一的结果类型
pub type MergeResult<T> = Result<T, MergeError>;

impl MergeError {
    /// 包装外部数据源的错误
    pub fn source_read<E: std::fmt::Display>(e: E) -> Self {
        MergeError::SourceRead(e.to_string())
    }
}

impl ToPublicError for MergeError {
    fn to_public_error(&self) -> PublicError {
        PublicError::new(self.to_error_code(), self.to_public_message())
    }

    fn to_error_code(&self) -> ErrorCode {
        match self {
            MergeError::SourceRead(_) => ErrorCode::SourceReadFailure,
            MergeError::ColumnIndexOutOfRange(_) => ErrorCode::ColumnIndexOutOfRange,
            MergeError::UnknownColumnLabel(_) => ErrorCode::UnknownColumn,
            MergeError::InvalidCursorState(_) => ErrorCode::InvalidCursorState,
            MergeError::TypeMismatch { .. } => ErrorCode::TypeError,
            MergeError::MemoryLimitExceeded(_) => ErrorCode::ResourceExhausted,
            MergeError::Config(_) => ErrorCode::ConfigError,
        }
    }

    fn to_public_message(&self) -> String {
        match self {
            // 数据源和配置错误可能带有连接串、路径等内部细节
            MergeError::SourceRead(_) => ErrorCode::SourceReadFailure.default_message().to_string(),
            MergeError::Config(_) => ErrorCode::ConfigError.default_message().to_string(),
            _ => self.to_string(),
        }
    }
}

// ==================== 外部错误转换实现 ====================

impl From<std::io::Error> for MergeError {
    fn from(err: std::io::Error) -> Self {
        MergeError::Config(err.to_string())
    }
}

impl From<toml::de::Error> for MergeError {
    fn from(err: toml::de::Error) -> Self {
        MergeError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for MergeError {
    fn from(err: toml::ser::Error) -> Self {
        MergeError::Config(err.to_string())
    }
}
