//! 对外错误码定义
//!
//! 合并层错误对外暴露时使用的标准化错误码。
//!
//! 错误码格式: XXYY
//! - XX: 错误类别 (02=执行, 03=验证, 09=系统)
//! - YY: 具体错误

use serde::{Deserialize, Serialize};

/// 对外错误码 - 用于向查询引擎上层报告合并失败
///
/// 错误码一旦定义不应随意修改，保证调用方兼容性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // ==================== 执行错误 (02xx) ====================
    /// 资源不足
    ResourceExhausted = 202,
    /// 分片数据源读取失败
    SourceReadFailure = 205,
    /// 游标状态无效
    InvalidCursorState = 206,

    // ==================== 验证错误 (03xx) ====================
    /// 类型错误
    TypeError = 301,
    /// 列索引越界
    ColumnIndexOutOfRange = 304,
    /// 未知列标签
    UnknownColumn = 305,

    // ==================== 系统错误 (09xx) ====================
    /// 配置错误
    ConfigError = 902,
}

impl ErrorCode {
    /// 获取错误码的 i32 值
    pub fn as_i32(&self) -> i32 {
        *self as i32
    }

    /// 获取默认的错误消息
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::ResourceExhausted => "资源不足",
            ErrorCode::SourceReadFailure => "数据源读取失败",
            ErrorCode::InvalidCursorState => "游标状态无效",
            ErrorCode::TypeError => "类型错误",
            ErrorCode::ColumnIndexOutOfRange => "列索引越界",
            ErrorCode::UnknownColumn => "未知列",
            ErrorCode::ConfigError => "配置错误",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.as_i32(), self.default_message())
    }
}

/// 对外错误信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicError {
    pub code: ErrorCode,
    pub message: String,
}

impl PublicError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// 内部错误到对外错误的转换 trait
pub trait ToPublicError {
    /// 转换为对外错误
    fn to_public_error(&self) -> PublicError;

    /// 获取对外错误码
    fn to_error_code(&self) -> ErrorCode;

    /// 获取对外错误消息（过滤内部细节）
    fn to_public_message(&self) -> String;
}
