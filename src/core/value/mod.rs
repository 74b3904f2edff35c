//! Value 模块 - 合并层的列值类型
//!
//! - 核心类型定义 (`types.rs`)
//! - 相等性与哈希 (`comparison.rs`)

pub mod comparison;
pub mod types;

pub use types::*;
