//! 分片查询结果接口
//!
//! 每个分片的结果集都通过 `QueryResult` 暴露，合并后的结果实现同一个接口，
//! 下游因此无需关心结果来自多少个分片。列索引从 1 开始。

use chrono::FixedOffset;
use std::io::Cursor;

use crate::core::error::{MergeError, MergeResult};
use crate::core::value::Value;

/// 只进、单遍的查询结果游标
pub trait QueryResult: std::fmt::Debug {
    /// 移动到下一行，没有更多行时返回 false
    fn next(&mut self) -> MergeResult<bool>;

    /// 列数量
    fn column_count(&self) -> MergeResult<usize>;

    /// 获取指定列的标签，索引越界时返回 `ColumnIndexOutOfRange`
    fn column_label(&self, column_index: usize) -> MergeResult<String>;

    /// 读取当前行指定列的值
    fn value(&self, column_index: usize) -> MergeResult<Value>;

    /// 按列标签读取当前行的值
    fn value_by_label(&self, column_label: &str) -> MergeResult<Value>;

    /// 带时区信息读取值
    ///
    /// 时区的解释由驱动层负责，默认原样返回 `value` 的结果
    fn calendar_value(&self, column_index: usize, _calendar: &FixedOffset) -> MergeResult<Value> {
        self.value(column_index)
    }

    fn calendar_value_by_label(
        &self,
        column_label: &str,
        _calendar: &FixedOffset,
    ) -> MergeResult<Value> {
        self.value_by_label(column_label)
    }

    /// 把列值作为字节流读取
    fn input_stream(&self, column_index: usize) -> MergeResult<Cursor<Vec<u8>>> {
        value_to_stream(self.value(column_index)?)
    }

    fn input_stream_by_label(&self, column_label: &str) -> MergeResult<Cursor<Vec<u8>>> {
        value_to_stream(self.value_by_label(column_label)?)
    }

    /// 最近一次读取是否为空
    fn was_null(&self) -> bool;
}

/// 将值转换为字节流，只接受 `Bytes` 和 `String`
pub fn value_to_stream(value: Value) -> MergeResult<Cursor<Vec<u8>>> {
    match value {
        Value::Bytes(bytes) => Ok(Cursor::new(bytes)),
        Value::String(s) => Ok(Cursor::new(s.into_bytes())),
        other => Err(MergeError::TypeMismatch {
            expected: "BYTES",
            actual: other.get_type().name(),
        }),
    }
}
