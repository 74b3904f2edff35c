//! 集成测试共享工具模块
//!
//! 提供测试用的分片结果和断言辅助函数

pub mod assertions;
pub mod data_fixtures;

use sharding_merge::core::{MergeError, MergeResult, Value};
use sharding_merge::QueryResult;

/// 分片报错的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePoint {
    /// 读完若干行后 `next()` 报错
    Next { after_rows: usize },
    /// `column_count()` 报错
    ColumnCount,
    /// `column_label()` 报错
    ColumnLabel,
    /// 读到第 `row` 行第 `column` 列时报错，行号从 1 开始
    Value { row: usize, column: usize },
}

/// 在指定位置报错的分片，模拟驱动层故障
///
/// 第 n 行第 c 列的值为 `Int(n * 100 + c)`
#[derive(Debug)]
pub struct FailingQueryResult {
    labels: Vec<String>,
    row_count: usize,
    failure: FailurePoint,
    emitted: usize,
}

impl FailingQueryResult {
    pub fn new(labels: &[&str], row_count: usize, failure: FailurePoint) -> Self {
        Self {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            row_count,
            failure,
            emitted: 0,
        }
    }

    /// 读完 `rows_before_failure` 行后 `next()` 报错
    pub fn on_next(labels: &[&str], rows_before_failure: usize) -> Self {
        Self::new(
            labels,
            usize::MAX,
            FailurePoint::Next {
                after_rows: rows_before_failure,
            },
        )
    }
}

impl QueryResult for FailingQueryResult {
    fn next(&mut self) -> MergeResult<bool> {
        if self.failure == (FailurePoint::Next { after_rows: self.emitted }) {
            return Err(MergeError::source_read("shard read timed out"));
        }
        if self.emitted == self.row_count {
            return Ok(false);
        }
        self.emitted += 1;
        Ok(true)
    }

    fn column_count(&self) -> MergeResult<usize> {
        if self.failure == FailurePoint::ColumnCount {
            return Err(MergeError::source_read("shard metadata unavailable"));
        }
        Ok(self.labels.len())
    }

    fn column_label(&self, column_index: usize) -> MergeResult<String> {
        if self.failure == FailurePoint::ColumnLabel {
            return Err(MergeError::source_read("shard metadata unavailable"));
        }
        column_index
            .checked_sub(1)
            .and_then(|i| self.labels.get(i))
            .cloned()
            .ok_or(MergeError::ColumnIndexOutOfRange(column_index))
    }

    fn value(&self, column_index: usize) -> MergeResult<Value> {
        let failing_cell = FailurePoint::Value {
            row: self.emitted,
            column: column_index,
        };
        if self.failure == failing_cell {
            return Err(MergeError::source_read("shard value decode failed"));
        }
        Ok(Value::Int((self.emitted * 100 + column_index) as i64))
    }

    fn value_by_label(&self, column_label: &str) -> MergeResult<Value> {
        let index = self
            .labels
            .iter()
            .position(|l| l == column_label)
            .ok_or_else(|| MergeError::UnknownColumnLabel(column_label.to_string()))?;
        self.value(index + 1)
    }

    fn was_null(&self) -> bool {
        false
    }
}

/// 读完合并结果，返回所有行
pub fn drain_rows(result: &mut dyn QueryResult) -> Vec<Vec<Value>> {
    let column_count = result.column_count().expect("列数读取失败");
    let mut rows = Vec::new();
    while result.next().expect("游标前进失败") {
        let row = (1..=column_count)
            .map(|i| result.value(i).expect("列值读取失败"))
            .collect();
        rows.push(row);
    }
    rows
}
