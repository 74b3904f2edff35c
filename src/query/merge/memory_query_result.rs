//! 内存查询结果
//!
//! 持有已物化行的分片结果，适用于调用方已经拿到全部行的场景。

use std::cell::Cell;

use crate::core::cursor_state::CursorState;
use crate::core::error::{MergeError, MergeResult};
use crate::core::row::Row;
use crate::core::value::Value;
use crate::query::merge::query_result::QueryResult;

#[derive(Debug, Clone)]
pub struct MemoryQueryResult {
    column_labels: Vec<String>,
    rows: Vec<Row>,
    /// 已经返回过的行数，当前行为 rows[position - 1]
    position: usize,
    state: CursorState,
    last_read_null: Cell<bool>,
}

impl MemoryQueryResult {
    pub fn new<L: Into<String>>(column_labels: Vec<L>, rows: Vec<Row>) -> Self {
        Self {
            column_labels: column_labels.into_iter().map(Into::into).collect(),
            rows,
            position: 0,
            state: CursorState::BeforeFirst,
            last_read_null: Cell::new(false),
        }
    }

    /// 追加一行，只能在开始迭代前调用
    pub fn with_row<R: Into<Row>>(mut self, row: R) -> Self {
        self.rows.push(row.into());
        self
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    fn current_row(&self) -> MergeResult<&Row> {
        if !self.state.is_positioned() {
            return Err(MergeError::InvalidCursorState(self.state));
        }
        Ok(&self.rows[self.position - 1])
    }
}

impl QueryResult for MemoryQueryResult {
    fn next(&mut self) -> MergeResult<bool> {
        if self.state == CursorState::Exhausted {
            return Ok(false);
        }
        if self.position < self.rows.len() {
            self.position += 1;
            self.state = CursorState::Positioned;
            Ok(true)
        } else {
            self.state = CursorState::Exhausted;
            Ok(false)
        }
    }

    fn column_count(&self) -> MergeResult<usize> {
        Ok(self.column_labels.len())
    }

    fn column_label(&self, column_index: usize) -> MergeResult<String> {
        column_index
            .checked_sub(1)
            .and_then(|i| self.column_labels.get(i))
            .cloned()
            .ok_or(MergeError::ColumnIndexOutOfRange(column_index))
    }

    fn value(&self, column_index: usize) -> MergeResult<Value> {
        let value = self
            .current_row()?
            .get(column_index)
            .cloned()
            .ok_or(MergeError::ColumnIndexOutOfRange(column_index))?;
        self.last_read_null.set(value.is_null());
        Ok(value)
    }

    fn value_by_label(&self, column_label: &str) -> MergeResult<Value> {
        let column_index = self
            .column_labels
            .iter()
            .position(|label| label == column_label)
            .ok_or_else(|| MergeError::UnknownColumnLabel(column_label.to_string()))?;
        self.value(column_index + 1)
    }

    /// 与 JDBC 语义一致：最近一次读取的列值是否为 NULL
    fn was_null(&self) -> bool {
        self.last_read_null.get()
    }
}
