//! DistinctQueryResult - 去重合并结果
//!
//! 构造时把所有分片结果读完并整行去重，之后作为普通的只进游标对外提供数据。
//! 列标签映射取自第一个分片的元数据，不对其他分片重新校验。

use std::collections::HashSet;
use std::sync::Arc;

use log::debug;

use crate::config::MergeConfig;
use crate::core::cursor_state::CursorState;
use crate::core::error::{MergeError, MergeResult};
use crate::core::row::Row;
use crate::core::value::Value;
use crate::query::merge::column_label_index::ColumnLabelIndex;
use crate::query::merge::distinct_rows::{CollectStats, DistinctRowCollector};
use crate::query::merge::query_result::QueryResult;

#[derive(Debug, Clone)]
pub struct DistinctQueryResult {
    column_label_index: Arc<ColumnLabelIndex>,
    rows: Vec<Row>,
    /// 已经返回过的行数，当前行为 rows[position - 1]
    position: usize,
    state: CursorState,
    stats: CollectStats,
}

impl DistinctQueryResult {
    /// 使用默认配置合并分片结果
    pub fn new(query_results: &mut [Box<dyn QueryResult>]) -> MergeResult<Self> {
        Self::with_config(query_results, &MergeConfig::default())
    }

    pub fn with_config(
        query_results: &mut [Box<dyn QueryResult>],
        config: &MergeConfig,
    ) -> MergeResult<Self> {
        let column_label_index = match query_results.first() {
            Some(first) => ColumnLabelIndex::from_query_result(&**first)?,
            None => ColumnLabelIndex::new(),
        };
        let (row_set, stats) = DistinctRowCollector::with_config(config).collect(query_results)?;
        debug!(
            "DistinctQueryResult 构建完成: {} 列, {} 行",
            column_label_index.len(),
            row_set.len()
        );
        Ok(Self {
            column_label_index: Arc::new(column_label_index),
            rows: row_set.into_rows(),
            position: 0,
            state: CursorState::BeforeFirst,
            stats,
        })
    }

    fn from_parts(column_label_index: Arc<ColumnLabelIndex>, rows: Vec<Row>) -> Self {
        Self {
            column_label_index,
            rows,
            position: 0,
            state: CursorState::BeforeFirst,
            stats: CollectStats::default(),
        }
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    pub fn stats(&self) -> CollectStats {
        self.stats
    }

    /// 去重后的总行数，与游标位置无关
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 标签对应的第一个列索引
    pub fn column_index(&self, column_label: &str) -> MergeResult<usize> {
        self.column_label_index
            .index_of(column_label)
            .ok_or_else(|| MergeError::UnknownColumnLabel(column_label.to_string()))
    }

    fn current_row(&self) -> MergeResult<&Row> {
        if !self.state.is_positioned() {
            return Err(MergeError::InvalidCursorState(self.state));
        }
        Ok(&self.rows[self.position - 1])
    }

    /// 把尚未读取的行拆成单行结果，每个结果共享同一份列标签映射
    ///
    /// 聚合去重合并需要为每个不同的元组单独持有一个游标
    pub fn divide(self) -> Vec<DistinctQueryResult> {
        let column_label_index = self.column_label_index;
        self.rows
            .into_iter()
            .skip(self.position)
            .map(|row| Self::from_parts(Arc::clone(&column_label_index), vec![row]))
            .collect()
    }

    /// 某一列在全部去重行中的不同取值，按首次出现顺序
    pub fn column_distinct_values(&self, column_index: usize) -> MergeResult<Vec<Value>> {
        if column_index == 0 || column_index > self.column_label_index.len() {
            return Err(MergeError::ColumnIndexOutOfRange(column_index));
        }
        let mut seen = HashSet::new();
        let mut result = Vec::new();
        for value in self.rows.iter().filter_map(|row| row.get(column_index)) {
            if seen.insert(value) {
                result.push(value.clone());
            }
        }
        Ok(result)
    }
}

impl QueryResult for DistinctQueryResult {
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
        Ok(self.column_label_index.len())
    }

    fn column_label(&self, column_index: usize) -> MergeResult<String> {
        self.column_label_index
            .label_of(column_index)
            .map(str::to_string)
    }

    fn value(&self, column_index: usize) -> MergeResult<Value> {
        self.current_row()?
            .get(column_index)
            .cloned()
            .ok_or(MergeError::ColumnIndexOutOfRange(column_index))
    }

    fn value_by_label(&self, column_label: &str) -> MergeResult<Value> {
        let row = self.current_row()?;
        let column_index = self.column_index(column_label)?;
        row.get(column_index)
            .cloned()
            .ok_or(MergeError::ColumnIndexOutOfRange(column_index))
    }

    /// 合并结果只报告是否没有当前行，不跟踪单个列值是否为 NULL，
    /// 需要判断列值时使用 `Value::is_null`
    fn was_null(&self) -> bool {
        !self.state.is_positioned()
    }
}
