//! 列标签索引
//!
//! 根据一个代表性分片的元数据建立 标签 -> 列索引 的映射。
//! 同名列会映射到多个索引，按列索引升序排列。

use std::collections::HashMap;

use crate::core::error::{MergeError, MergeResult};
use crate::query::merge::query_result::QueryResult;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnLabelIndex {
    /// (标签, 列索引)，按列索引顺序插入
    entries: Vec<(String, usize)>,
    by_label: HashMap<String, Vec<usize>>,
}

impl ColumnLabelIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从分片结果的元数据构建索引，不会消费任何行
    pub fn from_query_result(query_result: &dyn QueryResult) -> MergeResult<Self> {
        let column_count = query_result.column_count()?;
        let mut result = Self {
            entries: Vec::with_capacity(column_count),
            by_label: HashMap::with_capacity(column_count),
        };
        for column_index in 1..=column_count {
            result.insert(query_result.column_label(column_index)?, column_index);
        }
        Ok(result)
    }

    fn insert(&mut self, label: String, column_index: usize) {
        self.by_label
            .entry(label.clone())
            .or_default()
            .push(column_index);
        self.entries.push((label, column_index));
    }

    /// 标签对应的第一个列索引
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.by_label
            .get(label)
            .and_then(|indices| indices.first().copied())
    }

    pub fn indices_of(&self, label: &str) -> &[usize] {
        self.by_label
            .get(label)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 反向查找列标签
    pub fn label_of(&self, column_index: usize) -> MergeResult<&str> {
        self.entries
            .iter()
            .find(|(_, index)| *index == column_index)
            .map(|(label, _)| label.as_str())
            .ok_or(MergeError::ColumnIndexOutOfRange(column_index))
    }

    /// 所有标签下的索引总数，同名列按物理位置分别计数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
