//! 去重行集合与收集器
//!
//! 把所有分片的结果全部读出，按整行去重，保留首次出现的顺序。
//! 输出顺序是对外约定：先按调用方给出的分片顺序，再按分片内的行顺序，
//! 下游的 LIMIT 等操作依赖这个顺序。

use indexmap::IndexSet;
use log::{debug, trace, warn};

use crate::config::MergeConfig;
use crate::core::error::{MergeError, MergeResult};
use crate::core::row::Row;
use crate::query::merge::query_result::QueryResult;

/// 保持插入顺序的行集合
#[derive(Debug, Clone, Default)]
pub struct DistinctRowSet {
    rows: IndexSet<Row>,
}

impl DistinctRowSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, row: &Row) -> bool {
        self.rows.contains(row)
    }

    /// 插入一行，已存在相同的行时不做任何修改并返回 false
    pub fn insert(&mut self, row: Row) -> bool {
        self.rows.insert(row)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> indexmap::set::Iter<'_, Row> {
        self.rows.iter()
    }

    /// 冻结集合，按首次插入顺序返回所有行
    pub fn into_rows(self) -> Vec<Row> {
        self.rows.into_iter().collect()
    }
}

/// 收集过程统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectStats {
    pub sources: usize,
    pub rows_scanned: usize,
    pub duplicates_dropped: usize,
}

/// 去重行收集器
#[derive(Debug, Clone, Default)]
pub struct DistinctRowCollector {
    max_distinct_rows: Option<usize>,
}

impl DistinctRowCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &MergeConfig) -> Self {
        Self {
            max_distinct_rows: config.max_distinct_rows,
        }
    }

    /// 读完所有分片并去重
    ///
    /// 任一分片读取失败都会中止收集，不返回部分结果
    pub fn collect(
        &self,
        query_results: &mut [Box<dyn QueryResult>],
    ) -> MergeResult<(DistinctRowSet, CollectStats)> {
        let mut row_set = DistinctRowSet::new();
        let mut stats = CollectStats::default();

        for (source_index, query_result) in query_results.iter_mut().enumerate() {
            let scanned_before = stats.rows_scanned;
            if let Err(e) = self.drain(&mut **query_result, &mut row_set, &mut stats) {
                warn!("分片 {} 读取失败，放弃去重合并: {}", source_index, e);
                return Err(e);
            }
            stats.sources += 1;
            trace!(
                "分片 {} 读取完成: {} 行",
                source_index,
                stats.rows_scanned - scanned_before
            );
        }

        debug!(
            "去重合并完成: 分片 {}, 扫描 {} 行, 丢弃重复 {} 行, 保留 {} 行",
            stats.sources,
            stats.rows_scanned,
            stats.duplicates_dropped,
            row_set.len()
        );
        Ok((row_set, stats))
    }

    fn drain(
        &self,
        query_result: &mut dyn QueryResult,
        row_set: &mut DistinctRowSet,
        stats: &mut CollectStats,
    ) -> MergeResult<()> {
        let column_count = query_result.column_count()?;
        while query_result.next()? {
            let mut row = Row::with_capacity(column_count);
            for column_index in 1..=column_count {
                row.push(query_result.value(column_index)?);
            }
            stats.rows_scanned += 1;

            // 额度用满后只允许重复行通过
            if let Some(limit) = self.max_distinct_rows {
                if row_set.len() >= limit && !row_set.contains(&row) {
                    return Err(MergeError::MemoryLimitExceeded(format!(
                        "去重结果超过 {} 行",
                        limit
                    )));
                }
            }
            if !row_set.insert(row) {
                stats.duplicates_dropped += 1;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::value::Value;
    use crate::query::merge::memory_query_result::MemoryQueryResult;

    /// 读取若干行后失败的分片
    #[derive(Debug)]
    struct BrokenQueryResult {
        remaining: usize,
    }

    impl QueryResult for BrokenQueryResult {
        fn next(&mut self) -> MergeResult<bool> {
            if self.remaining == 0 {
                return Err(MergeError::source_read("connection reset"));
            }
            self.remaining -= 1;
            Ok(true)
        }

        fn column_count(&self) -> MergeResult<usize> {
            Ok(1)
        }

        fn column_label(&self, _column_index: usize) -> MergeResult<String> {
            Ok("id".to_string())
        }

        fn value(&self, _column_index: usize) -> MergeResult<Value> {
            Ok(Value::Int(self.remaining as i64))
        }

        fn value_by_label(&self, _column_label: &str) -> MergeResult<Value> {
            Ok(Value::Int(self.remaining as i64))
        }

        fn was_null(&self) -> bool {
            false
        }
    }

    fn int_source(values: &[i64]) -> Box<dyn QueryResult> {
        let rows = values.iter().map(|v| Row::new(vec![Value::Int(*v)])).collect();
        Box::new(MemoryQueryResult::new(vec!["id"], rows))
    }

    fn ints(row_set: &DistinctRowSet) -> Vec<i64> {
        row_set
            .iter()
            .map(|row| match row.get(1) {
                Some(Value::Int(i)) => *i,
                other => panic!("unexpected value {:?}", other),
            })
            .collect()
    }

    #[test]
    fn test_row_set_keeps_first_seen_order() {
        let mut set = DistinctRowSet::new();
        assert!(set.insert(Row::new(vec![Value::Int(3)])));
        assert!(set.insert(Row::new(vec![Value::Int(1)])));
        assert!(!set.insert(Row::new(vec![Value::Int(3)])));
        assert!(set.insert(Row::new(vec![Value::Int(2)])));
        assert_eq!(ints(&set), vec![3, 1, 2]);
    }

    #[test]
    fn test_collect_across_sources() {
        let mut sources = vec![int_source(&[1, 2, 1]), int_source(&[]), int_source(&[3, 2, 4])];
        let (row_set, stats) = DistinctRowCollector::new()
            .collect(&mut sources)
            .expect("collect should succeed");

        assert_eq!(ints(&row_set), vec![1, 2, 3, 4]);
        assert_eq!(
            stats,
            CollectStats {
                sources: 3,
                rows_scanned: 6,
                duplicates_dropped: 2,
            }
        );
    }

    #[test]
    fn test_collect_empty_sources() {
        let (row_set, stats) = DistinctRowCollector::new()
            .collect(&mut [])
            .expect("collect should succeed");
        assert!(row_set.is_empty());
        assert_eq!(stats, CollectStats::default());
    }

    #[test]
    fn test_collect_aborts_on_source_failure() {
        let mut sources: Vec<Box<dyn QueryResult>> = vec![
            int_source(&[1]),
            Box::new(BrokenQueryResult { remaining: 2 }),
            int_source(&[2]),
        ];
        let err = DistinctRowCollector::new()
            .collect(&mut sources)
            .expect_err("collect should fail");
        assert_eq!(err, MergeError::SourceRead("connection reset".to_string()));
    }

    #[test]
    fn test_collect_respects_row_budget() {
        let config = MergeConfig {
            max_distinct_rows: Some(2),
        };
        let collector = DistinctRowCollector::with_config(&config);

        // 重复行不占用额度
        let mut sources = vec![int_source(&[1, 2, 2, 1])];
        let (row_set, _) = collector.collect(&mut sources).expect("within budget");
        assert_eq!(row_set.len(), 2);

        let mut sources = vec![int_source(&[1, 2]), int_source(&[3])];
        let err = collector.collect(&mut sources).expect_err("over budget");
        assert!(matches!(err, MergeError::MemoryLimitExceeded(_)));
    }
}
