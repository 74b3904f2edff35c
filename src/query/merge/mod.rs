//! 分片结果去重合并
//!
//! 查询被路由到多个分片后，每个分片返回一个 `QueryResult`。
//! `DistinctQueryResult` 读完全部分片，按整行去重后再以同样的接口对外提供数据。

pub mod column_label_index;
pub mod distinct_query_result;
pub mod distinct_rows;
pub mod memory_query_result;
pub mod query_result;

pub use column_label_index::ColumnLabelIndex;
pub use distinct_query_result::DistinctQueryResult;
pub use distinct_rows::{CollectStats, DistinctRowCollector, DistinctRowSet};
pub use memory_query_result::MemoryQueryResult;
pub use query_result::{value_to_stream, QueryResult};
