//! 测试数据生成模块

use sharding_merge::core::{Row, Value};
use sharding_merge::{MemoryQueryResult, QueryResult};

/// 创建 (name, age) 行
pub fn person_row(name: &str, age: i64) -> Vec<Value> {
    vec![Value::String(name.to_string()), Value::Int(age)]
}

/// 创建只含 (name, age) 两列的分片结果
pub fn person_shard(rows: Vec<Vec<Value>>) -> Box<dyn QueryResult> {
    shard(&["name", "age"], rows)
}

/// 创建任意列的分片结果
pub fn shard(labels: &[&str], rows: Vec<Vec<Value>>) -> Box<dyn QueryResult> {
    Box::new(MemoryQueryResult::new(
        labels.to_vec(),
        rows.into_iter().map(Row::new).collect(),
    ))
}

/// 创建单列整数分片
pub fn int_shard(values: &[i64]) -> Box<dyn QueryResult> {
    shard(
        &["id"],
        values.iter().map(|v| vec![Value::Int(*v)]).collect(),
    )
}
