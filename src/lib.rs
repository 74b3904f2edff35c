//! Sharding merge - distinct merging of query results from multiple shards
//!
//! A query routed to several shards yields one result cursor per shard. This
//! crate drains those cursors, removes duplicate rows across all of them while
//! keeping first-seen order, and hands the rows back through the same cursor
//! interface so downstream operators do not care how many shards were read.

pub mod config;
pub mod core;
pub mod query;
pub mod utils;

pub use crate::core::{MergeError, MergeResult, Row, Value};
pub use crate::query::merge::{DistinctQueryResult, MemoryQueryResult, QueryResult};
