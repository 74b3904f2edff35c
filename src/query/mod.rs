// Query module for the sharding merge layer
//
// Results of a query fanned out to several shards are combined here
// before being handed back to the rest of the query engine.

pub mod merge;

// Re-export error types from core module
pub use crate::core::{MergeError, MergeResult};
pub use merge::{DistinctQueryResult, QueryResult};
