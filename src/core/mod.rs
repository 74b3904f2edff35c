pub mod cursor_state;
pub mod error;
pub mod row;
pub mod value;

// 错误和结果类型
pub use error::{ErrorCode, MergeError, MergeResult, ToPublicError};

// 核心数据类型
pub use cursor_state::CursorState;
pub use row::Row;
pub use value::{Value, ValueTypeDef};
