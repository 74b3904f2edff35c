use std::fmt;

/// 只进游标的状态
///
/// BeforeFirst -> Positioned -> ... -> Exhausted，Exhausted 为终态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorState {
    #[default]
    BeforeFirst,
    Positioned,
    Exhausted,
}

impl CursorState {
    /// 是否定位在某一行上
    pub fn is_positioned(&self) -> bool {
        matches!(self, CursorState::Positioned)
    }
}

impl fmt::Display for CursorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CursorState::BeforeFirst => write!(f, "BEFORE_FIRST"),
            CursorState::Positioned => write!(f, "POSITIONED"),
            CursorState::Exhausted => write!(f, "EXHAUSTED"),
        }
    }
}
