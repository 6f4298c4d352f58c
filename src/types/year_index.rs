use serde::Serialize;
use std::fmt;

/// Which of the two dataset years a record belongs to (`yr` column).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize)]
pub enum YearIndex {
    First = 0,
    Second = 1,
}

impl YearIndex {
    pub const ALL: [YearIndex; 2] = [YearIndex::First, YearIndex::Second];

    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            0 => Some(YearIndex::First),
            1 => Some(YearIndex::Second),
            _ => None,
        }
    }

    pub fn index(self) -> i64 {
        self as i64
    }

    /// Calendar year the index stands for in the source dataset.
    pub fn label(self) -> &'static str {
        match self {
            YearIndex::First => "2011",
            YearIndex::Second => "2012",
        }
    }
}

impl fmt::Display for YearIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
