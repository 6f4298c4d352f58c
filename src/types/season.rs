//! Defines the `Season` enum for the `season` code of the rental data.

use serde::Serialize;
use std::fmt;

/// Meteorological season of an hourly record, as coded in the source data.
///
/// Codes run 1 through 4. Use [`Season::from_i64`] to convert a raw code and
/// [`Season::label`] to get the display name.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize)]
pub enum Season {
    /// Code 1.
    Spring = 1,
    /// Code 2.
    Summer = 2,
    /// Code 3.
    Fall = 3,
    /// Code 4.
    Winter = 4,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// Converts a raw season code into a `Season`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bikeshare::Season;
    ///
    /// assert_eq!(Season::from_i64(3), Some(Season::Fall));
    /// assert_eq!(Season::from_i64(0), None);
    /// ```
    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            1 => Some(Season::Spring),
            2 => Some(Season::Summer),
            3 => Some(Season::Fall),
            4 => Some(Season::Winter),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        self as i64
    }

    pub fn label(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
