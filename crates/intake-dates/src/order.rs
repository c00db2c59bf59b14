//! Day/month precedence for ambiguous numeric dates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which component comes first when a numeric date is ambiguous.
///
/// Always supplied by the caller; never inferred from the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    /// `14/02/2013` reads as 14 February.
    #[default]
    DayFirst,
    /// `02/14/2013` reads as 14 February.
    MonthFirst,
}

impl DateOrder {
    /// Build from a "day precedes month" flag.
    #[must_use]
    pub const fn from_day_first(day_first: bool) -> Self {
        if day_first {
            Self::DayFirst
        } else {
            Self::MonthFirst
        }
    }

    /// The other convention, used for the lenient retry.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::DayFirst => Self::MonthFirst,
            Self::MonthFirst => Self::DayFirst,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DayFirst => "day-first",
            Self::MonthFirst => "month-first",
        }
    }
}

impl fmt::Display for DateOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
