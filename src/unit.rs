//! Unit registry for the five cron fields
//!
//! ```text
//! ┌───────────── minute (0-59)
//! │ ┌───────────── hour (0-23)
//! │ │ ┌───────────── day of month (1-31)
//! │ │ │ ┌───────────── month (1-12, JAN-DEC)
//! │ │ │ │ ┌───────────── day of week (0-6, SUN-SAT, 7 = Sunday)
//! │ │ │ │ │
//! * * * * *
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

const MONTH_LABELS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

const WEEKDAY_LABELS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// One of the five schedulable fields, in expression order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitKind {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl UnitKind {
    /// All kinds in expression order: minute hour day-of-month month day-of-week
    pub const ALL: [UnitKind; 5] = [
        UnitKind::Minute,
        UnitKind::Hour,
        UnitKind::DayOfMonth,
        UnitKind::Month,
        UnitKind::DayOfWeek,
    ];

    /// Position of this field in an expression
    pub fn index(self) -> usize {
        match self {
            UnitKind::Minute => 0,
            UnitKind::Hour => 1,
            UnitKind::DayOfMonth => 2,
            UnitKind::Month => 3,
            UnitKind::DayOfWeek => 4,
        }
    }

    /// Descriptor for this field
    pub fn unit(self) -> &'static Unit {
        &UNITS[self.index()]
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitKind::Minute => write!(f, "minute"),
            UnitKind::Hour => write!(f, "hour"),
            UnitKind::DayOfMonth => write!(f, "day-of-month"),
            UnitKind::Month => write!(f, "month"),
            UnitKind::DayOfWeek => write!(f, "day-of-week"),
        }
    }
}

/// Static descriptor of a field's numeric domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub kind: UnitKind,
    /// Inclusive lower bound
    pub min: i32,
    /// Inclusive upper bound
    pub max: i32,
    /// Domain cardinality (`max - min + 1`)
    pub total: usize,
    /// Alternate labels aligned to values starting at `min`
    pub alt: Option<&'static [&'static str]>,
}

impl Unit {
    /// Check whether a value lies inside the domain
    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Every value of the domain in ascending order
    pub fn values(&self) -> impl Iterator<Item = i32> {
        self.min..=self.max
    }

    /// Alternate label for a value, if this unit has one
    pub fn label(&self, value: i32) -> Option<&'static str> {
        let alt = self.alt?;
        let offset = usize::try_from(value - self.min).ok()?;
        alt.get(offset).copied()
    }

    pub(crate) fn is_day_of_week(&self) -> bool {
        self.kind == UnitKind::DayOfWeek
    }
}

/// Descriptors for all five fields, in expression order
pub const UNITS: [Unit; 5] = [
    Unit {
        kind: UnitKind::Minute,
        min: 0,
        max: 59,
        total: 60,
        alt: None,
    },
    Unit {
        kind: UnitKind::Hour,
        min: 0,
        max: 23,
        total: 24,
        alt: None,
    },
    Unit {
        kind: UnitKind::DayOfMonth,
        min: 1,
        max: 31,
        total: 31,
        alt: None,
    },
    Unit {
        kind: UnitKind::Month,
        min: 1,
        max: 12,
        total: 12,
        alt: Some(&MONTH_LABELS),
    },
    Unit {
        kind: UnitKind::DayOfWeek,
        min: 0,
        max: 6,
        total: 7,
        alt: Some(&WEEKDAY_LABELS),
    },
];
