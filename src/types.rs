//! Core value types exchanged with the form layer
//!
//! All types use camelCase JSON serialization. A field's values travel as a
//! plain integer array where `[]` means "every value".

use crate::config::FormatOptions;
use crate::error::{CodecError, Result};
use crate::unit::{Unit, UnitKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Values selected for one field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(into = "Vec<i32>")]
pub enum FieldValues {
    /// Unconstrained, equivalent to `*`
    #[default]
    Every,
    /// Sorted, de-duplicated values that do not cover the whole domain
    Explicit(Vec<i32>),
}

impl FieldValues {
    /// Build from values known to belong to `unit`, collapsing full coverage to `Every`
    pub fn normalize(values: Vec<i32>, unit: &Unit) -> Self {
        if values.is_empty() || values.len() == unit.total {
            FieldValues::Every
        } else {
            FieldValues::Explicit(values)
        }
    }

    /// Validate raw form values for a field
    ///
    /// Values are sorted and de-duplicated (weekday 7 folds onto Sunday),
    /// then checked against the domain and collapsed to `Every` when they
    /// cover all of it.
    pub fn from_raw(values: &[i32], kind: UnitKind) -> Result<Self> {
        let unit = kind.unit();
        let values = sorted_unique(values, unit);

        if let (Some(&first), Some(&last)) = (values.first(), values.last()) {
            if first < unit.min {
                return Err(CodecError::OutOfRange {
                    unit: kind,
                    value: first,
                });
            }
            if last > unit.max {
                return Err(CodecError::OutOfRange {
                    unit: kind,
                    value: last,
                });
            }
        }

        Ok(FieldValues::normalize(values, unit))
    }

    pub fn is_every(&self) -> bool {
        matches!(self, FieldValues::Every)
    }

    /// Explicit values, or an empty slice for `Every`
    pub fn as_slice(&self) -> &[i32] {
        match self {
            FieldValues::Every => &[],
            FieldValues::Explicit(values) => values,
        }
    }
}

impl From<FieldValues> for Vec<i32> {
    fn from(values: FieldValues) -> Self {
        match values {
            FieldValues::Every => Vec::new(),
            FieldValues::Explicit(values) => values,
        }
    }
}

/// Sort and de-duplicate, folding weekday 7 onto Sunday first
fn sorted_unique(values: &[i32], unit: &Unit) -> Vec<i32> {
    let mut values: Vec<i32> = if unit.is_day_of_week() {
        values.iter().map(|&v| if v == 7 { 0 } else { v }).collect()
    } else {
        values.to_vec()
    };
    values.sort_unstable();
    values.dedup();
    values
}

/// A decoded five-field schedule
///
/// Deserialization validates every field the same way the encoder does, so
/// a JSON selection that lists a whole domain comes back as `Every`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawSelection")]
pub struct Selection {
    pub minutes: FieldValues,
    pub hours: FieldValues,
    pub days_of_month: FieldValues,
    pub months: FieldValues,
    pub days_of_week: FieldValues,
}

/// Unvalidated wire shape of a [`Selection`]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawSelection {
    minutes: Vec<i32>,
    hours: Vec<i32>,
    days_of_month: Vec<i32>,
    months: Vec<i32>,
    days_of_week: Vec<i32>,
}

impl TryFrom<RawSelection> for Selection {
    type Error = CodecError;

    fn try_from(raw: RawSelection) -> Result<Self> {
        Ok(Self {
            minutes: FieldValues::from_raw(&raw.minutes, UnitKind::Minute)?,
            hours: FieldValues::from_raw(&raw.hours, UnitKind::Hour)?,
            days_of_month: FieldValues::from_raw(&raw.days_of_month, UnitKind::DayOfMonth)?,
            months: FieldValues::from_raw(&raw.months, UnitKind::Month)?,
            days_of_week: FieldValues::from_raw(&raw.days_of_week, UnitKind::DayOfWeek)?,
        })
    }
}

impl Selection {
    /// Build from fields in expression order
    pub fn from_fields(fields: [FieldValues; 5]) -> Self {
        let [minutes, hours, days_of_month, months, days_of_week] = fields;
        Self {
            minutes,
            hours,
            days_of_month,
            months,
            days_of_week,
        }
    }

    /// Fields in expression order
    pub fn fields(&self) -> [&FieldValues; 5] {
        [
            &self.minutes,
            &self.hours,
            &self.days_of_month,
            &self.months,
            &self.days_of_week,
        ]
    }

    pub fn get(&self, kind: UnitKind) -> &FieldValues {
        self.fields()[kind.index()]
    }

    /// Coarsest period that reproduces this selection
    pub fn period(&self) -> Period {
        crate::classify::classify(self)
    }

    /// Encode without suppressing any field
    pub fn to_expression(&self, options: &FormatOptions) -> Result<String> {
        crate::encoder::Encoder::new(options.clone()).encode_selection(self)
    }
}

impl FromStr for Selection {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        crate::decoder::decode(s)
    }
}

/// Repeat cadence chosen in the "repeat every" control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Year,
    Month,
    Week,
    #[default]
    Day,
    Hour,
    Minute,
}

impl Period {
    /// All periods from coarsest to finest
    pub const ALL: [Period; 6] = [
        Period::Year,
        Period::Month,
        Period::Week,
        Period::Day,
        Period::Hour,
        Period::Minute,
    ];

    fn rank(self) -> u8 {
        match self {
            Period::Year => 0,
            Period::Month => 1,
            Period::Week => 2,
            Period::Day => 3,
            Period::Hour => 4,
            Period::Minute => 5,
        }
    }

    /// Whether a field may carry explicit values under this period
    pub fn keeps(self, kind: UnitKind) -> bool {
        let finest = match kind {
            UnitKind::Month => Period::Year,
            UnitKind::DayOfMonth => Period::Month,
            UnitKind::DayOfWeek => Period::Week,
            UnitKind::Hour => Period::Day,
            UnitKind::Minute => Period::Hour,
        };
        self.rank() <= finest.rank()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Year => write!(f, "year"),
            Period::Month => write!(f, "month"),
            Period::Week => write!(f, "week"),
            Period::Day => write!(f, "day"),
            Period::Hour => write!(f, "hour"),
            Period::Minute => write!(f, "minute"),
        }
    }
}

impl FromStr for Period {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        Period::ALL
            .into_iter()
            .find(|p| p.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CodecError::UnknownPeriod(s.to_string()))
    }
}

/// Raw field selections as submitted by a schedule form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleInput {
    pub months: Vec<i32>,
    pub month_days: Vec<i32>,
    pub week_days: Vec<i32>,
    pub hours: Vec<i32>,
    pub minutes: Vec<i32>,
}

impl ScheduleInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_months(mut self, values: impl IntoIterator<Item = i32>) -> Self {
        self.months = values.into_iter().collect();
        self
    }

    pub fn with_month_days(mut self, values: impl IntoIterator<Item = i32>) -> Self {
        self.month_days = values.into_iter().collect();
        self
    }

    pub fn with_week_days(mut self, values: impl IntoIterator<Item = i32>) -> Self {
        self.week_days = values.into_iter().collect();
        self
    }

    pub fn with_hours(mut self, values: impl IntoIterator<Item = i32>) -> Self {
        self.hours = values.into_iter().collect();
        self
    }

    pub fn with_minutes(mut self, values: impl IntoIterator<Item = i32>) -> Self {
        self.minutes = values.into_iter().collect();
        self
    }

    /// Values supplied for a field
    pub fn field(&self, kind: UnitKind) -> &[i32] {
        match kind {
            UnitKind::Minute => &self.minutes,
            UnitKind::Hour => &self.hours,
            UnitKind::DayOfMonth => &self.month_days,
            UnitKind::Month => &self.months,
            UnitKind::DayOfWeek => &self.week_days,
        }
    }
}
