//! Forward codec: structured selections to cron expressions
//!
//! Each field is compacted independently into the shortest form that
//! denotes exactly the selected values:
//! - `*` when nothing or the whole domain is selected
//! - `*/N` or `a-b/N` for an arithmetic progression of at least 3 values
//! - a comma-separated list of `a-b` runs and single values otherwise

use crate::config::{ClockFormat, FormatOptions};
use crate::error::{CodecError, Result};
use crate::types::{FieldValues, Period, ScheduleInput, Selection};
use crate::unit::{Unit, UnitKind};

/// Encodes field selections into 5-field cron expressions
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    options: FormatOptions,
}

impl Encoder {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    /// Encode form input, discarding fields finer than `period` allows
    ///
    /// # Examples
    ///
    /// ```
    /// use a3s_cron_codec::{Encoder, Period, ScheduleInput};
    ///
    /// let input = ScheduleInput::new()
    ///     .with_months([1])
    ///     .with_month_days([15])
    ///     .with_hours([9])
    ///     .with_minutes([30]);
    /// let expr = Encoder::default().encode(Period::Year, &input).unwrap();
    /// assert_eq!(expr, "30 9 15 1 *");
    /// ```
    pub fn encode(&self, period: Period, input: &ScheduleInput) -> Result<String> {
        let fields = UnitKind::ALL.map(|kind| input.field(kind));
        self.encode_ordered(period, &fields)
    }

    /// Encode raw fields given in expression order
    ///
    /// Fails with [`CodecError::InvalidFiveFieldShape`] unless exactly five
    /// fields are supplied.
    pub fn encode_fields(&self, period: Period, fields: &[Vec<i32>]) -> Result<String> {
        let fields: [&[i32]; 5] = match fields {
            [minute, hour, dom, month, dow] => [
                minute.as_slice(),
                hour.as_slice(),
                dom.as_slice(),
                month.as_slice(),
                dow.as_slice(),
            ],
            _ => return Err(CodecError::InvalidFiveFieldShape(fields.len())),
        };
        self.encode_ordered(period, &fields)
    }

    /// Encode a decoded selection with no field suppressed
    pub fn encode_selection(&self, selection: &Selection) -> Result<String> {
        let fields = selection.fields().map(|f| f.as_slice());
        self.encode_ordered(Period::Year, &fields)
    }

    fn encode_ordered(&self, period: Period, fields: &[&[i32]; 5]) -> Result<String> {
        let mut parts = Vec::with_capacity(fields.len());
        for (kind, values) in UnitKind::ALL.into_iter().zip(fields) {
            let values: &[i32] = if period.keeps(kind) { *values } else { &[] };
            parts.push(self.encode_field(values, kind)?);
        }

        let expression = parts.join(" ");
        tracing::debug!(%period, expression = %expression, "Encoded cron expression");
        Ok(expression)
    }

    /// Encode a single field
    pub fn encode_field(&self, values: &[i32], kind: UnitKind) -> Result<String> {
        let unit = kind.unit();
        let values = match FieldValues::from_raw(values, kind)? {
            FieldValues::Every => return Ok("*".to_string()),
            FieldValues::Explicit(values) => values,
        };
        let (first, last) = match (values.first(), values.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return Ok("*".to_string()),
        };

        if let Some(step) = uniform_step(&values) {
            if first == unit.min && last + step > unit.max {
                return Ok(format!("*/{}", step));
            }
            return Ok(format!(
                "{}-{}/{}",
                self.format_value(first, unit),
                self.format_value(last, unit),
                step
            ));
        }

        let parts: Vec<String> = runs(&values)
            .into_iter()
            .map(|(low, high)| {
                if low == high {
                    self.format_value(low, unit)
                } else {
                    format!(
                        "{}-{}",
                        self.format_value(low, unit),
                        self.format_value(high, unit)
                    )
                }
            })
            .collect();
        Ok(parts.join(","))
    }

    fn format_value(&self, value: i32, unit: &Unit) -> String {
        let pad = self.options.pads(unit.kind);

        let twelve_hour = self.options.clock_format == Some(ClockFormat::TwelveHour);
        if unit.kind == UnitKind::Hour && twelve_hour {
            let suffix = if value >= 12 { "PM" } else { "AM" };
            let hour = match value % 12 {
                0 => 12,
                h => h,
            };
            return if pad {
                format!("{:02}{}", hour, suffix)
            } else {
                format!("{}{}", hour, suffix)
            };
        }

        if self.options.humanize_labels {
            if let Some(label) = unit.label(value) {
                return label.to_string();
            }
        }

        let clock_padded = self.options.clock_format == Some(ClockFormat::TwentyFourHour)
            && matches!(unit.kind, UnitKind::Hour | UnitKind::Minute);
        if pad || clock_padded {
            format!("{:02}", value)
        } else {
            value.to_string()
        }
    }
}

/// Encode form input with default formatting
pub fn encode(period: Period, input: &ScheduleInput) -> Result<String> {
    Encoder::default().encode(period, input)
}

/// Common gap of a sorted sequence, if it has at least 3 values spaced more than 1 apart
fn uniform_step(values: &[i32]) -> Option<i32> {
    if values.len() <= 2 {
        return None;
    }
    let step = values[1] - values[0];
    if step <= 1 {
        return None;
    }
    values
        .windows(2)
        .all(|pair| pair[1] - pair[0] == step)
        .then_some(step)
}

/// Maximal runs of consecutive integers as `(low, high)` pairs
fn runs(values: &[i32]) -> Vec<(i32, i32)> {
    let mut runs: Vec<(i32, i32)> = Vec::new();
    for &value in values {
        if let Some((_, high)) = runs.last_mut() {
            if *high + 1 == value {
                *high = value;
                continue;
            }
        }
        runs.push((value, value));
    }
    runs
}
