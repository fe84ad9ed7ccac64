//! Reverse codec: cron expressions to structured selections
//!
//! Accepts the standard 5-field syntax:
//! - `*` - any value
//! - `,` - value list separator (e.g., `1,3,5`)
//! - `-` - range (e.g., `1-5`)
//! - `/` - step (e.g., `*/5` or `0-30/5`)
//!
//! Month and weekday fields also accept names (`JAN`, `mon`), and `7` is
//! read as Sunday. The shortcuts `@yearly`, `@annually`, `@monthly`,
//! `@weekly`, `@daily`, `@midnight` and `@hourly` expand to their usual
//! expressions.

use crate::error::{CodecError, Result};
use crate::types::{FieldValues, Selection};
use crate::unit::{Unit, UnitKind};
use std::ops::RangeInclusive;

/// Parse a cron expression into a five-field selection
///
/// # Examples
///
/// ```
/// use a3s_cron_codec::{decode, FieldValues};
///
/// let sel = decode("30 9 15 1 *").unwrap();
/// assert_eq!(sel.minutes, FieldValues::Explicit(vec![30]));
/// assert_eq!(sel.months, FieldValues::Explicit(vec![1]));
/// assert!(sel.days_of_week.is_every());
/// ```
pub fn decode(expression: &str) -> Result<Selection> {
    let expanded = expand_shortcut(expression)?;
    let parts: Vec<&str> = expanded.split_whitespace().collect();

    if parts.len() != 5 {
        return Err(CodecError::malformed(
            expression,
            format!("expected 5 fields, got {}", parts.len()),
        ));
    }

    let selection = Selection {
        minutes: decode_field(parts[0], UnitKind::Minute)?,
        hours: decode_field(parts[1], UnitKind::Hour)?,
        days_of_month: decode_field(parts[2], UnitKind::DayOfMonth)?,
        months: decode_field(parts[3], UnitKind::Month)?,
        days_of_week: decode_field(parts[4], UnitKind::DayOfWeek)?,
    };

    tracing::debug!(expression = %expanded, "Decoded cron expression");
    Ok(selection)
}

/// Parse a single field token
pub fn decode_field(token: &str, kind: UnitKind) -> Result<FieldValues> {
    if token == "*" || token == "*/1" {
        return Ok(FieldValues::Every);
    }

    let unit = kind.unit();
    let mut parts = token.split('/');
    let range_part = parts.next().unwrap_or_default();
    let step_part = parts.next();
    if parts.next().is_some() {
        return Err(CodecError::malformed(token, "more than one '/' separator"));
    }

    let range = replace_labels(range_part, unit);
    let values = if range == "*" {
        unit.values().collect()
    } else {
        parse_list(&range, token, unit)?
    };

    let values = match step_part {
        Some(step) => apply_step(values, parse_step(step, token)?),
        None => values,
    };

    if values.is_empty() {
        return Err(CodecError::EmptyInterval {
            unit: kind,
            expression: token.to_string(),
        });
    }

    Ok(FieldValues::normalize(values, unit))
}

fn expand_shortcut(expression: &str) -> Result<&str> {
    let trimmed = expression.trim();
    if !trimmed.starts_with('@') {
        return Ok(trimmed);
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "@yearly" | "@annually" => Ok("0 0 1 1 *"),
        "@monthly" => Ok("0 0 1 * *"),
        "@weekly" => Ok("0 0 * * 0"),
        "@daily" | "@midnight" => Ok("0 0 * * *"),
        "@hourly" => Ok("0 * * * *"),
        _ => Err(CodecError::malformed(trimmed, "unsupported shortcut")),
    }
}

/// Substitute alternate labels with their numerals
///
/// Only a whole list item or range bound is treated as a label, so `JANFEB`
/// and `1JAN` are left alone and fail to parse.
fn replace_labels(range: &str, unit: &Unit) -> String {
    let Some(labels) = unit.alt else {
        return range.to_string();
    };

    let resolve = |bound: &str| -> String {
        unit.values()
            .zip(labels)
            .find(|(_, label)| label.eq_ignore_ascii_case(bound))
            .map_or_else(|| bound.to_string(), |(value, _)| value.to_string())
    };

    let mut resolved = String::with_capacity(range.len());
    let mut start = 0;
    for (idx, separator) in range.match_indices(|c: char| c == ',' || c == '-') {
        resolved.push_str(&resolve(&range[start..idx]));
        resolved.push_str(separator);
        start = idx + separator.len();
    }
    resolved.push_str(&resolve(&range[start..]));
    resolved
}

/// Expand a comma-separated list of values and ranges into sorted unique values
fn parse_list(range: &str, token: &str, unit: &Unit) -> Result<Vec<i32>> {
    let mut values = Vec::new();
    for piece in range.split(',') {
        values.extend(parse_piece(piece, token, unit)?);
    }

    if unit.is_day_of_week() {
        for value in values.iter_mut().filter(|v| **v == 7) {
            *value = 0;
        }
    }
    values.sort_unstable();
    values.dedup();
    Ok(values)
}

fn parse_piece(piece: &str, token: &str, unit: &Unit) -> Result<RangeInclusive<i32>> {
    // a bare negative number is a value, not a range
    if is_number(piece) {
        let value = parse_number(piece, token)?;
        check_bound(value, unit)?;
        return Ok(value..=value);
    }

    let (start, end) = piece
        .split_once('-')
        .ok_or_else(|| CodecError::malformed(token, format!("invalid value '{}'", piece)))?;
    let start = parse_number(start, token)?;
    let end = parse_number(end, token)?;
    check_bound(start, unit)?;
    check_bound(end, unit)?;

    if end <= start {
        return Err(CodecError::malformed(
            token,
            format!("range end {} must be greater than start {}", end, start),
        ));
    }
    Ok(start..=end)
}

/// Optional leading `-` followed by ASCII digits only
fn is_number(s: &str) -> bool {
    is_digits(s.strip_prefix('-').unwrap_or(s))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_number(s: &str, token: &str) -> Result<i32> {
    let invalid = || CodecError::malformed(token, format!("invalid value '{}'", s));
    if !is_number(s) {
        return Err(invalid());
    }
    s.parse().map_err(|_| invalid())
}

fn check_bound(value: i32, unit: &Unit) -> Result<()> {
    let sunday_alias = unit.is_day_of_week() && value == 7;
    if unit.contains(value) || sunday_alias {
        Ok(())
    } else {
        Err(CodecError::OutOfRange {
            unit: unit.kind,
            value,
        })
    }
}

fn parse_step(step: &str, token: &str) -> Result<i32> {
    let invalid = || CodecError::malformed(token, format!("invalid interval step '{}'", step));
    if !is_digits(step) {
        return Err(invalid());
    }
    let step: i32 = step.parse().map_err(|_| invalid())?;
    if step < 1 {
        return Err(CodecError::malformed(
            token,
            format!("interval step {} must be positive", step),
        ));
    }
    Ok(step)
}

/// Keep values congruent to the smallest one modulo `step`
fn apply_step(values: Vec<i32>, step: i32) -> Vec<i32> {
    let Some(&first) = values.first() else {
        return values;
    };
    values
        .into_iter()
        .filter(|v| v % step == first % step || *v == first)
        .collect()
}
