//! Human-readable schedule summaries

use crate::types::Selection;
use crate::unit::UnitKind;

/// Get a human-readable description of a selection
///
/// ```
/// use a3s_cron_codec::{decode, describe};
///
/// let sel = decode("30 9 * * 1-5").unwrap();
/// assert_eq!(describe(&sel), "at 09:30, on MON, TUE, WED, THU, FRI");
/// ```
pub fn describe(selection: &Selection) -> String {
    let mut parts = Vec::new();

    match (selection.minutes.as_slice(), selection.hours.as_slice()) {
        ([minute], [hour]) => parts.push(format!("at {:02}:{:02}", hour, minute)),
        (minutes, hours) => {
            match minutes {
                [] => parts.push("every minute".to_string()),
                [0] => parts.push("at the start of the hour".to_string()),
                [minute] => parts.push(format!("at minute {}", minute)),
                many => parts.push(format!("at minutes {}", join(many))),
            }
            match hours {
                [] => {}
                [hour] => parts.push(format!("during hour {}", hour)),
                many => parts.push(format!("during hours {}", join(many))),
            }
        }
    }

    if !selection.days_of_month.is_every() {
        parts.push(format!("on days {}", join(selection.days_of_month.as_slice())));
    }

    if !selection.months.is_every() {
        parts.push(format!(
            "in {}",
            labels(selection.months.as_slice(), UnitKind::Month)
        ));
    }

    if !selection.days_of_week.is_every() {
        parts.push(format!(
            "on {}",
            labels(selection.days_of_week.as_slice(), UnitKind::DayOfWeek)
        ));
    }

    parts.join(", ")
}

fn join(values: &[i32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn labels(values: &[i32], kind: UnitKind) -> String {
    let unit = kind.unit();
    values
        .iter()
        .map(|&v| unit.label(v).map_or_else(|| v.to_string(), str::to_string))
        .collect::<Vec<_>>()
        .join(", ")
}
