//! Period classification for decoded selections

use crate::types::{Period, Selection};

/// Infer the coarsest period whose form controls reproduce `selection`
///
/// The first constrained field wins, checked from month down to minute.
pub fn classify(selection: &Selection) -> Period {
    if !selection.months.is_every() {
        Period::Year
    } else if !selection.days_of_month.is_every() {
        Period::Month
    } else if !selection.days_of_week.is_every() {
        Period::Week
    } else if !selection.hours.is_every() {
        Period::Day
    } else if !selection.minutes.is_every() {
        Period::Hour
    } else {
        Period::Minute
    }
}
