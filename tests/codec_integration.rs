//! Codec integration tests
//!
//! End-to-end tests exercising the public encode/decode/classify API the way
//! a schedule form uses it: form input to expression, stored expression back
//! to form state, plus round-trip properties over generated selections.

use a3s_cron_codec::{
    classify, decode, describe, encode, ClockFormat, CodecError, Encoder, FieldValues,
    FormatOptions, Period, ScheduleInput, Selection, UnitKind,
};
use proptest::prelude::*;

fn explicit(values: &[i32]) -> FieldValues {
    FieldValues::Explicit(values.to_vec())
}

// ─── End-to-End ──────────────────────────────────────────────────

#[test]
fn test_form_to_expression_and_back() {
    let input = ScheduleInput::new()
        .with_months([1])
        .with_month_days([15])
        .with_week_days(Vec::<i32>::new())
        .with_hours([9])
        .with_minutes([30]);

    let expr = encode(Period::Year, &input).unwrap();
    assert_eq!(expr, "30 9 15 1 *");

    let sel = decode(&expr).unwrap();
    assert_eq!(sel.minutes, explicit(&[30]));
    assert_eq!(sel.hours, explicit(&[9]));
    assert_eq!(sel.days_of_month, explicit(&[15]));
    assert_eq!(sel.months, explicit(&[1]));
    assert_eq!(sel.days_of_week, FieldValues::Every);
    assert_eq!(classify(&sel), Period::Year);
}

#[test]
fn test_form_state_from_json() {
    let input: ScheduleInput =
        serde_json::from_str(r#"{"weekDays": [1, 2, 3, 4, 5], "hours": [2], "minutes": [0]}"#)
            .unwrap();
    let period: Period = serde_json::from_str("\"week\"").unwrap();

    let expr = encode(period, &input).unwrap();
    assert_eq!(expr, "0 2 * * 1-5");

    let sel: Selection = expr.parse().unwrap();
    assert_eq!(sel.period(), Period::Week);
    let json = serde_json::to_value(&sel).unwrap();
    assert_eq!(json["daysOfWeek"], serde_json::json!([1, 2, 3, 4, 5]));
    assert_eq!(json["months"], serde_json::json!([]));
}

#[test]
fn test_stored_selection_json_is_normalized() {
    let sel: Selection = serde_json::from_str(
        r#"{"months":[12,11,10,9,8,7,6,5,4,3,2,1],"hours":[9,9],"daysOfWeek":[7]}"#,
    )
    .unwrap();
    assert!(sel.months.is_every());
    assert_eq!(sel.hours, explicit(&[9]));
    assert_eq!(sel.days_of_week, explicit(&[0]));
    assert_eq!(classify(&sel), Period::Week);

    let expr = Encoder::default().encode_selection(&sel).unwrap();
    assert_eq!(expr, "* 9 * * 0");
    assert_eq!(decode(&expr).unwrap(), sel);

    assert!(serde_json::from_str::<Selection>(r#"{"minutes": [60]}"#).is_err());
}

#[test]
fn test_describe_decoded_backup_schedule() {
    let sel = decode("0 2 * * SUN").unwrap();
    assert_eq!(describe(&sel), "at 02:00, on SUN");
}

// ─── Compaction ──────────────────────────────────────────────────

#[test]
fn test_wildcard_equivalence() {
    let mut minutes: Vec<i32> = (0..60).rev().collect();
    minutes.extend(0..30);
    let input = ScheduleInput::new().with_minutes(minutes);
    assert_eq!(encode(Period::Hour, &input).unwrap(), "* * * * *");

    assert!(decode("* * * * *").unwrap().minutes.is_every());
}

#[test]
fn test_step_compaction() {
    let evens: Vec<i32> = (0..60).step_by(2).collect();
    let input = ScheduleInput::new().with_minutes(evens.clone());
    assert_eq!(encode(Period::Hour, &input).unwrap(), "*/2 * * * *");

    let sel = decode("*/2 * * * *").unwrap();
    assert_eq!(sel.minutes, FieldValues::Explicit(evens));
}

#[test]
fn test_range_compaction() {
    let input = ScheduleInput::new().with_month_days([1, 2, 3, 7, 8, 20]);
    assert_eq!(encode(Period::Month, &input).unwrap(), "* * 1-3,7-8,20 * *");
}

#[test]
fn test_sunday_aliasing() {
    let with_seven = ScheduleInput::new().with_week_days([7, 3]);
    let with_zero = ScheduleInput::new().with_week_days([0, 3]);
    assert_eq!(
        encode(Period::Week, &with_seven).unwrap(),
        encode(Period::Week, &with_zero).unwrap()
    );

    assert_eq!(decode("0 0 * * 7").unwrap().days_of_week, explicit(&[0]));
}

#[test]
fn test_period_suppression() {
    let input = ScheduleInput::new().with_months([3]).with_month_days([1]);
    let expr = encode(Period::Month, &input).unwrap();
    let fields: Vec<&str> = expr.split(' ').collect();
    assert_eq!(fields[3], "*");
    assert_eq!(fields[2], "1");
}

// ─── Errors ──────────────────────────────────────────────────────

#[test]
fn test_out_of_range_minute() {
    for value in [60, -1] {
        let input = ScheduleInput::new().with_minutes([value]);
        let err = encode(Period::Hour, &input).unwrap_err();
        match err {
            CodecError::OutOfRange { unit, value: v } => {
                assert_eq!(unit, UnitKind::Minute);
                assert_eq!(v, value);
            }
            other => panic!("unexpected error: {}", other),
        }

        let err = decode(&format!("{} * * * *", value)).unwrap_err();
        assert!(err.to_string().contains("minute"));
        assert!(err.to_string().contains(&value.to_string()));
    }
}

#[test]
fn test_malformed_expressions() {
    for expr in [
        "* * * *",
        "1/2/3 * * * *",
        "30-10 * * * *",
        "*/x * * * *",
        "@reboot",
        "+5 * * * *",
        "0 0 * JANFEB *",
    ] {
        let err = decode(expr).unwrap_err();
        assert!(
            matches!(err, CodecError::MalformedExpression { .. }),
            "{} gave {:?}",
            expr,
            err
        );
    }
}

#[test]
fn test_invalid_five_field_shape() {
    let err = Encoder::default()
        .encode_fields(Period::Year, &vec![vec![1]; 6])
        .unwrap_err();
    assert!(matches!(err, CodecError::InvalidFiveFieldShape(6)));
}

// ─── Formatting ──────────────────────────────────────────────────

#[test]
fn test_humanized_and_padded_output_decodes() {
    let options = FormatOptions::default()
        .with_humanized_labels(true)
        .with_clock_format(ClockFormat::TwentyFourHour);
    let sel = decode("5 9 * 1,6-8 1-5").unwrap();

    let expr = sel.to_expression(&options).unwrap();
    assert_eq!(expr, "05 09 * JAN,JUN-AUG MON-FRI");
    assert_eq!(decode(&expr).unwrap(), sel);
}

#[test]
fn test_options_from_json_drive_encoder() {
    let options = FormatOptions::from_json(r#"{"clockFormat": "12-hour-clock"}"#).unwrap();
    let input = ScheduleInput::new().with_hours([0, 13]).with_minutes([0]);
    let expr = Encoder::new(options).encode(Period::Day, &input).unwrap();
    assert_eq!(expr, "0 12AM,1PM * * *");
}

// ─── Round Trip ──────────────────────────────────────────────────

fn masked_field(kind: UnitKind) -> impl Strategy<Value = FieldValues> {
    let unit = kind.unit();
    proptest::collection::vec(any::<bool>(), unit.total).prop_map(move |mask| {
        let values = unit
            .values()
            .zip(mask)
            .filter_map(|(v, keep)| keep.then_some(v))
            .collect();
        FieldValues::normalize(values, unit)
    })
}

fn stepped_field(kind: UnitKind) -> impl Strategy<Value = FieldValues> {
    let unit = kind.unit();
    (unit.min..=unit.max, 2i32..=12, 1i32..=12).prop_map(move |(start, step, count)| {
        let values = (0..count)
            .map(|i| start + i * step)
            .take_while(|v| *v <= unit.max)
            .collect();
        FieldValues::normalize(values, unit)
    })
}

fn field(kind: UnitKind) -> impl Strategy<Value = FieldValues> {
    prop_oneof![masked_field(kind), stepped_field(kind)]
}

fn selection() -> impl Strategy<Value = Selection> {
    (
        field(UnitKind::Minute),
        field(UnitKind::Hour),
        field(UnitKind::DayOfMonth),
        field(UnitKind::Month),
        field(UnitKind::DayOfWeek),
    )
        .prop_map(|(minutes, hours, dom, months, dow)| {
            Selection::from_fields([minutes, hours, dom, months, dow])
        })
}

proptest! {
    #[test]
    fn prop_round_trip(sel in selection()) {
        let expr = Encoder::default().encode_selection(&sel).unwrap();
        prop_assert_eq!(decode(&expr).unwrap(), sel);
    }

    #[test]
    fn prop_round_trip_humanized(sel in selection()) {
        let options = FormatOptions::default()
            .with_humanized_labels(true)
            .with_leading_zero(UnitKind::Minute)
            .with_leading_zero(UnitKind::DayOfMonth);
        let expr = sel.to_expression(&options).unwrap();
        prop_assert_eq!(decode(&expr).unwrap(), sel);
    }

    #[test]
    fn prop_sunday_alias(days in proptest::collection::vec(0i32..=7, 1..10)) {
        let aliased: Vec<i32> = days.iter().map(|&d| if d == 7 { 0 } else { d }).collect();
        let enc = Encoder::default();
        prop_assert_eq!(
            enc.encode_field(&days, UnitKind::DayOfWeek).unwrap(),
            enc.encode_field(&aliased, UnitKind::DayOfWeek).unwrap()
        );
    }

    #[test]
    fn prop_classify_matches_first_constrained_field(sel in selection()) {
        let period = classify(&sel);
        let first = [
            (UnitKind::Month, Period::Year),
            (UnitKind::DayOfMonth, Period::Month),
            (UnitKind::DayOfWeek, Period::Week),
            (UnitKind::Hour, Period::Day),
            (UnitKind::Minute, Period::Hour),
        ]
        .into_iter()
        .find(|(kind, _)| !sel.get(*kind).is_every())
        .map_or(Period::Minute, |(_, p)| p);
        prop_assert_eq!(period, first);
    }
}
