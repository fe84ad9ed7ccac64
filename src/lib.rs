//! # a3s-cron-codec
//!
//! Bidirectional conversion between structured schedule selections and
//! standard 5-field cron expressions.
//!
//! ## Overview
//!
//! Schedule forms edit five fields (months, days of month, weekdays, hours,
//! minutes) plus a "repeat every" period. This crate turns that selection
//! into the most compact cron expression and parses any valid expression
//! back into the same selection:
//!
//! - **Encoder**: wildcard, `*/N`, `a-b/N` and range-list compaction
//! - **Decoder**: ranges, steps, lists, month/weekday names, `7` as Sunday
//! - **classify**: coarsest period that reproduces a decoded selection
//!
//! ## Quick Start
//!
//! ```rust
//! use a3s_cron_codec::{classify, decode, encode, Period, ScheduleInput};
//!
//! # fn example() -> a3s_cron_codec::Result<()> {
//! let input = ScheduleInput::new()
//!     .with_months([1])
//!     .with_month_days([15])
//!     .with_hours([9])
//!     .with_minutes([30]);
//! let expr = encode(Period::Year, &input)?;
//! assert_eq!(expr, "30 9 15 1 *");
//!
//! let selection = decode(&expr)?;
//! assert_eq!(classify(&selection), Period::Year);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! An empty field (`FieldValues::Every`) always means "every value"; a field
//! that lists its whole domain is normalized to it.

pub mod classify;
pub mod config;
pub mod decoder;
pub mod describe;
pub mod encoder;
pub mod error;
pub mod types;
pub mod unit;

pub use classify::classify;
pub use config::{ClockFormat, FormatOptions};
pub use decoder::{decode, decode_field};
pub use describe::describe;
pub use encoder::{encode, Encoder};
pub use error::{CodecError, Result};
pub use types::{FieldValues, Period, ScheduleInput, Selection};
pub use unit::{Unit, UnitKind, UNITS};
