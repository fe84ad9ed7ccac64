//! Output formatting options for the encoder

use crate::error::Result;
use crate::unit::UnitKind;
use serde::{Deserialize, Serialize};

/// Clock style used when rendering hour and minute values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockFormat {
    /// Zero-padded hours and minutes (`09`, `05`)
    #[serde(rename = "24-hour-clock")]
    TwentyFourHour,
    /// Hours rendered as `1AM`..`12PM`; display only, not accepted by the decoder
    #[serde(rename = "12-hour-clock")]
    TwelveHour,
}

/// Formatting flags applied to encoded values
///
/// Formatting never changes which values are selected, only how they are
/// written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    /// Write months and weekdays as `JAN`/`MON` instead of numerals
    pub humanize_labels: bool,

    /// Fields whose values below 10 are zero-padded
    pub leading_zero: Vec<UnitKind>,

    /// Clock style for hour/minute fields
    pub clock_format: Option<ClockFormat>,
}

impl FormatOptions {
    /// Load options from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_humanized_labels(mut self, enabled: bool) -> Self {
        self.humanize_labels = enabled;
        self
    }

    /// Zero-pad the given field
    pub fn with_leading_zero(mut self, kind: UnitKind) -> Self {
        if !self.leading_zero.contains(&kind) {
            self.leading_zero.push(kind);
        }
        self
    }

    pub fn with_clock_format(mut self, clock_format: ClockFormat) -> Self {
        self.clock_format = Some(clock_format);
        self
    }

    pub(crate) fn pads(&self, kind: UnitKind) -> bool {
        self.leading_zero.contains(&kind)
    }
}
