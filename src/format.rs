//! Display formatting for timer values
//!
//! Converts millisecond counts into fixed-width clock strings and back into
//! their components. Hundredths are always truncated from the millisecond
//! remainder, never rounded.

use crate::{Result, StopwatchError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Layout of the rendered time string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFormat {
    /// `HH:MM:SS,hh`
    #[default]
    Full,
    /// `MM:SS:hh`, minutes counted in total
    Compact,
}

impl TimeFormat {
    /// String rendered for zero, used for sizing the display
    pub fn zero(&self) -> &'static str {
        match self {
            TimeFormat::Full => "00:00:00,00",
            TimeFormat::Compact => "00:00:00",
        }
    }
}

/// A millisecond count split into clock components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayParts {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub hundredths: u64,
}

impl DisplayParts {
    /// Decompose a millisecond count
    pub fn from_millis(ms: u64) -> Self {
        let total_secs = ms / 1000;
        Self {
            hours: total_secs / 3600,
            minutes: (total_secs / 60) % 60,
            seconds: total_secs % 60,
            hundredths: (ms % 1000) / 10,
        }
    }

    /// Milliseconds represented by these components (sub-hundredth part lost).
    ///
    /// `None` if the total does not fit in a `u64`.
    pub fn to_millis(&self) -> Option<u64> {
        self.hours
            .checked_mul(3600)?
            .checked_add(self.minutes.checked_mul(60)?)?
            .checked_add(self.seconds)?
            .checked_mul(1000)?
            .checked_add(self.hundredths.checked_mul(10)?)
    }

    /// Render in the given layout
    pub fn render(&self, style: TimeFormat) -> String {
        match style {
            TimeFormat::Full => format!(
                "{:02}:{:02}:{:02},{:02}",
                self.hours, self.minutes, self.seconds, self.hundredths
            ),
            TimeFormat::Compact => format!(
                "{:02}:{:02}:{:02}",
                self.hours * 60 + self.minutes,
                self.seconds,
                self.hundredths
            ),
        }
    }
}

impl fmt::Display for DisplayParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(TimeFormat::Full))
    }
}

/// Format milliseconds as a clock string
///
/// # Examples
/// ```
/// use stopwatch::format::{format_millis, TimeFormat};
///
/// assert_eq!(format_millis(0, TimeFormat::Full), "00:00:00,00");
/// assert_eq!(format_millis(61_034, TimeFormat::Full), "00:01:01,03");
/// assert_eq!(format_millis(61_034, TimeFormat::Compact), "01:01:03");
/// ```
pub fn format_millis(ms: u64, style: TimeFormat) -> String {
    DisplayParts::from_millis(ms).render(style)
}

/// Recover the components from a string produced by [`format_millis`]
pub fn parse_display(input: &str, style: TimeFormat) -> Result<DisplayParts> {
    let input = input.trim();
    let fields: Vec<&str> = match style {
        TimeFormat::Full => {
            let (clock, frac) = input
                .split_once(',')
                .ok_or_else(|| format_error(input, "missing ',' before hundredths"))?;
            let mut fields: Vec<&str> = clock.split(':').collect();
            fields.push(frac);
            fields
        }
        TimeFormat::Compact => input.split(':').collect(),
    };

    let expected = match style {
        TimeFormat::Full => 4,
        TimeFormat::Compact => 3,
    };
    if fields.len() != expected {
        return Err(format_error(input, "wrong number of fields"));
    }

    let mut values = Vec::with_capacity(fields.len());
    for field in &fields {
        if field.len() < 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format_error(input, "fields must be at least two digits"));
        }
        let value: u64 = field
            .parse()
            .map_err(|_| format_error(input, "field out of range"))?;
        values.push(value);
    }

    let hundredths_field = fields[fields.len() - 1];
    if hundredths_field.len() != 2 {
        return Err(format_error(input, "hundredths must be exactly two digits"));
    }

    let parts = match style {
        TimeFormat::Full => DisplayParts {
            hours: values[0],
            minutes: values[1],
            seconds: values[2],
            hundredths: values[3],
        },
        TimeFormat::Compact => DisplayParts {
            hours: values[0] / 60,
            minutes: values[0] % 60,
            seconds: values[1],
            hundredths: values[2],
        },
    };

    if parts.minutes >= 60 || parts.seconds >= 60 {
        return Err(format_error(input, "minutes and seconds must be below 60"));
    }
    Ok(parts)
}

fn format_error(input: &str, reason: &str) -> StopwatchError {
    StopwatchError::FormatError(format!("'{}': {}", input, reason))
}
