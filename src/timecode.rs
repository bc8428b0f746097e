/*!
 * Compact minute-based timecode model.
 *
 * AI transcription output addresses time as `MM:SS,t` with tenth-of-second
 * resolution and an unbounded minutes field (no hours). Values are canonical
 * by construction: seconds stay below 60 and tenths below 10, so equality,
 * hashing and rendering all agree.
 */

use std::fmt;

use crate::errors::TimecodeError;

/// Milliseconds per tenth-of-second, the resolution of the notation.
const MS_PER_TENTH: u64 = 100;

/// Tenths per second and per minute, used when decomposing totals.
const TENTHS_PER_SECOND: u64 = 10;
const TENTHS_PER_MINUTE: u64 = 600;

/// A `MM:SS,t` timecode with unbounded minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timecode {
    minutes: u64,
    seconds: u8,
    tenths: u8,
}

impl Timecode {
    /// Creates a timecode, carrying overflowing seconds and tenths upward
    /// so the result is always canonical.
    pub fn new(minutes: u64, seconds: u64, tenths: u64) -> Self {
        let total_tenths = minutes
            .saturating_mul(TENTHS_PER_MINUTE)
            .saturating_add(seconds.saturating_mul(TENTHS_PER_SECOND))
            .saturating_add(tenths);
        Self::from_total_tenths(total_tenths)
    }

    /// Parses the three textual components of a timecode.
    ///
    /// Minutes accept any digit sequence, seconds must be 1-2 digits in
    /// 0-59, tenths exactly one digit. Anything else is rejected with an
    /// error naming the offending component.
    pub fn parse(minutes: &str, seconds: &str, tenths: &str) -> Result<Self, TimecodeError> {
        if !is_digits(minutes) {
            return Err(TimecodeError::InvalidMinutes(minutes.to_string()));
        }
        let minutes_value = minutes
            .parse::<u64>()
            .map_err(|_| TimecodeError::InvalidMinutes(minutes.to_string()))?;

        if !is_digits(seconds) || seconds.len() > 2 {
            return Err(TimecodeError::InvalidSeconds(seconds.to_string()));
        }
        let seconds_value = seconds
            .parse::<u8>()
            .map_err(|_| TimecodeError::InvalidSeconds(seconds.to_string()))?;
        if seconds_value > 59 {
            return Err(TimecodeError::InvalidSeconds(seconds.to_string()));
        }

        if !is_digits(tenths) || tenths.len() != 1 {
            return Err(TimecodeError::InvalidTenths(tenths.to_string()));
        }
        let tenths_value = tenths
            .parse::<u8>()
            .map_err(|_| TimecodeError::InvalidTenths(tenths.to_string()))?;

        Ok(Self {
            minutes: minutes_value,
            seconds: seconds_value,
            tenths: tenths_value,
        })
    }

    /// Converts a millisecond count, rounding to the nearest tenth of a
    /// second and carrying into seconds and minutes as needed.
    pub fn from_millis(ms: u64) -> Self {
        let total_tenths = ms.saturating_add(MS_PER_TENTH / 2) / MS_PER_TENTH;
        Self::from_total_tenths(total_tenths)
    }

    /// Total duration from time zero, in milliseconds. Saturates for
    /// minute counts no real subtitle will ever reach.
    pub fn as_millis(&self) -> u64 {
        self.minutes
            .saturating_mul(TENTHS_PER_MINUTE)
            .saturating_add(u64::from(self.seconds) * TENTHS_PER_SECOND)
            .saturating_add(u64::from(self.tenths))
            .saturating_mul(MS_PER_TENTH)
    }

    /// Minutes component (unbounded).
    pub fn minutes(&self) -> u64 {
        self.minutes
    }

    /// Seconds component, always in 0-59.
    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Tenth-of-second component, always in 0-9.
    pub fn tenths(&self) -> u8 {
        self.tenths
    }

    fn from_total_tenths(total_tenths: u64) -> Self {
        Self {
            minutes: total_tenths / TENTHS_PER_MINUTE,
            seconds: ((total_tenths % TENTHS_PER_MINUTE) / TENTHS_PER_SECOND) as u8,
            tenths: (total_tenths % TENTHS_PER_SECOND) as u8,
        }
    }
}

impl fmt::Display for Timecode {
    /// Canonical `MM:SS,t` rendering with minutes and seconds zero-padded
    /// to two digits (minutes widen past 99 as needed).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02},{}", self.minutes, self.seconds, self.tenths)
    }
}

/// Strictly ASCII digits, non-empty. `u64::from_str` also accepts a leading
/// `+`, which the notation does not.
fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
