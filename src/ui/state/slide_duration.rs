// SPDX-License-Identifier: MPL-2.0
//! Slide duration domain type.
//!
//! This module provides a type-safe wrapper for the time one progress
//! indicator takes to fill, in milliseconds.

use crate::config::{DEFAULT_SLIDE_DURATION_MS, MAX_SLIDE_DURATION_MS, MIN_SLIDE_DURATION_MS};
use std::time::Duration;

/// Per-slide display duration.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–60 seconds).
///
/// # Example
///
/// ```
/// use iced_stories::ui::state::SlideDuration;
///
/// let duration = SlideDuration::from_millis(4_000);
/// assert_eq!(duration.as_millis(), 4_000);
///
/// // Values outside range are clamped
/// let too_short = SlideDuration::from_millis(10);
/// assert_eq!(too_short.as_millis(), 1_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideDuration(u64);

impl SlideDuration {
    /// Creates a new slide duration, clamping to valid range.
    #[must_use]
    pub fn from_millis(value: u64) -> Self {
        Self(value.clamp(MIN_SLIDE_DURATION_MS, MAX_SLIDE_DURATION_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the duration as a `std::time::Duration`.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for SlideDuration {
    fn default() -> Self {
        Self(DEFAULT_SLIDE_DURATION_MS)
    }
}

impl From<Duration> for SlideDuration {
    fn from(duration: Duration) -> Self {
        Self::from_millis(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_millis_clamps_to_valid_range() {
        assert_eq!(SlideDuration::from_millis(0).as_millis(), MIN_SLIDE_DURATION_MS);
        assert_eq!(
            SlideDuration::from_millis(u64::MAX).as_millis(),
            MAX_SLIDE_DURATION_MS
        );
    }

    #[test]
    fn from_millis_accepts_valid_values() {
        assert_eq!(SlideDuration::from_millis(1_000).as_millis(), 1_000);
        assert_eq!(SlideDuration::from_millis(12_345).as_millis(), 12_345);
    }

    #[test]
    fn default_returns_expected_value() {
        assert_eq!(
            SlideDuration::default().as_millis(),
            DEFAULT_SLIDE_DURATION_MS
        );
    }

    #[test]
    fn converts_from_std_duration() {
        let duration = SlideDuration::from(Duration::from_secs(3));
        assert_eq!(duration.as_duration(), Duration::from_secs(3));
    }
}
