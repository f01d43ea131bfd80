// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Playback**: Per-slide duration and its bounds
//! - **Indicators**: Progress indicator layout
//! - **Tick**: Animation tick cadence

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Default time a slide stays on screen before auto-advancing (in milliseconds).
pub const DEFAULT_SLIDE_DURATION_MS: u64 = 5_000;

/// Minimum slide duration (in milliseconds).
pub const MIN_SLIDE_DURATION_MS: u64 = 1_000;

/// Maximum slide duration (in milliseconds).
pub const MAX_SLIDE_DURATION_MS: u64 = 60_000;

/// Whether the first indicator starts as soon as the carousel mounts.
pub const DEFAULT_AUTOSTART: bool = true;

/// Whether the application closes once the last slide has been viewed.
pub const DEFAULT_EXIT_ON_FINISH: bool = false;

// ==========================================================================
// Indicator Defaults
// ==========================================================================

/// Horizontal inset subtracted from each indicator's equal share of the row.
pub const DEFAULT_INDICATOR_INSET: f32 = 20.0;

/// Largest accepted indicator inset.
pub const MAX_INDICATOR_INSET: f32 = 200.0;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Interval between animation ticks (in milliseconds), roughly 60 fps.
pub const TICK_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SLIDE_DURATION_MS > 0);
    assert!(MIN_SLIDE_DURATION_MS <= DEFAULT_SLIDE_DURATION_MS);
    assert!(DEFAULT_SLIDE_DURATION_MS <= MAX_SLIDE_DURATION_MS);
    assert!(DEFAULT_INDICATOR_INSET >= 0.0);
    assert!(DEFAULT_INDICATOR_INSET <= MAX_INDICATOR_INSET);
    assert!(TICK_INTERVAL_MS < MIN_SLIDE_DURATION_MS);
};
