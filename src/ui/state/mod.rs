// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Validated value types shared by the carousel and the configuration layer.

pub mod slide_duration;

pub use slide_duration::SlideDuration;
