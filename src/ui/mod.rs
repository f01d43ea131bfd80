// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! - [`carousel`] - Story carousel: slides, progress indicators and their coordination
//! - [`state`] - Validated value types (slide duration)
//! - [`widgets`] - Custom canvas widgets (progress track, spinner)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod carousel;
pub mod design_tokens;
pub mod state;
pub mod theming;
pub mod widgets;
