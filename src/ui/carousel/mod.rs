// SPDX-License-Identifier: MPL-2.0
//! Story carousel: a horizontally paged strip of slides with one progress
//! indicator per slide.
//!
//! [`component`] owns the playback state; [`strip`] renders it.

pub mod component;
pub mod offsets;
pub mod strip;
pub mod subcomponents;

pub use component::{Effect, Message, Settings, State, SCROLLABLE_ID};
pub use offsets::SlideOffsets;
