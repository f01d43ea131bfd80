// SPDX-License-Identifier: MPL-2.0
pub mod animated_spinner;
pub mod progress_track;

pub use animated_spinner::AnimatedSpinner;
pub use progress_track::ProgressTrack;
