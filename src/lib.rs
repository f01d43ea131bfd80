// SPDX-License-Identifier: MPL-2.0
//! `iced_stories` is a story-style media carousel built with the Iced GUI
//! framework.
//!
//! Slides are paged horizontally, each with a progress indicator that fills
//! over a configurable duration and advances to the next slide on
//! completion. Swiping, scrolling, or the keyboard move between slides; the
//! indicators follow. Localization uses Fluent and preferences live in a
//! TOML settings file.

#![doc(html_root_url = "https://docs.rs/iced_stories/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
