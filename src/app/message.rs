// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::media::Asset;
use crate::ui::carousel;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Carousel(carousel::Message),
}

/// Runtime flags passed in from the command line to bootstrap the app.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Slides to show, in order.
    pub assets: Vec<Asset>,
    /// Quit once the last slide finishes, regardless of configuration.
    pub exit_on_finish: bool,
}
