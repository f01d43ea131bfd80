// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard events left unhandled by widgets and window resizes are routed
//! to the carousel. The animation tick only runs while the carousel asks
//! for it.

use super::Message;
use crate::config::defaults::TICK_INTERVAL_MS;
use crate::ui::carousel;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes native events to the carousel.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match &event {
        event::Event::Window(iced::window::Event::Resized(_)) => {
            Some(Message::Carousel(carousel::Message::RawEvent(event.clone())))
        }
        event::Event::Keyboard(..) => match status {
            event::Status::Ignored => {
                Some(Message::Carousel(carousel::Message::RawEvent(event.clone())))
            }
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Creates the animation tick while indicators run, images load, or a snap
/// is pending.
pub fn create_tick_subscription(needs_ticks: bool) -> Subscription<Message> {
    if needs_ticks {
        time::every(Duration::from_millis(TICK_INTERVAL_MS))
            .map(|instant| Message::Carousel(carousel::Message::Tick(instant)))
    } else {
        Subscription::none()
    }
}
