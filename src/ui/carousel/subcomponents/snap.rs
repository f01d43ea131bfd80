// SPDX-License-Identifier: MPL-2.0
//! Snap sub-component: aligns the scroller after a scroll stops between slides.

use crate::ui::carousel::offsets::SlideOffsets;
use std::time::{Duration, Instant};

/// How long the scroller must stay still before it snaps.
pub const SNAP_IDLE: Duration = Duration::from_millis(120);

/// Pending snap, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct State {
    pending: Option<Pending>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Pending {
    offset: f32,
    at: Instant,
}

/// Messages for the snap sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// The scroller stopped at an offset between slides.
    Unaligned { offset: f32, at: Instant },
    /// The scroller is aligned with a slide.
    Aligned,
    /// Animation frame.
    Tick { now: Instant, offsets: SlideOffsets },
}

/// Effects produced by the snap sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Scroll to this slide.
    SnapTo(usize),
}

impl State {
    /// Handle a snap message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Unaligned { offset, at } => {
                self.pending = Some(Pending { offset, at });
                Effect::None
            }
            Message::Aligned => {
                self.pending = None;
                Effect::None
            }
            Message::Tick { now, offsets } => {
                let Some(pending) = self.pending else {
                    return Effect::None;
                };
                if now.saturating_duration_since(pending.at) < SNAP_IDLE {
                    return Effect::None;
                }
                self.pending = None;
                offsets
                    .nearest(pending.offset)
                    .map_or(Effect::None, Effect::SnapTo)
            }
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_for_idle_before_snapping() {
        let t0 = Instant::now();
        let offsets = SlideOffsets::new(3, 400.0);
        let mut snap = State::default();
        snap.handle(Message::Unaligned { offset: 530.0, at: t0 });

        let early = snap.handle(Message::Tick {
            now: t0 + Duration::from_millis(50),
            offsets,
        });
        assert_eq!(early, Effect::None);
        assert!(snap.is_pending());

        let settled = snap.handle(Message::Tick {
            now: t0 + SNAP_IDLE,
            offsets,
        });
        assert_eq!(settled, Effect::SnapTo(1));
        assert!(!snap.is_pending());
    }

    #[test]
    fn snaps_past_half_a_slide_to_the_next() {
        let t0 = Instant::now();
        let offsets = SlideOffsets::new(3, 400.0);
        let mut snap = State::default();
        snap.handle(Message::Unaligned { offset: 610.0, at: t0 });
        let effect = snap.handle(Message::Tick {
            now: t0 + Duration::from_secs(1),
            offsets,
        });
        assert_eq!(effect, Effect::SnapTo(2));
    }

    #[test]
    fn newer_scroll_restarts_the_wait() {
        let t0 = Instant::now();
        let offsets = SlideOffsets::new(3, 400.0);
        let mut snap = State::default();
        snap.handle(Message::Unaligned { offset: 100.0, at: t0 });
        snap.handle(Message::Unaligned {
            offset: 150.0,
            at: t0 + Duration::from_millis(100),
        });
        let effect = snap.handle(Message::Tick {
            now: t0 + Duration::from_millis(150),
            offsets,
        });
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn alignment_cancels_pending_snap() {
        let t0 = Instant::now();
        let mut snap = State::default();
        snap.handle(Message::Unaligned { offset: 100.0, at: t0 });
        snap.handle(Message::Aligned);
        let effect = snap.handle(Message::Tick {
            now: t0 + Duration::from_secs(1),
            offsets: SlideOffsets::new(3, 400.0),
        });
        assert_eq!(effect, Effect::None);
    }
}
