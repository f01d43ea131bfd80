// SPDX-License-Identifier: MPL-2.0
//! Progress indicator sub-component: one time-driven fill bar.
//!
//! The indicator knows its own index and duration only. The carousel drives
//! it through [`Message`]s and learns about natural completion through
//! [`Effect::Completed`].

use crate::ui::design_tokens::palette;
use crate::ui::state::SlideDuration;
use iced::Color;
use std::time::Instant;

/// Lifecycle of an indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Empty, not animating.
    Idle,
    /// Filling linearly; `from` is the value at `started_at`.
    Running { started_at: Instant, from: f32 },
    /// Halted at the contained value.
    Paused(f32),
    /// Full, not animating.
    Complete,
}

/// Progress indicator state.
#[derive(Debug, Clone)]
pub struct State {
    index: usize,
    duration: SlideDuration,
    active_color: Color,
    fill_color: Color,
    phase: Phase,
    /// Fill fraction as of the last message handled.
    value: f32,
}

/// Messages for the progress indicator.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Restart from 0 with the active color.
    Start(Instant),
    /// Halt a running animation at its current value.
    Pause(Instant),
    /// Continue a paused animation from where it halted.
    Resume(Instant),
    /// Same as `Start`.
    Reset(Instant),
    /// Return to empty.
    Clear,
    /// Jump to full without signalling completion.
    MarkComplete,
    /// Animation frame.
    Tick(Instant),
}

/// Effects produced by the progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The animation reached 1 on its own.
    Completed { index: usize },
}

impl State {
    #[must_use]
    pub fn new(index: usize, duration: SlideDuration) -> Self {
        Self {
            index,
            duration,
            active_color: palette::PRIMARY_500,
            fill_color: palette::PRIMARY_500,
            phase: Phase::Idle,
            value: 0.0,
        }
    }

    /// Sets the color applied whenever the indicator (re)starts.
    #[must_use]
    pub fn with_active_color(mut self, color: Color) -> Self {
        self.active_color = color;
        self.fill_color = color;
        self
    }

    /// Handle an indicator message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Start(now) | Message::Reset(now) => {
                self.fill_color = self.active_color;
                self.value = 0.0;
                self.phase = Phase::Running {
                    started_at: now,
                    from: 0.0,
                };
                Effect::None
            }
            Message::Pause(now) => {
                if let Phase::Running { .. } = self.phase {
                    self.value = self.interpolate(now);
                    self.phase = Phase::Paused(self.value);
                }
                Effect::None
            }
            Message::Resume(now) => {
                if let Phase::Paused(at) = self.phase {
                    self.phase = Phase::Running {
                        started_at: now,
                        from: at,
                    };
                }
                Effect::None
            }
            Message::Clear => {
                self.value = 0.0;
                self.phase = Phase::Idle;
                Effect::None
            }
            Message::MarkComplete => {
                self.value = 1.0;
                self.phase = Phase::Complete;
                Effect::None
            }
            Message::Tick(now) => {
                if !self.is_running() {
                    return Effect::None;
                }
                self.value = self.interpolate(now);
                if self.value >= 1.0 {
                    self.value = 1.0;
                    self.phase = Phase::Complete;
                    Effect::Completed { index: self.index }
                } else {
                    Effect::None
                }
            }
        }
    }

    /// Linear value at `now`, clamped to `[0, 1]`.
    fn interpolate(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Idle => 0.0,
            Phase::Running { started_at, from } => {
                let elapsed = now.saturating_duration_since(started_at).as_secs_f32();
                let total = self.duration.as_duration().as_secs_f32();
                (from + elapsed / total).clamp(0.0, 1.0)
            }
            Phase::Paused(at) => at,
            Phase::Complete => 1.0,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Fill fraction as of the last handled message.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[must_use]
    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        matches!(self.phase, Phase::Paused(_))
    }
}
