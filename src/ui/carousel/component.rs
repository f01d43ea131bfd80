// SPDX-License-Identifier: MPL-2.0
//! Carousel component encapsulating playback state and update logic.
//!
//! The controller is the single source of truth for the current slide. Two
//! paths change it:
//!
//! - the timer path, when the current indicator completes on its own;
//! - the scroll path, when the scroller settles on a different slide
//!   (user swipes, keyboard navigation, and snapping all end up here).
//!
//! Both paths end in the same index-changed effect: start the indicator of
//! the new slide and scroll it into view.

use super::offsets::SlideOffsets;
use super::subcomponents::{indicator, slide, snap};
use crate::config::{defaults, Config, UnsupportedMedia};
use crate::error::Error;
use crate::media::{self, Asset, ImageData};
use crate::ui::design_tokens::palette;
use crate::ui::state::SlideDuration;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{event, keyboard, window, Color, Task};
use std::f32::consts::TAU;
use std::time::Instant;

/// Identifier used for the slide scrollable widget.
pub const SCROLLABLE_ID: &str = "carousel-slide-scrollable";

/// Spinner rotation per tick, in radians.
const SPINNER_STEP: f32 = 0.12;

/// Playback settings resolved from configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub slide_duration: SlideDuration,
    pub autostart: bool,
    pub unsupported_media: UnsupportedMedia,
    pub indicator_inset: f32,
    pub active_color: Color,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            slide_duration: SlideDuration::default(),
            autostart: defaults::DEFAULT_AUTOSTART,
            unsupported_media: UnsupportedMedia::default(),
            indicator_inset: defaults::DEFAULT_INDICATOR_INSET,
            active_color: palette::PRIMARY_500,
        }
    }
}

impl Settings {
    /// Resolves settings from a loaded configuration, clamping out-of-range values.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let slide_duration = config
            .playback
            .slide_duration_ms
            .map(SlideDuration::from_millis)
            .unwrap_or_default();
        let indicator_inset = config
            .display
            .indicator_inset
            .filter(|inset| inset.is_finite())
            .unwrap_or(defaults::DEFAULT_INDICATOR_INSET)
            .clamp(0.0, defaults::MAX_INDICATOR_INSET);

        Self {
            slide_duration,
            autostart: config
                .playback
                .autostart
                .unwrap_or(defaults::DEFAULT_AUTOSTART),
            unsupported_media: config.display.unsupported_media.unwrap_or_default(),
            indicator_inset,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_active_color(mut self, color: Color) -> Self {
        self.active_color = color;
        self
    }
}

/// Messages handled by the carousel.
#[derive(Debug, Clone)]
pub enum Message {
    /// Animation frame.
    Tick(Instant),
    /// Scroll notification from the slide scroller.
    Scrolled { offset: f32, viewport_width: f32 },
    /// Native window or keyboard event.
    RawEvent(event::Event),
    SlideLoaded {
        index: usize,
        result: Result<ImageData, Error>,
    },
    Next,
    Previous,
    First,
    Last,
    TogglePause,
    /// Pointer pressed on the slide area.
    HoldStarted,
    /// Pointer released on the slide area.
    HoldReleased,
}

/// Effects returned to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The last slide's indicator completed while it was current.
    Finished,
}

/// Carousel state.
#[derive(Debug, Clone)]
pub struct State {
    settings: Settings,
    slides: Vec<slide::State>,
    indicators: Vec<indicator::State>,
    current_index: usize,
    offsets: SlideOffsets,
    snap: snap::State,
    /// Set while a pointer hold paused the current indicator.
    held: bool,
    spinner_rotation: f32,
}

impl State {
    /// Builds the carousel and the tasks that load its images.
    pub fn new(assets: Vec<Asset>, settings: Settings) -> (Self, Task<Message>) {
        Self::new_at(assets, settings, Instant::now())
    }

    /// Same as [`State::new`] with an explicit start time.
    pub fn new_at(assets: Vec<Asset>, settings: Settings, now: Instant) -> (Self, Task<Message>) {
        let count = assets.len();
        let indicators = (0..count)
            .map(|index| {
                indicator::State::new(index, settings.slide_duration)
                    .with_active_color(settings.active_color)
            })
            .collect();
        let slides: Vec<slide::State> = assets.into_iter().map(slide::State::new).collect();

        let loads: Vec<Task<Message>> = slides
            .iter()
            .enumerate()
            .filter_map(|(index, slide)| {
                let uri = slide.pending_uri()?.to_string();
                Some(Task::perform(media::load_image(uri), move |result| {
                    Message::SlideLoaded { index, result }
                }))
            })
            .collect();

        let mut state = Self {
            settings,
            slides,
            indicators,
            current_index: 0,
            offsets: SlideOffsets::new(count, 0.0),
            snap: snap::State::default(),
            held: false,
            spinner_rotation: 0.0,
        };

        if state.settings.autostart {
            state.send(0, indicator::Message::Start(now));
        }

        (state, Task::batch(loads))
    }

    pub fn update(&mut self, message: Message) -> (Effect, Task<Message>) {
        self.update_at(message, Instant::now())
    }

    /// Handles `message` as if it arrived at `now`.
    ///
    /// `Message::Tick` carries its own time and ignores `now`.
    pub fn update_at(&mut self, message: Message, now: Instant) -> (Effect, Task<Message>) {
        match message {
            Message::Tick(at) => self.handle_tick(at),
            Message::Scrolled {
                offset,
                viewport_width,
            } => (Effect::None, self.handle_scrolled(offset, viewport_width, now)),
            Message::RawEvent(event) => (Effect::None, self.handle_raw_event(event, now)),
            Message::SlideLoaded { index, result } => {
                if let Some(slide) = self.slides.get_mut(index) {
                    slide.handle(slide::Message::Loaded(result));
                }
                (Effect::None, Task::none())
            }
            Message::Next => (Effect::None, self.navigate_to(self.current_index + 1, now)),
            Message::Previous => match self.current_index.checked_sub(1) {
                Some(target) => (Effect::None, self.navigate_to(target, now)),
                None => (Effect::None, Task::none()),
            },
            Message::First => (Effect::None, self.navigate_to(0, now)),
            Message::Last => match self.len().checked_sub(1) {
                Some(target) => (Effect::None, self.navigate_to(target, now)),
                None => (Effect::None, Task::none()),
            },
            Message::TogglePause => {
                self.toggle_pause(now);
                (Effect::None, Task::none())
            }
            Message::HoldStarted => {
                if self.current_indicator().is_some_and(indicator::State::is_running) {
                    self.send(self.current_index, indicator::Message::Pause(now));
                    self.held = true;
                }
                (Effect::None, Task::none())
            }
            Message::HoldReleased => {
                if std::mem::take(&mut self.held) {
                    self.send(self.current_index, indicator::Message::Resume(now));
                }
                (Effect::None, Task::none())
            }
        }
    }

    fn handle_tick(&mut self, now: Instant) -> (Effect, Task<Message>) {
        if self.slides.iter().any(slide::State::is_loading) {
            self.spinner_rotation = (self.spinner_rotation + SPINNER_STEP) % TAU;
        }

        let mut effect = Effect::None;
        let mut tasks = Vec::new();

        let completed: Vec<usize> = self
            .indicators
            .iter_mut()
            .filter_map(|ind| match ind.handle(indicator::Message::Tick(now)) {
                indicator::Effect::Completed { index } => Some(index),
                indicator::Effect::None => None,
            })
            .collect();

        for index in completed {
            let (completion_effect, task) = self.on_indicator_completed(index, now);
            if completion_effect == Effect::Finished {
                effect = Effect::Finished;
            }
            tasks.push(task);
        }

        let snap_offsets = self.offsets;
        if let snap::Effect::SnapTo(target) = self.snap.handle(snap::Message::Tick {
            now,
            offsets: snap_offsets,
        }) {
            log::debug!("Snapping idle scroller to slide {}", target);
            tasks.push(self.scroll_to(target));
        }

        (effect, Task::batch(tasks))
    }

    fn on_indicator_completed(&mut self, index: usize, now: Instant) -> (Effect, Task<Message>) {
        if index != self.current_index {
            log::debug!(
                "Ignoring completion of indicator {} (current is {})",
                index,
                self.current_index
            );
            return (Effect::None, Task::none());
        }

        if index + 1 < self.len() {
            self.current_index = index + 1;
            log::debug!("Auto-advanced to slide {}", self.current_index);
            (Effect::None, self.on_current_index_changed(now))
        } else {
            log::info!("Carousel finished after {} slides", self.len());
            (Effect::Finished, Task::none())
        }
    }

    fn handle_scrolled(&mut self, offset: f32, viewport_width: f32, now: Instant) -> Task<Message> {
        self.offsets.set_slide_width(viewport_width);

        match self.offsets.resolve(offset) {
            Some(target) => {
                self.snap.handle(snap::Message::Aligned);
                self.reconcile(target, now)
            }
            None => {
                if !self.offsets.is_empty() && self.offsets.slide_width() > 0.0 {
                    self.snap.handle(snap::Message::Unaligned { offset, at: now });
                }
                Task::none()
            }
        }
    }

    /// Applies the departing-slide transition and switches to `target`.
    fn reconcile(&mut self, target: usize, now: Instant) -> Task<Message> {
        if target == self.current_index || target >= self.len() {
            return Task::none();
        }

        let departing = self.current_index;
        if target < departing {
            self.send(departing, indicator::Message::Clear);
        } else {
            self.send(departing, indicator::Message::MarkComplete);
        }
        self.current_index = target;
        self.held = false;
        log::debug!("Moved from slide {} to slide {}", departing, target);

        self.on_current_index_changed(now)
    }

    fn navigate_to(&mut self, target: usize, now: Instant) -> Task<Message> {
        let Some(last) = self.len().checked_sub(1) else {
            return Task::none();
        };
        self.reconcile(target.min(last), now)
    }

    fn on_current_index_changed(&mut self, now: Instant) -> Task<Message> {
        self.send(self.current_index, indicator::Message::Start(now));
        self.scroll_to(self.current_index)
    }

    fn scroll_to(&self, index: usize) -> Task<Message> {
        operation::snap_to(
            Id::new(SCROLLABLE_ID),
            RelativeOffset {
                x: self.offsets.relative_x(index),
                y: 0.0,
            },
        )
    }

    fn toggle_pause(&mut self, now: Instant) {
        let Some(current) = self.current_indicator() else {
            return;
        };
        match current.phase() {
            indicator::Phase::Running { .. } => {
                self.send(self.current_index, indicator::Message::Pause(now));
            }
            indicator::Phase::Paused(_) => {
                self.send(self.current_index, indicator::Message::Resume(now));
            }
            // Playback that never started, e.g. with autostart disabled.
            indicator::Phase::Idle => {
                self.send(self.current_index, indicator::Message::Start(now));
            }
            indicator::Phase::Complete => {}
        }
        self.held = false;
    }

    fn handle_raw_event(&mut self, event: event::Event, now: Instant) -> Task<Message> {
        match event {
            event::Event::Window(window::Event::Resized(size)) => {
                if self.offsets.set_slide_width(size.width) {
                    self.scroll_to(self.current_index)
                } else {
                    Task::none()
                }
            }
            event::Event::Keyboard(keyboard_event) => match keyboard_event {
                keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::ArrowRight),
                    ..
                } => self.update_at(Message::Next, now).1,
                keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::ArrowLeft),
                    ..
                } => self.update_at(Message::Previous, now).1,
                keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Home),
                    ..
                } => self.update_at(Message::First, now).1,
                keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::End),
                    ..
                } => self.update_at(Message::Last, now).1,
                keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Space),
                    ..
                } => {
                    self.toggle_pause(now);
                    Task::none()
                }
                _ => Task::none(),
            },
            _ => Task::none(),
        }
    }

    fn send(&mut self, index: usize, msg: indicator::Message) {
        if let Some(ind) = self.indicators.get_mut(index) {
            // Only natural completion (Tick) produces an effect.
            let _ = ind.handle(msg);
        }
    }

    fn current_indicator(&self) -> Option<&indicator::State> {
        self.indicators.get(self.current_index)
    }

    /// Whether the host should keep delivering `Message::Tick`.
    #[must_use]
    pub fn needs_ticks(&self) -> bool {
        self.indicators.iter().any(indicator::State::is_running)
            || self.slides.iter().any(slide::State::is_loading)
            || self.snap.is_pending()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn indicator(&self, index: usize) -> Option<&indicator::State> {
        self.indicators.get(index)
    }

    #[must_use]
    pub fn indicators(&self) -> &[indicator::State] {
        &self.indicators
    }

    #[must_use]
    pub fn slide(&self, index: usize) -> Option<&slide::State> {
        self.slides.get(index)
    }

    #[must_use]
    pub fn slides(&self) -> &[slide::State] {
        &self.slides
    }

    #[must_use]
    pub fn current_slide(&self) -> Option<&slide::State> {
        self.slides.get(self.current_index)
    }

    #[must_use]
    pub fn offsets(&self) -> &SlideOffsets {
        &self.offsets
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// Width of each indicator for a row of `total_width` pixels.
    #[must_use]
    pub fn indicator_width(&self, total_width: f32) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        let share = (total_width / self.len() as f32).floor();
        (share - self.settings.indicator_inset).max(0.0)
    }
}
