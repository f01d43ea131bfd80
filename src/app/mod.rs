// SPDX-License-Identifier: MPL-2.0
//! Application root state wiring the carousel to configuration, localization,
//! and the window.
//!
//! The carousel reports [`carousel::Effect::Finished`] once a traversal
//! completes; the app logs it and quits when asked to.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, defaults};
use crate::i18n::fluent::I18n;
use crate::ui::carousel;
use crate::ui::theming::AppTheme;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: AppTheme,
    carousel: carousel::State,
    exit_on_finish: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("slides", &self.carousel.len())
            .field("current_index", &self.carousel.current_index())
            .field("exit_on_finish", &self.exit_on_finish)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 240;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration and builds the carousel from `flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        if let Some(key) = config_warning {
            log::warn!("{}", i18n.tr(&key));
        }
        Self::with_config(flags, &config, i18n)
    }

    fn with_config(flags: Flags, config: &config::Config, i18n: I18n) -> (Self, Task<Message>) {
        let theme = AppTheme::new(config.general.theme_mode);
        let settings =
            carousel::Settings::from_config(config).with_active_color(theme.colors.indicator_fill);
        let exit_on_finish = flags.exit_on_finish
            || config
                .playback
                .exit_on_finish
                .unwrap_or(defaults::DEFAULT_EXIT_ON_FINISH);

        log::info!(
            "Starting carousel with {} slides ({} ms each)",
            flags.assets.len(),
            settings.slide_duration.as_millis()
        );
        let (carousel, task) = carousel::State::new(flags.assets, settings);

        let app = Self {
            i18n,
            theme,
            carousel,
            exit_on_finish,
        };
        (app, task.map(Message::Carousel))
    }

    fn title(&self) -> String {
        let total = self.carousel.len();
        match self.carousel.current_slide() {
            Some(slide) => {
                let label = slide.label(&self.i18n, self.carousel.current_index(), total);
                self.i18n
                    .tr_with_args("window-title-slide", &[("label", label.as_str())])
            }
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme.mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.carousel.needs_ticks()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Carousel(msg) => {
                let (effect, task) = self.carousel.update(msg);
                let task = task.map(Message::Carousel);
                match effect {
                    carousel::Effect::None => task,
                    carousel::Effect::Finished => self.handle_finished(task),
                }
            }
        }
    }

    fn handle_finished(&self, task: Task<Message>) -> Task<Message> {
        log::info!("All {} slides shown", self.carousel.len());
        if self.exit_on_finish {
            Task::batch([task, iced::exit()])
        } else {
            task
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            colors: &self.theme.colors,
            carousel: &self.carousel,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::Asset;
    use std::time::{Duration, Instant};

    fn app(assets: Vec<Asset>, exit_on_finish: bool) -> App {
        let flags = Flags {
            lang: Some("en-US".to_string()),
            assets,
            exit_on_finish,
        };
        let config = config::Config::default();
        let i18n = I18n::new(flags.lang.clone(), &config);
        App::with_config(flags, &config, i18n).0
    }

    #[test]
    fn title_without_slides_is_app_name() {
        let app = app(Vec::new(), false);
        assert_eq!(app.title(), "Stories");
    }

    #[test]
    fn title_names_current_slide() {
        let app = app(vec![Asset::image("a.png"), Asset::image("b.png")], false);
        assert_eq!(app.title(), "Stories · Image 1 of 2");
    }

    #[test]
    fn carousel_messages_are_forwarded() {
        let mut app = app(vec![Asset::image("a.png"), Asset::image("b.png")], false);
        let _ = app.update(Message::Carousel(carousel::Message::Next));
        assert_eq!(app.carousel.current_index(), 1);
        assert_eq!(app.title(), "Stories · Image 2 of 2");
    }

    #[test]
    fn ticks_are_needed_only_while_playing() {
        let mut app = app(vec![Asset::new("clip.mp4", "video")], false);
        assert!(app.carousel.needs_ticks());

        let later = Instant::now() + Duration::from_secs(120);
        let _ = app.update(Message::Carousel(carousel::Message::Tick(later)));
        assert!(!app.carousel.needs_ticks());
    }

    #[test]
    fn exit_flag_overrides_config() {
        let app = app(Vec::new(), true);
        assert!(app.exit_on_finish);
    }
}
