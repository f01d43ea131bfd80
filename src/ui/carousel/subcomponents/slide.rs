// SPDX-License-Identifier: MPL-2.0
//! Slide renderer sub-component: one media item in a viewport-wide frame.

use crate::config::UnsupportedMedia;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{Asset, ImageData, MediaKind};
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{center, column, container, image, text, Space};
use iced::{ContentFit, Element, Length, Padding};

/// Load progress of a slide's media.
#[derive(Debug, Clone)]
pub enum LoadState {
    /// Media kind has nothing to load.
    NotApplicable,
    Loading,
    Loaded(ImageData),
    Failed(Error),
}

/// Slide state: the asset and its load progress.
#[derive(Debug, Clone)]
pub struct State {
    asset: Asset,
    load: LoadState,
}

/// Messages for the slide sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<ImageData, Error>),
}

impl State {
    #[must_use]
    pub fn new(asset: Asset) -> Self {
        let load = match asset.kind {
            MediaKind::Image => LoadState::Loading,
            MediaKind::Unsupported(_) => LoadState::NotApplicable,
        };
        Self { asset, load }
    }

    /// Handle a slide message.
    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::Loaded(Ok(data)) => self.load = LoadState::Loaded(data),
            Message::Loaded(Err(err)) => {
                log::warn!("Failed to load {}: {}", self.asset.uri, err);
                self.load = LoadState::Failed(err);
            }
        }
    }

    /// URI to fetch if this slide still waits for its media.
    #[must_use]
    pub fn pending_uri(&self) -> Option<&str> {
        match self.load {
            LoadState::Loading => Some(&self.asset.uri),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    #[must_use]
    pub fn asset(&self) -> &Asset {
        &self.asset
    }

    #[must_use]
    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// Basic accessible label, e.g. "Image 2 of 5".
    #[must_use]
    pub fn label(&self, i18n: &I18n, index: usize, total: usize) -> String {
        let position = (index + 1).to_string();
        let total = total.to_string();
        let key = match self.asset.kind {
            MediaKind::Image => "slide-image-label",
            MediaKind::Unsupported(_) => "slide-unsupported-label",
        };
        i18n.tr_with_args(key, &[("index", position.as_str()), ("total", total.as_str())])
    }
}

/// Everything a slide needs from its surroundings to render.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub width: f32,
    pub height: f32,
    pub unsupported: UnsupportedMedia,
    pub spinner_rotation: f32,
}

/// What a slide frame shows.
#[derive(Debug)]
pub enum Content<'a> {
    Image(&'a ImageData),
    Error(&'a Error),
    Spinner,
    Blank,
    /// Notice naming the unsupported media type.
    Placeholder(&'a str),
}

impl State {
    /// Picks the frame content for the current load state.
    #[must_use]
    pub fn content(&self, unsupported: UnsupportedMedia) -> Content<'_> {
        match (&self.asset.kind, &self.load) {
            (MediaKind::Image, LoadState::Loaded(data)) => Content::Image(data),
            (MediaKind::Image, LoadState::Failed(err)) => Content::Error(err),
            (MediaKind::Image, _) => Content::Spinner,
            (MediaKind::Unsupported(kind), _) => match unsupported {
                UnsupportedMedia::Blank => Content::Blank,
                UnsupportedMedia::Placeholder => Content::Placeholder(kind),
            },
        }
    }
}

/// Renders a slide into a frame of exactly `ctx.width` by `ctx.height`.
pub fn view<'a, M: 'static>(slide: &'a State, ctx: &ViewContext<'_>) -> Element<'a, M> {
    let content: Element<'a, M> = match slide.content(ctx.unsupported) {
        Content::Image(data) => image(data.handle.clone())
            .content_fit(ContentFit::Cover)
            .border_radius(radius::SLIDE)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Content::Error(err) => {
            let message = text(ctx.i18n.tr(err.i18n_key()))
                .size(typography::BODY)
                .color(ctx.colors.error);
            let details = text(err.to_string())
                .size(typography::CAPTION)
                .color(ctx.colors.text_secondary);
            center(column![message, details].spacing(spacing::XS)).into()
        }
        Content::Spinner => {
            center(AnimatedSpinner::new(ctx.colors.spinner, ctx.spinner_rotation).into_element())
                .into()
        }
        Content::Blank => Space::new().width(Length::Fill).height(Length::Fill).into(),
        Content::Placeholder(kind) => center(
            text(ctx.i18n.tr_with_args("slide-unsupported", &[("kind", kind)]))
                .size(typography::BODY)
                .color(ctx.colors.text_secondary),
        )
        .into(),
    };

    container(content)
        .width(Length::Fixed(ctx.width))
        .height(Length::Fixed(ctx.height))
        .padding(Padding {
            top: sizing::SLIDE_TOP_MARGIN,
            right: sizing::SLIDE_PADDING_X,
            bottom: 0.0,
            left: sizing::SLIDE_PADDING_X,
        })
        .clip(true)
        .into()
}
