// SPDX-License-Identifier: MPL-2.0
//! Horizontal fill bar drawn with Canvas, anchored at its left edge.

use crate::ui::design_tokens::{radius, sizing};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Size, Theme};

/// A rounded track with a left-anchored fill covering `fill` of its width.
pub struct ProgressTrack {
    cache: Cache,
    fill: f32,
    track_color: Color,
    fill_color: Color,
    width: f32,
    height: f32,
}

impl ProgressTrack {
    /// Creates a track of the given width; `fill` is clamped to `[0, 1]`.
    #[must_use]
    pub fn new(fill: f32, width: f32, track_color: Color, fill_color: Color) -> Self {
        Self {
            cache: Cache::default(),
            fill: fill.clamp(0.0, 1.0),
            track_color,
            fill_color,
            width: width.max(0.0),
            height: sizing::INDICATOR_HEIGHT,
        }
    }

    /// Width of the filled part for a given track width.
    #[must_use]
    pub fn fill_width(&self, track_width: f32) -> f32 {
        track_width * self.fill
    }

    /// Creates a Canvas widget from this track.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let width = self.width;
        let height = self.height;
        Canvas::new(self)
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .into()
    }
}

fn rounded_bar(width: f32, height: f32) -> Path {
    let corner = radius::INDICATOR.min(height / 2.0).min(width / 2.0);
    Path::rounded_rectangle(Point::ORIGIN, Size::new(width, height), corner.into())
}

impl<Message> canvas::Program<Message> for ProgressTrack {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let width = frame.width();
                let height = frame.height();

                frame.fill(&rounded_bar(width, height), self.track_color);

                let filled = self.fill_width(width);
                if filled > 0.0 {
                    frame.fill(&rounded_bar(filled, height), self.fill_color);
                }
            });

        vec![geometry]
    }
}
