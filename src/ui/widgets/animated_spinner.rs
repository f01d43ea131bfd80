// SPDX-License-Identifier: MPL-2.0
//! Loading spinner drawn with Canvas, rotated by the caller on every tick.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, path, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::{FRAC_PI_2, PI};

const STROKE_WIDTH: f32 = 3.0;
const TRACK_ALPHA: f32 = 0.25;

/// Half-circle arc over a faint full circle.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a spinner with the given color and rotation angle in radians.
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
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
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH - 1.0;

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default().with_width(STROKE_WIDTH).with_color(Color {
                        a: TRACK_ALPHA,
                        ..self.color
                    }),
                );

                // Arc starts at 12 o'clock when rotation is zero.
                let start = self.rotation - FRAC_PI_2;
                let arc = Path::new(|builder| {
                    builder.arc(path::Arc {
                        center,
                        radius,
                        start_angle: Radians(start),
                        end_angle: Radians(start + PI),
                    });
                });

                frame.stroke(
                    &arc,
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
