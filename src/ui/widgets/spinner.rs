// SPDX-License-Identifier: MPL-2.0
//! Busy indicator drawn on a canvas: a faint ring with a rotating half arc.
//!
//! The widget holds no clock. The caller passes the current angle, usually
//! derived from the app's animation tick.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

/// Line segments approximating the arc.
const ARC_SEGMENTS: u16 = 30;

/// Radians per second.
pub const ANGULAR_SPEED: f32 = TAU;

pub struct Spinner {
    cache: Cache,
    angle: f32,
    color: Color,
    size: f32,
}

impl Spinner {
    #[must_use]
    pub fn new(color: Color, angle: f32) -> Self {
        Self {
            cache: Cache::default(),
            angle,
            color,
            size: sizing::ICON_XL,
        }
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Angle after `elapsed_secs` of rotation, wrapped to one turn.
#[must_use]
pub fn angle_at(elapsed_secs: f32) -> f32 {
    (elapsed_secs * ANGULAR_SPEED).rem_euclid(TAU)
}

impl<Message> canvas::Program<Message> for Spinner {
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
                let stroke_width = (self.size / 12.0).max(2.0);
                let radius = frame.width().min(frame.height()) / 2.0 - stroke_width;

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default()
                        .with_width(stroke_width)
                        .with_color(Color {
                            a: 0.25,
                            ..self.color
                        }),
                );

                // Half turn starting at twelve o'clock.
                let start = self.angle - PI / 2.0;
                let arc = Path::new(|builder| {
                    builder.move_to(Point::new(
                        center.x + radius * start.cos(),
                        center.y + radius * start.sin(),
                    ));
                    for i in 1..=ARC_SEGMENTS {
                        let angle = start + PI * f32::from(i) / f32::from(ARC_SEGMENTS);
                        builder.line_to(Point::new(
                            center.x + radius * angle.cos(),
                            center.y + radius * angle.sin(),
                        ));
                    }
                });

                frame.stroke(
                    &arc,
                    Stroke::default()
                        .with_width(stroke_width)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
