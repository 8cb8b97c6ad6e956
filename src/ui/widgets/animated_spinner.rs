// SPDX-License-Identifier: MPL-2.0
//! Ring spinner drawn on a `Canvas`.
//!
//! Four arcs share the same start angle but lag behind each other slightly,
//! which gives the classic "ring" loader its accelerating head.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Angular lag between consecutive arcs, in radians.
const ARC_LAG: f32 = 0.15;
const ARC_COUNT: usize = 4;
const ARC_SWEEP: f32 = PI / 2.0;
const STROKE_WIDTH: f32 = 6.0;

pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a spinner at the given rotation phase (radians).
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

fn arc(center: Point, radius: f32, start: f32, sweep: f32) -> Path {
    let segments = 24;
    let mut builder = canvas::path::Builder::new();
    builder.move_to(Point::new(
        center.x + radius * start.cos(),
        center.y + radius * start.sin(),
    ));
    #[allow(clippy::cast_precision_loss)]
    for i in 1..=segments {
        let angle = start + sweep * (i as f32 / segments as f32);
        builder.line_to(Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        ));
    }
    builder.build()
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
                let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

                #[allow(clippy::cast_precision_loss)]
                for i in 0..ARC_COUNT {
                    // -90° offset so the head starts at the top
                    let start = self.rotation - PI / 2.0 - ARC_LAG * i as f32;
                    frame.stroke(
                        &arc(center, radius, start, ARC_SWEEP),
                        Stroke::default()
                            .with_width(STROKE_WIDTH)
                            .with_color(self.color)
                            .with_line_cap(canvas::LineCap::Round),
                    );
                }
            });

        vec![geometry]
    }
}
