// SPDX-License-Identifier: MPL-2.0
//! Loading spinner drawn on a Canvas.
//!
//! The spinner holds no clock of its own: pages pass the time elapsed since
//! loading started and [`rotation_for`] turns it into an angle, so the arc
//! advances on every application tick.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::time::Duration;

/// One full turn per this many seconds.
const SECONDS_PER_TURN: f32 = 1.2;
const STROKE_WIDTH: f32 = 3.0;
const ARC_SEGMENTS: u16 = 30;

/// Rotation angle (radians, in `[0, 2π)`) after `elapsed` of loading.
#[must_use]
pub fn rotation_for(elapsed: Duration) -> f32 {
    (elapsed.as_secs_f32() / SECONDS_PER_TURN).fract() * TAU
}

fn point_on(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

/// Half-circle arc sweeping over a faint track.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
}

impl AnimatedSpinner {
    /// Spinner for a load that started `elapsed` ago.
    #[must_use]
    pub fn for_elapsed(color: Color, elapsed: Duration) -> Self {
        Self {
            cache: Cache::default(),
            rotation: rotation_for(elapsed),
            color,
        }
    }

    pub fn into_element<Message: 'static>(self) -> Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fixed(sizing::ICON_LG))
            .height(Length::Fixed(sizing::ICON_LG))
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
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let center = frame.center();
            let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH - 1.0;

            let track = Color {
                a: 0.25,
                ..self.color
            };
            frame.stroke(
                &Path::circle(center, radius),
                Stroke::default()
                    .with_width(STROKE_WIDTH)
                    .with_color(track),
            );

            // Start at twelve o'clock.
            let start = self.rotation - FRAC_PI_2;
            let arc = Path::new(|builder| {
                builder.move_to(point_on(center, radius, start));
                for step in 1..=ARC_SEGMENTS {
                    let progress = f32::from(step) / f32::from(ARC_SEGMENTS);
                    builder.line_to(point_on(center, radius, start + PI * progress));
                }
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
