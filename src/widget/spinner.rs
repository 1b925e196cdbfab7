use iced::{
    mouse::Cursor,
    widget::canvas::{path::Arc, Frame, Geometry, Path, Program, Stroke},
    Radians, Rectangle, Renderer, Theme,
};
use std::{f32::consts::TAU, time::Duration};

const PERIOD: Duration = Duration::from_millis(1200);
const SWEEP: f32 = TAU / 3.0;

/// A busy indicator standing in for views that don't exist yet.
#[derive(Clone, Copy, Debug)]
pub struct Spinner {
    /// time since the application started, drives the rotation
    elapsed: Duration,
    radius: f32,
}

impl Spinner {
    #[must_use]
    pub const fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            radius: 10.0,
        }
    }

    fn start_angle(&self) -> f32 {
        let phase = self.elapsed.as_secs_f32() % PERIOD.as_secs_f32() / PERIOD.as_secs_f32();
        phase * TAU
    }
}

impl<Message> Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let palette = theme.extended_palette();
        let center = frame.center();

        frame.stroke(
            &Path::circle(center, self.radius),
            Stroke::default()
                .with_color(palette.background.strong.color)
                .with_width(3.0),
        );

        let start = self.start_angle();
        let arc = Path::new(|builder| {
            builder.arc(Arc {
                center,
                radius: self.radius,
                start_angle: Radians(start),
                end_angle: Radians(start + SWEEP),
            });
        });
        frame.stroke(
            &arc,
            Stroke::default()
                .with_color(palette.primary.base.color)
                .with_width(3.0),
        );

        vec![frame.into_geometry()]
    }
}
