//! Two-color gradient synthesis.
//!
//! Every pixel is `start * (1 - ratio) + end * ratio`, where the ratio comes
//! from the pixel position:
//!
//! * vertical: `row / height`
//! * horizontal: `column / width`
//! * radial: distance from `(width / 2, height / 2)` divided by the distance
//!   from that center to the `(0, 0)` corner, capped at 1

use crate::canvas::{check_dimensions, Canvas};
use crate::color::Color;
use crate::error::SynthesisError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Vertical,
    Horizontal,
    Radial,
}

/// Endpoint colors plus the direction to interpolate in.
///
/// For [`Direction::Radial`], `start` is the center color and `end` the
/// edge color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GradientSpec {
    pub start: Color,
    pub end: Color,
    pub direction: Direction,
}

impl GradientSpec {
    pub fn vertical(top: Color, bottom: Color) -> Self {
        Self {
            start: top,
            end: bottom,
            direction: Direction::Vertical,
        }
    }

    pub fn horizontal(left: Color, right: Color) -> Self {
        Self {
            start: left,
            end: right,
            direction: Direction::Horizontal,
        }
    }

    pub fn radial(center: Color, edge: Color) -> Self {
        Self {
            start: center,
            end: edge,
            direction: Direction::Radial,
        }
    }

    /// Blend position of `(x, y)` on a `width` x `height` canvas, in `[0, 1]`.
    pub fn ratio_at(&self, x: u32, y: u32, width: u32, height: u32) -> f64 {
        let ratio = match self.direction {
            Direction::Vertical => y as f64 / height as f64,
            Direction::Horizontal => x as f64 / width as f64,
            Direction::Radial => {
                let center_x = (width / 2) as f64;
                let center_y = (height / 2) as f64;
                let max_radius = center_x.hypot(center_y);
                if max_radius == 0.0 {
                    0.0
                } else {
                    let distance = (x as f64 - center_x).hypot(y as f64 - center_y);
                    (distance / max_radius).min(1.0)
                }
            }
        };

        ratio.clamp(0.0, 1.0)
    }

    pub fn color_at(&self, x: u32, y: u32, width: u32, height: u32) -> Color {
        self.start.lerp(self.end, self.ratio_at(x, y, width, height))
    }
}

/// Render `spec` onto a fresh `width` x `height` canvas.
///
/// Zero and oversized dimensions are rejected. The result depends only on the inputs, so
/// two calls with the same arguments give identical canvases.
pub fn synthesize(width: u32, height: u32, spec: &GradientSpec) -> Result<Canvas, SynthesisError> {
    check_dimensions(width, height)?;

    match spec.direction {
        // Linear gradients only vary along one axis; compute each line once.
        Direction::Vertical => {
            let rows: Vec<Color> = (0..height)
                .map(|y| spec.color_at(0, y, width, height))
                .collect();
            Canvas::from_fn(width, height, |_, y| rows[y as usize])
        }
        Direction::Horizontal => {
            let columns: Vec<Color> = (0..width)
                .map(|x| spec.color_at(x, 0, width, height))
                .collect();
            Canvas::from_fn(width, height, |x, _| columns[x as usize])
        }
        Direction::Radial => Canvas::from_fn(width, height, |x, y| spec.color_at(x, y, width, height)),
    }
}
