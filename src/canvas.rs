//! Fixed-size RGBA pixel grid with alpha-blended drawing primitives.
//!
//! Shapes take inclusive pixel bounds, the same convention most imaging
//! toolkits use for `ellipse([x0, y0, x1, y1])`. Everything drawn is blended
//! "source over" the existing pixels and silently clipped to the canvas.

use crate::color::Color;
use crate::error::SynthesisError;
use image::{imageops, Pixel, Rgba, RgbaImage};

/// Inclusive pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Square of half-size `radius` around a center point.
    pub fn around(center_x: f32, center_y: f32, radius: f32) -> Self {
        Self::new(
            center_x - radius,
            center_y - radius,
            center_x + radius,
            center_y + radius,
        )
    }

    fn center(&self) -> (f32, f32) {
        (
            (self.left + self.right + 1.0) / 2.0,
            (self.top + self.bottom + 1.0) / 2.0,
        )
    }

    fn radii(&self) -> (f32, f32) {
        (
            (self.right - self.left + 1.0) / 2.0,
            (self.bottom - self.top + 1.0) / 2.0,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    /// Fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Result<Self, SynthesisError> {
        Self::filled(width, height, Color::TRANSPARENT)
    }

    pub fn filled(width: u32, height: u32, color: Color) -> Result<Self, SynthesisError> {
        Self::from_fn(width, height, |_, _| color)
    }

    /// Build a canvas by evaluating `f` once per pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self, SynthesisError>
    where
        F: FnMut(u32, u32) -> Color,
    {
        check_dimensions(width, height)?;
        let pixels = RgbaImage::from_fn(width, height, |x, y| f(x, y).into());
        Ok(Self { pixels })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        self.in_bounds(x, y)
            .then(|| Color::from(*self.pixels.get_pixel(x, y)))
    }

    /// Overwrite a pixel without blending. Returns `false` when out of bounds.
    pub fn put(&mut self, x: u32, y: u32, color: Color) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        self.pixels.put_pixel(x, y, color.into());
        true
    }

    /// Blend `color` over the pixel at `(x, y)`; ignored when out of bounds.
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Color) {
        if color.a == 0 {
            return;
        }
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if self.in_bounds(x, y) {
            self.pixels.get_pixel_mut(x, y).blend(&Rgba::from(color));
        }
    }

    pub fn fill_ellipse(&mut self, bounds: Bounds, color: Color) {
        let (cx, cy) = bounds.center();
        let (rx, ry) = bounds.radii();
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }

        self.for_each_in(bounds, |x, y| inside_ellipse(x, y, cx, cy, rx, ry), color);
    }

    /// Ellipse outline `width` pixels thick, drawn inward from `bounds`.
    pub fn stroke_ellipse(&mut self, bounds: Bounds, color: Color, width: f32) {
        let (cx, cy) = bounds.center();
        let (rx, ry) = bounds.radii();
        if rx <= 0.0 || ry <= 0.0 || width <= 0.0 {
            return;
        }
        let (inner_rx, inner_ry) = (rx - width, ry - width);

        self.for_each_in(
            bounds,
            |x, y| {
                inside_ellipse(x, y, cx, cy, rx, ry)
                    && (inner_rx <= 0.0
                        || inner_ry <= 0.0
                        || !inside_ellipse(x, y, cx, cy, inner_rx, inner_ry))
            },
            color,
        );
    }

    /// Straight segment of the given stroke width between two pixel positions.
    pub fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), color: Color, width: f32) {
        let half = (width / 2.0).max(0.5);
        let bounds = Bounds::new(
            from.0.min(to.0) - half,
            from.1.min(to.1) - half,
            from.0.max(to.0) + half,
            from.1.max(to.1) + half,
        );

        self.for_each_in(
            bounds,
            |x, y| distance_to_segment((x as f32, y as f32), from, to) <= half,
            color,
        );
    }

    /// Filled polygon using the even-odd rule.
    pub fn fill_polygon(&mut self, points: &[(f32, f32)], color: Color) {
        if points.len() < 3 {
            return;
        }
        let (mut left, mut top) = (f32::MAX, f32::MAX);
        let (mut right, mut bottom) = (f32::MIN, f32::MIN);
        for &(x, y) in points {
            left = left.min(x);
            top = top.min(y);
            right = right.max(x);
            bottom = bottom.max(y);
        }

        self.for_each_in(
            Bounds::new(left, top, right, bottom),
            |x, y| inside_polygon((x as f32, y as f32), points),
            color,
        );
    }

    /// Clear every pixel outside a rounded rectangle covering the whole canvas.
    pub fn mask_rounded_rect(&mut self, radius: f32) {
        let (width, height) = self.dimensions();
        let right = (width - 1) as f32;
        let bottom = (height - 1) as f32;
        let radius = radius.min(right / 2.0).min(bottom / 2.0).max(0.0);

        for (x, y, pixel) in self.pixels.enumerate_pixels_mut() {
            let (x, y) = (x as f32, y as f32);
            let dx = (radius - x).max(x - (right - radius)).max(0.0);
            let dy = (radius - y).max(y - (bottom - radius)).max(0.0);
            if dx * dx + dy * dy > radius * radius {
                *pixel = Rgba([0, 0, 0, 0]);
            }
        }
    }

    /// Alpha-composite `top` over this canvas, anchored at the origin.
    pub fn composite(&mut self, top: &Canvas) {
        imageops::overlay(&mut self.pixels, &top.pixels, 0, 0);
    }

    /// Composite `top` with its top-left corner at `(x, y)`.
    pub fn composite_at(&mut self, top: &Canvas, x: i64, y: i64) {
        imageops::overlay(&mut self.pixels, &top.pixels, x, y);
    }

    /// Gaussian-blurred copy.
    pub fn blurred(&self, sigma: f32) -> Canvas {
        Canvas {
            pixels: imageops::blur(&self.pixels, sigma),
        }
    }

    /// Stop drawing and hand the pixels to the writer.
    pub fn finish(self) -> RgbaImage {
        self.pixels
    }

    fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width() && y < self.height()
    }

    fn for_each_in<F>(&mut self, bounds: Bounds, mut inside: F, color: Color)
    where
        F: FnMut(u32, u32) -> bool,
    {
        let (width, height) = self.dimensions();
        let x0 = bounds.left.floor().max(0.0) as u32;
        let y0 = bounds.top.floor().max(0.0) as u32;
        let x1 = (bounds.right.ceil().max(-1.0) as i64).min(width as i64 - 1);
        let y1 = (bounds.bottom.ceil().max(-1.0) as i64).min(height as i64 - 1);
        if x1 < 0 || y1 < 0 {
            return;
        }

        let pixel = Rgba::from(color);
        for y in y0..=y1 as u32 {
            for x in x0..=x1 as u32 {
                if inside(x, y) {
                    self.pixels.get_pixel_mut(x, y).blend(&pixel);
                }
            }
        }
    }
}

/// Longest side a canvas may have.
pub const MAX_SIDE: u32 = 16_384;

/// Reject empty canvases and sizes whose RGBA buffer cannot be allocated.
pub(crate) fn check_dimensions(width: u32, height: u32) -> Result<(), SynthesisError> {
    if width == 0 || height == 0 {
        return Err(SynthesisError::InvalidDimensions { width, height });
    }

    let buffer_len = (width as u64)
        .checked_mul(height as u64)
        .and_then(|pixels| pixels.checked_mul(4))
        .and_then(|len| usize::try_from(len).ok());
    if width > MAX_SIDE || height > MAX_SIDE || buffer_len.is_none() {
        return Err(SynthesisError::TooLarge { width, height });
    }
    Ok(())
}

fn inside_ellipse(x: u32, y: u32, cx: f32, cy: f32, rx: f32, ry: f32) -> bool {
    // Sample at the pixel center.
    let nx = (x as f32 + 0.5 - cx) / rx;
    let ny = (y as f32 + 0.5 - cy) / ry;
    nx * nx + ny * ny <= 1.0
}

fn distance_to_segment(p: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f32 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let length_sq = dx * dx + dy * dy;
    let t = if length_sq == 0.0 {
        0.0
    } else {
        (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / length_sq).clamp(0.0, 1.0)
    };
    let (nearest_x, nearest_y) = (a.0 + t * dx, a.1 + t * dy);
    ((p.0 - nearest_x).powi(2) + (p.1 - nearest_y).powi(2)).sqrt()
}

fn inside_polygon(p: (f32, f32), points: &[(f32, f32)]) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > p.1) != (yj > p.1) && p.0 < (xj - xi) * (p.1 - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
