use crate::error::SynthesisError;
use image::Rgba;
use std::str::FromStr;

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Opaque color from red, green and blue.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Build a color from wider integers, rejecting anything outside `0..=255`.
    pub fn from_channels(r: i64, g: i64, b: i64, a: i64) -> Result<Self, SynthesisError> {
        Ok(Self {
            r: channel("red", r)?,
            g: channel("green", g)?,
            b: channel("blue", b)?,
            a: channel("alpha", a)?,
        })
    }

    /// Linear interpolation towards `other`.
    ///
    /// Each channel is `self * (1 - ratio) + other * ratio`, truncated. The
    /// ratio is clamped to `[0, 1]` first so the result never leaves the
    /// channel range.
    pub fn lerp(self, other: Color, ratio: f64) -> Color {
        let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        let mix = |from: u8, to: u8| -> u8 {
            if from == to {
                return from;
            }
            // Nudge before truncating so 254.99999 does not become 254.
            let value = from as f64 * (1.0 - ratio) + to as f64 * ratio + 1e-9;
            value.clamp(0.0, 255.0) as u8
        };

        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Multiply the color channels by `factor`, keeping alpha.
    pub fn scaled(self, factor: f64) -> Color {
        let scale = |c: u8| (c as f64 * factor).clamp(0.0, 255.0) as u8;
        Color {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn channel(name: &'static str, value: i64) -> Result<u8, SynthesisError> {
    u8::try_from(value).map_err(|_| SynthesisError::ChannelOutOfRange {
        channel: name,
        value,
    })
}

impl FromStr for Color {
    type Err = SynthesisError;

    /// Parse any CSS color (`#8b5cf6`, `rgb(1, 2, 3)`, `white`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let color = css_color::Srgb::from_str(s)
            .map_err(|_| SynthesisError::InvalidColor(s.to_string()))?;

        Ok(Color::rgba(
            (color.red * 255.).round() as u8,
            (color.green * 255.).round() as u8,
            (color.blue * 255.).round() as u8,
            (color.alpha * 255.).round() as u8,
        ))
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        Rgba([color.r, color.g, color.b, color.a])
    }
}

impl From<Rgba<u8>> for Color {
    fn from(pixel: Rgba<u8>) -> Self {
        let [r, g, b, a] = pixel.0;
        Color { r, g, b, a }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_clamps_ratio() {
        let a = Color::rgb(10, 20, 30);
        let b = Color::rgb(200, 100, 0);
        assert_eq!(a.lerp(b, -3.0), a);
        assert_eq!(a.lerp(b, 7.5), b);
        assert_eq!(a.lerp(b, f64::NAN), a);
    }

    #[test]
    fn lerp_truncates() {
        let mid = Color::BLACK.lerp(Color::WHITE, 0.5);
        assert_eq!(mid, Color::rgb(127, 127, 127));
    }

    #[test]
    fn channels_out_of_range_are_rejected() {
        assert_eq!(
            Color::from_channels(0, 256, 0, 255),
            Err(SynthesisError::ChannelOutOfRange {
                channel: "green",
                value: 256
            })
        );
        assert!(Color::from_channels(-1, 0, 0, 255).is_err());
        assert_eq!(
            Color::from_channels(1, 2, 3, 4),
            Ok(Color::rgba(1, 2, 3, 4))
        );
    }

    #[test]
    fn parses_css_hex() {
        let purple: Color = "#8b5cf6".parse().unwrap();
        assert_eq!(purple, Color::rgb(0x8b, 0x5c, 0xf6));
        assert_eq!(purple.to_hex(), "#8b5cf6");
        assert!("not-a-color".parse::<Color>().is_err());
    }
}
