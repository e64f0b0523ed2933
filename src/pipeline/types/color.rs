use image::Rgb;
use palette::Srgb;
use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

/// An 8-bit sRGB color, displayed as lowercase `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const BLACK: RgbColor = RgbColor::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse six hex digits, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        // Srgb's parser also takes the 3-digit shorthand and a leading '+'
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidColorFormat(hex.to_string()));
        }

        let rgb: Srgb<u8> = digits
            .parse()
            .map_err(|_| ColorError::InvalidColorFormat(hex.to_string()))?;
        Ok(rgb.into())
    }

    pub fn to_hex(&self) -> String {
        format!("#{:x}", Srgb::<u8>::from(*self))
    }

    /// Mean of the three channels.
    pub fn brightness(&self) -> f64 {
        (self.r as f64 + self.g as f64 + self.b as f64) / 3.0
    }

    pub fn complement(&self) -> Self {
        Self::new(255 - self.r, 255 - self.g, 255 - self.b)
    }

    pub fn lighten(&self, amount: u8) -> Self {
        Self::new(
            self.r.saturating_add(amount),
            self.g.saturating_add(amount),
            self.b.saturating_add(amount),
        )
    }

    pub fn darken(&self, amount: u8) -> Self {
        Self::new(
            self.r.saturating_sub(amount),
            self.g.saturating_sub(amount),
            self.b.saturating_sub(amount),
        )
    }

    /// Truncate a floating point cluster center to integer channels.
    pub fn from_centroid(center: [f64; 3]) -> Self {
        // `as` truncates toward zero and saturates at the u8 bounds
        Self::new(center[0] as u8, center[1] as u8, center[2] as u8)
    }

    pub fn to_point(&self) -> [f64; 3] {
        [self.r as f64, self.g as f64, self.b as f64]
    }
}

impl From<Rgb<u8>> for RgbColor {
    fn from(px: Rgb<u8>) -> Self {
        Self::new(px[0], px[1], px[2])
    }
}

impl From<&Rgb<u8>> for RgbColor {
    fn from(px: &Rgb<u8>) -> Self {
        Self::new(px[0], px[1], px[2])
    }
}

impl From<Srgb<u8>> for RgbColor {
    fn from(rgb: Srgb<u8>) -> Self {
        Self::new(rgb.red, rgb.green, rgb.blue)
    }
}

impl From<RgbColor> for Srgb<u8> {
    fn from(color: RgbColor) -> Self {
        Srgb::new(color.r, color.g, color.b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// A distinct color and the number of pixels carrying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSample {
    pub color: RgbColor,
    pub count: u32,
}
