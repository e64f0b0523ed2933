use crate::error::ColorError;
use crate::pipeline::types::RgbColor;

/// Channel shift used for the lighter and darker alternatives.
pub const SHADE_STEP: u8 = 50;

pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8), ColorError> {
    let color = RgbColor::from_hex(hex)?;
    Ok((color.r, color.g, color.b))
}

pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    RgbColor::new(r, g, b).to_hex()
}

/// Complementary, lighter and darker variants of a color, in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternativeColors {
    pub complementary: String,
    pub lighter: String,
    pub darker: String,
}

impl AlternativeColors {
    pub fn into_vec(self) -> Vec<String> {
        vec![self.complementary, self.lighter, self.darker]
    }
}

pub fn generate_alternatives(hex: &str) -> Result<AlternativeColors, ColorError> {
    let color = RgbColor::from_hex(hex)?;
    Ok(AlternativeColors {
        complementary: color.complement().to_hex(),
        lighter: color.lighten(SHADE_STEP).to_hex(),
        darker: color.darken(SHADE_STEP).to_hex(),
    })
}
