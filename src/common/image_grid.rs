use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};

use crate::error::AppError;

/// Decoded photograph normalized to 8-bit RGB.
#[derive(Debug, Clone)]
pub struct ImageGrid {
    pixels: RgbImage,
}

impl ImageGrid {
    /// Decode any still-image encoding supported by the `image` crate.
    pub fn decode(bytes: &[u8]) -> Result<Self, AppError> {
        let image = image::load_from_memory(bytes)?;
        Ok(Self::from_dynamic(image))
    }

    pub fn from_dynamic(image: DynamicImage) -> Self {
        // Grayscale, alpha and 16-bit layouts all collapse to RGB8 here
        let pixels = match image {
            DynamicImage::ImageRgb8(pixels) => pixels,
            other => other.to_rgb8(),
        };
        Self { pixels }
    }

    pub fn from_rgb(pixels: RgbImage) -> Self {
        Self { pixels }
    }

    pub fn pixels(&self) -> &RgbImage {
        &self.pixels
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn is_empty(&self) -> bool {
        let (width, height) = self.dimensions();
        width == 0 || height == 0
    }

    /// "WxH" of the grid as decoded.
    pub fn size_label(&self) -> String {
        let (width, height) = self.dimensions();
        format!("{width}x{height}")
    }

    /// Bicubic resample to a `side`x`side` square.
    ///
    /// An empty grid stays empty; resizing it would fabricate black pixels.
    pub fn downscale(&self, side: u32) -> RgbImage {
        if self.is_empty() {
            return RgbImage::new(0, 0);
        }
        imageops::resize(&self.pixels, side, side, FilterType::CatmullRom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, ImageFormat, LumaA, Rgb};
    use std::io::Cursor;

    #[test]
    fn decode_normalizes_grayscale_alpha_to_rgb() {
        let gray = DynamicImage::ImageLumaA8(ImageBuffer::<LumaA<u8>, Vec<u8>>::from_pixel(
            4,
            3,
            LumaA([200, 128]),
        ));
        let mut bytes = Cursor::new(Vec::new());
        gray.write_to(&mut bytes, ImageFormat::Png).unwrap();

        let grid = ImageGrid::decode(bytes.get_ref()).unwrap();
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(*grid.pixels().get_pixel(0, 0), Rgb([200, 200, 200]));
    }

    #[test]
    fn decode_rejects_non_image_bytes() {
        let result = ImageGrid::decode(b"definitely not an image");
        assert!(matches!(result, Err(AppError::ImageDecode(_))));
    }

    #[test]
    fn downscale_keeps_uniform_color() {
        let grid = ImageGrid::from_rgb(ImageBuffer::from_pixel(40, 25, Rgb([10, 200, 30])));
        let small = grid.downscale(150);
        assert_eq!(small.dimensions(), (150, 150));
        assert!(small.pixels().all(|p| *p == Rgb([10, 200, 30])));
    }

    #[test]
    fn empty_grid_downscales_to_nothing() {
        let grid = ImageGrid::from_rgb(RgbImage::new(0, 0));
        assert!(grid.is_empty());
        assert_eq!(grid.downscale(150).dimensions(), (0, 0));
        assert_eq!(grid.size_label(), "0x0");
    }
}
