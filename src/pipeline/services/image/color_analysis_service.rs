use image::RgbImage;
use std::collections::BTreeMap;
use tracing::debug;

use crate::common::ImageGrid;
use crate::config::AnalysisSettings;
use crate::pipeline::types::{ColorAnalysis, ColorSample, RgbColor};

/// Count every distinct color of an image.
///
/// Samples come back most frequent first. Equal counts keep ascending RGB order,
/// so the ranking is the same on every run.
pub fn color_histogram(image: &RgbImage) -> Vec<ColorSample> {
    let mut color_counts: BTreeMap<RgbColor, u32> = BTreeMap::new();
    for px in image.pixels() {
        *color_counts.entry(RgbColor::from(px)).or_insert(0) += 1;
    }

    let mut sorted: Vec<ColorSample> = color_counts
        .into_iter()
        .map(|(color, count)| ColorSample { color, count })
        .collect();
    // sort_by_key is stable
    sorted.sort_by_key(|sample| std::cmp::Reverse(sample.count));
    sorted
}

/// Palette extractor: the most frequent colors of the downscaled photograph.
pub struct ColorAnalysisService {
    sample_size: u32,
    palette_size: usize,
}

impl Default for ColorAnalysisService {
    fn default() -> Self {
        Self::new(&AnalysisSettings::default())
    }
}

impl ColorAnalysisService {
    pub fn new(settings: &AnalysisSettings) -> Self {
        Self {
            sample_size: settings.sample_size,
            palette_size: settings.palette_size,
        }
    }

    pub fn analyze_colors(&self, grid: &ImageGrid) -> ColorAnalysis {
        let sampled = grid.downscale(self.sample_size);
        let dominant = self.find_dominant_colors(&sampled);

        if dominant.is_empty() {
            debug!("No colors found in {} image", grid.size_label());
            return ColorAnalysis::empty();
        }

        debug!(
            "Extracted {} palette colors, dominant {}",
            dominant.len(),
            dominant[0]
        );
        ColorAnalysis::from_colors(&dominant)
    }

    fn find_dominant_colors(&self, image: &RgbImage) -> Vec<RgbColor> {
        color_histogram(image)
            .into_iter()
            .take(self.palette_size)
            .map(|sample| sample.color)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    fn striped_image(stripes: &[(u32, Rgb<u8>)]) -> RgbImage {
        let width: u32 = stripes.iter().map(|(w, _)| w).sum();
        ImageBuffer::from_fn(width, 150, |x, _| {
            let mut start = 0;
            for (w, color) in stripes {
                if x < start + w {
                    return *color;
                }
                start += w;
            }
            Rgb([0, 0, 0])
        })
    }

    #[test]
    fn white_image_has_single_color() {
        let grid = ImageGrid::from_rgb(ImageBuffer::from_pixel(150, 150, Rgb([255, 255, 255])));
        let histogram = color_histogram(&grid.downscale(150));
        assert_eq!(
            histogram,
            vec![ColorSample {
                color: RgbColor::new(255, 255, 255),
                count: 22_500
            }]
        );

        let analysis = ColorAnalysisService::default().analyze_colors(&grid);
        assert_eq!(analysis.primary_colors(), ["#ffffff".to_string()]);
        assert_eq!(analysis.dominant_color(), "#ffffff");
    }

    #[test]
    fn palette_is_sorted_by_frequency() {
        let grid = ImageGrid::from_rgb(striped_image(&[
            (20, Rgb([0, 0, 255])),
            (80, Rgb([255, 0, 0])),
            (50, Rgb([0, 255, 0])),
        ]));

        let analysis = ColorAnalysisService::default().analyze_colors(&grid);
        assert_eq!(
            analysis.primary_colors(),
            ["#ff0000", "#00ff00", "#0000ff"].map(String::from)
        );
    }

    #[test]
    fn palette_is_capped_at_five_colors() {
        let stripes: Vec<(u32, Rgb<u8>)> = (0..7u8)
            .map(|i| (10 + u32::from(i), Rgb([i * 30, 0, 0])))
            .collect();
        let total: u32 = stripes.iter().map(|(w, _)| w).sum();
        let mut stripes = stripes;
        stripes.push((150 - total, Rgb([0, 0, 200])));

        let grid = ImageGrid::from_rgb(striped_image(&stripes));
        let analysis = ColorAnalysisService::default().analyze_colors(&grid);
        assert_eq!(analysis.primary_colors().len(), 5);
        assert_eq!(analysis.dominant_color(), "#0000c8");
    }

    #[test]
    fn histogram_ties_follow_rgb_order() {
        let image: RgbImage = ImageBuffer::from_fn(2, 2, |x, y| match (x, y) {
            (0, _) => Rgb([9, 9, 9]),
            (1, 0) => Rgb([1, 1, 1]),
            _ => Rgb([5, 5, 5]),
        });
        let colors: Vec<RgbColor> = color_histogram(&image).into_iter().map(|s| s.color).collect();
        assert_eq!(
            colors,
            vec![RgbColor::new(9, 9, 9), RgbColor::new(1, 1, 1), RgbColor::new(5, 5, 5)]
        );
    }

    #[test]
    fn empty_image_reports_no_colors() {
        let grid = ImageGrid::from_rgb(RgbImage::new(0, 0));
        let analysis = ColorAnalysisService::default().analyze_colors(&grid);
        assert_eq!(analysis, ColorAnalysis::empty());
    }
}
