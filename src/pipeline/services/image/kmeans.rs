use std::collections::HashSet;

use image::RgbImage;
use kmeans_colors::get_kmeans;
use palette::Srgb;

use crate::config::AnalysisSettings;
use crate::pipeline::types::RgbColor;

/// Seeded k-means over the pixels of an image.
#[derive(Debug, Clone)]
pub struct KMeans {
    clusters: usize,
    max_iterations: usize,
    converge: f32,
    seed: u64,
}

impl KMeans {
    pub fn new(settings: &AnalysisSettings) -> Self {
        Self {
            clusters: settings.cluster_count,
            max_iterations: settings.max_iterations,
            converge: settings.tolerance as f32,
            seed: settings.cluster_seed,
        }
    }

    /// Cluster centers in seeding order, truncated to integer channels.
    ///
    /// Fewer distinct colors than clusters reduces the cluster count.
    pub fn centers(&self, image: &RgbImage) -> Vec<RgbColor> {
        let distinct = image.pixels().map(RgbColor::from).collect::<HashSet<_>>().len();
        let k = self.clusters.min(distinct);
        if k == 0 {
            return Vec::new();
        }

        // Channels stay on the 0-255 scale so a center truncates like a pixel value
        let pixels: Vec<Srgb> = image
            .pixels()
            .map(|px| Srgb::new(f32::from(px[0]), f32::from(px[1]), f32::from(px[2])))
            .collect();

        let result = get_kmeans(k, self.max_iterations, self.converge, false, &pixels, self.seed);
        tracing::trace!("k-means finished with score {}", result.score);

        result
            .centroids
            .iter()
            .map(|c| RgbColor::from_centroid([f64::from(c.red), f64::from(c.green), f64::from(c.blue)]))
            .collect()
    }
}
