//! Seeded k-means partitioning.
//!
//! Lloyd's algorithm with a single explicitly seeded [`StdRng`] shared
//! across all restarts: initialize K centroids from K distinct data points,
//! alternate nearest-centroid assignment (Euclidean) and centroid
//! recomputation until assignments stabilize or the iteration cap is hit,
//! and keep the restart with the lowest inertia. Identical input, seed, and
//! K always reproduce identical labels.

use kolar_traits::{KolarError, Result};
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Configuration for a k-means fit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KMeansConfig {
    /// Number of clusters K.
    pub n_clusters: usize,
    /// Number of random restarts; the lowest-inertia run wins.
    pub n_init: usize,
    /// Iteration cap per restart.
    pub max_iter: usize,
    /// Seed for the pseudo-random generator.
    pub seed: u64,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            n_clusters: 6,
            n_init: 10,
            max_iter: 300,
            seed: 42,
        }
    }
}

/// Result of a k-means fit.
#[derive(Debug, Clone)]
pub struct KMeansFit {
    /// Cluster id per input row, each in `[0, n_clusters)`.
    pub labels: Vec<u32>,
    /// Final centroids, one row per cluster.
    pub centroids: Array2<f64>,
    /// Sum of squared distances from each point to its assigned centroid.
    pub inertia: f64,
    /// Iterations used by the winning restart.
    pub n_iter: usize,
}

/// Centroid-based partitioner over a standardized feature matrix.
#[derive(Debug, Clone)]
pub struct KMeans {
    config: KMeansConfig,
}

impl KMeans {
    /// Create a new partitioner with the given configuration.
    #[must_use]
    pub const fn new(config: KMeansConfig) -> Self {
        Self { config }
    }

    /// Fit the partitioner to `data` (rows = observations, columns = features).
    ///
    /// # Errors
    ///
    /// Returns [`KolarError::InvalidConfig`] when `n_clusters` is zero and
    /// [`KolarError::InsufficientData`] when there are fewer rows than
    /// clusters.
    pub fn fit(&self, data: ArrayView2<'_, f64>) -> Result<KMeansFit> {
        let k = self.config.n_clusters;
        if k == 0 {
            return Err(KolarError::InvalidConfig(
                "cluster count must be at least 1".to_string(),
            ));
        }
        let n = data.nrows();
        if n < k {
            return Err(KolarError::InsufficientData(format!(
                "{} rows cannot form {} clusters",
                n, k
            )));
        }

        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let mut best: Option<KMeansFit> = None;

        for restart in 0..self.config.n_init.max(1) {
            let fit = self.run_once(data, &mut rng);
            tracing::trace!(restart, inertia = fit.inertia, "k-means restart finished");
            if best.as_ref().is_none_or(|b| fit.inertia < b.inertia) {
                best = Some(fit);
            }
        }

        best.ok_or_else(|| KolarError::Other("k-means produced no fit".to_string()))
    }

    /// One Lloyd run from a fresh random initialization.
    fn run_once(&self, data: ArrayView2<'_, f64>, rng: &mut StdRng) -> KMeansFit {
        let k = self.config.n_clusters;
        let (n, d) = (data.nrows(), data.ncols());

        // Initialize centroids from K distinct data points.
        let mut centroids = Array2::zeros((k, d));
        let seeds = rand::seq::index::sample(rng, n, k);
        for (c, i) in seeds.into_iter().enumerate() {
            centroids.row_mut(c).assign(&data.row(i));
        }

        let mut labels = vec![0u32; n];
        let mut n_iter = 0;

        for iter in 0..self.config.max_iter {
            n_iter = iter + 1;

            // Assignment step.
            let mut changed = false;
            for (i, row) in data.axis_iter(Axis(0)).enumerate() {
                let nearest = nearest_centroid(row, centroids.view());
                if labels[i] != nearest {
                    labels[i] = nearest;
                    changed = true;
                }
            }

            // Update step. An empty cluster keeps its previous centroid.
            let mut sums = Array2::<f64>::zeros((k, d));
            let mut counts = vec![0usize; k];
            for (i, row) in data.axis_iter(Axis(0)).enumerate() {
                let c = labels[i] as usize;
                let mut sum = sums.row_mut(c);
                sum += &row;
                counts[c] += 1;
            }
            for c in 0..k {
                if counts[c] > 0 {
                    centroids
                        .row_mut(c)
                        .assign(&(&sums.row(c) / counts[c] as f64));
                }
            }

            if !changed {
                break;
            }
        }

        let inertia = data
            .axis_iter(Axis(0))
            .zip(labels.iter())
            .map(|(row, &label)| squared_distance(row, centroids.row(label as usize)))
            .sum();

        KMeansFit {
            labels,
            centroids,
            inertia,
            n_iter,
        }
    }
}

/// Index of the centroid nearest to `point`, lowest index winning ties.
fn nearest_centroid(point: ArrayView1<'_, f64>, centroids: ArrayView2<'_, f64>) -> u32 {
    let mut best = 0u32;
    let mut best_dist = f64::INFINITY;
    for (c, centroid) in centroids.axis_iter(Axis(0)).enumerate() {
        let dist = squared_distance(point, centroid);
        if dist < best_dist {
            best_dist = dist;
            best = c as u32;
        }
    }
    best
}

fn squared_distance(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum()
}
