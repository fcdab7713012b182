//! K-means over bag-of-ingredients vectors.
//!
//! Lloyd's algorithm with k-means++ initialization and a seeded RNG, so the
//! same catalog and seed always produce the same partition. Squared
//! Euclidean distance; ties resolve to the lowest centroid index.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// K-means hyperparameters. The caller guarantees `1 <= k <= vectors.len()`.
#[derive(Debug, Clone, Copy)]
pub struct KMeansParams {
    pub k: usize,
    pub max_iterations: usize,
    pub tolerance: f64,
    pub seed: u64,
}

/// Fitted output: one label per input vector, plus final centroids.
#[derive(Debug, Clone)]
pub struct KMeansFit {
    /// Label per input vector, each in `[0, k)`.
    pub labels: Vec<usize>,
    pub centroids: Vec<Vec<f64>>,
    /// Iterations actually run before convergence or the cap.
    pub iterations: usize,
    /// Sum of squared distances to assigned centroids.
    pub inertia: f64,
}

/// Run Lloyd's algorithm to convergence or `max_iterations`, whichever
/// comes first.
pub fn fit(vectors: &[Vec<f64>], params: &KMeansParams) -> KMeansFit {
    debug_assert!(!vectors.is_empty());
    debug_assert!(params.k >= 1 && params.k <= vectors.len());

    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut centroids = init_plus_plus(vectors, params.k, &mut rng);
    let mut labels = vec![0usize; vectors.len()];
    let mut iterations = 0;

    for iter in 0..params.max_iterations {
        iterations = iter + 1;

        // Assignment step.
        for (i, v) in vectors.iter().enumerate() {
            labels[i] = nearest_centroid(v, &centroids);
        }

        // Update step.
        let mut sums = vec![vec![0.0; vectors[0].len()]; params.k];
        let mut counts = vec![0usize; params.k];
        for (v, &label) in vectors.iter().zip(&labels) {
            counts[label] += 1;
            for (s, x) in sums[label].iter_mut().zip(v) {
                *s += x;
            }
        }

        let mut new_centroids: Vec<Vec<f64>> = Vec::with_capacity(params.k);
        for (sum, &count) in sums.iter().zip(&counts) {
            if count == 0 {
                // Empty cluster: reseed to the point farthest from its
                // assigned centroid so every label in [0, k) stays live.
                let far = farthest_point(vectors, &labels, &centroids);
                new_centroids.push(vectors[far].clone());
            } else {
                new_centroids.push(sum.iter().map(|s| s / count as f64).collect());
            }
        }

        let movement: f64 = centroids
            .iter()
            .zip(&new_centroids)
            .map(|(a, b)| squared_distance(a, b))
            .sum();
        centroids = new_centroids;

        if movement <= params.tolerance {
            break;
        }
    }

    // Final assignment against the settled centroids.
    for (i, v) in vectors.iter().enumerate() {
        labels[i] = nearest_centroid(v, &centroids);
    }
    let inertia: f64 = vectors
        .iter()
        .zip(&labels)
        .map(|(v, &label)| squared_distance(v, &centroids[label]))
        .sum();

    KMeansFit {
        labels,
        centroids,
        iterations,
        inertia,
    }
}

/// k-means++ seeding: first centroid uniform, each next one weighted by
/// squared distance to the nearest centroid chosen so far.
fn init_plus_plus(vectors: &[Vec<f64>], k: usize, rng: &mut StdRng) -> Vec<Vec<f64>> {
    let mut centroids: Vec<Vec<f64>> = Vec::with_capacity(k);
    centroids.push(vectors[rng.gen_range(0..vectors.len())].clone());

    while centroids.len() < k {
        let weights: Vec<f64> = vectors
            .iter()
            .map(|v| {
                centroids
                    .iter()
                    .map(|c| squared_distance(v, c))
                    .fold(f64::INFINITY, f64::min)
            })
            .collect();
        let total: f64 = weights.iter().sum();

        let next = if total > 0.0 {
            // Scan the cumulative weights; deterministic for a given RNG.
            let mut target = rng.gen::<f64>() * total;
            let mut chosen = vectors.len() - 1;
            for (i, w) in weights.iter().enumerate() {
                target -= w;
                if target <= 0.0 {
                    chosen = i;
                    break;
                }
            }
            chosen
        } else {
            // All remaining points coincide with a centroid.
            rng.gen_range(0..vectors.len())
        };
        centroids.push(vectors[next].clone());
    }

    centroids
}

fn nearest_centroid(v: &[f64], centroids: &[Vec<f64>]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, c) in centroids.iter().enumerate() {
        let dist = squared_distance(v, c);
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// Index of the point farthest from its assigned centroid.
fn farthest_point(vectors: &[Vec<f64>], labels: &[usize], centroids: &[Vec<f64>]) -> usize {
    let mut best = 0;
    let mut best_dist = -1.0;
    for (i, v) in vectors.iter().enumerate() {
        let dist = squared_distance(v, &centroids[labels[i]]);
        if dist > best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best
}
