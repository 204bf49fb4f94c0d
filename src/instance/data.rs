//! Instance construction helpers.

use rand::Rng;

use super::matrix::DistanceMatrix;

/// A TSP instance: city coordinates plus the matching distance matrix.
#[derive(Debug, Clone)]
pub struct TspInstance {
    /// City positions, in index order.
    pub coordinates: Vec<(f64, f64)>,
    /// Pairwise Euclidean distances between the cities.
    pub matrix: DistanceMatrix,
}

impl TspInstance {
    /// Bundles coordinates with their Euclidean distance matrix.
    pub fn from_coordinates(coordinates: Vec<(f64, f64)>) -> Self {
        let matrix = DistanceMatrix::from_coordinates(&coordinates);
        Self {
            coordinates,
            matrix,
        }
    }

    /// Uniform random cities in `[0, extent)²`.
    pub fn random<R: Rng>(n: usize, extent: f64, rng: &mut R) -> Self {
        Self::from_coordinates(random_coordinates(n, extent, rng))
    }

    /// Number of cities.
    pub fn n(&self) -> usize {
        self.coordinates.len()
    }
}

/// Samples `n` uniform points in `[0, extent)²`.
pub fn random_coordinates<R: Rng>(n: usize, extent: f64, rng: &mut R) -> Vec<(f64, f64)> {
    (0..n)
        .map(|_| {
            (
                rng.random_range(0.0..extent),
                rng.random_range(0.0..extent),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_instance_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let instance = TspInstance::random(12, 50.0, &mut rng);

        assert_eq!(instance.n(), 12);
        assert_eq!(instance.matrix.len(), 12);
        for &(x, y) in &instance.coordinates {
            assert!((0.0..50.0).contains(&x));
            assert!((0.0..50.0).contains(&y));
        }
    }

    #[test]
    fn test_instance_matrix_matches_coordinates() {
        let instance =
            TspInstance::from_coordinates(vec![(0.0, 0.0), (0.0, 2.0), (1.5, 0.0)]);

        assert!((instance.matrix.get(0, 1) - 2.0).abs() < 1e-12);
        assert!((instance.matrix.get(0, 2) - 1.5).abs() < 1e-12);
        assert!((instance.matrix.get(1, 2) - instance.matrix.get(2, 1)).abs() < 1e-12);
    }
}
