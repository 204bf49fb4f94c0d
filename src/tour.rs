//! Tour representation and cost evaluation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::instance::DistanceMatrix;

/// A visiting order over cities `0..n`, implicitly closed into a cycle:
/// the last city connects back to the first.
///
/// Invariant: the order is a permutation, every city appears exactly once.
/// Constructors and the move generator preserve this; [`Tour::is_permutation`]
/// exists for callers that build orders by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour(Vec<usize>);

impl Tour {
    /// A uniformly random permutation of `0..n`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(rng);
        Self(order)
    }

    /// Wraps an explicit visiting order.
    pub fn from_order(order: Vec<usize>) -> Self {
        Self(order)
    }

    /// Total length of the closed cycle, recomputed from scratch.
    ///
    /// O(n): sums `dist[t[i], t[i+1]]` over consecutive pairs plus the
    /// closing edge from the last city back to the first.
    pub fn cost(&self, matrix: &DistanceMatrix) -> f64 {
        let n = self.0.len();
        let mut total = 0.0;
        for i in 0..n {
            total += matrix.get(self.0[i], self.0[(i + 1) % n]);
        }
        total
    }

    /// True when every city in `0..len` appears exactly once.
    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.0.len()];
        for &city in &self.0 {
            if city >= seen.len() || seen[city] {
                return false;
            }
            seen[city] = true;
        }
        true
    }

    /// Number of cities on the tour.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The visiting order as a slice.
    pub fn order(&self) -> &[usize] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square_matrix() -> DistanceMatrix {
        DistanceMatrix::from_coordinates(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    }

    #[test]
    fn test_cost_closes_the_cycle() {
        let matrix = square_matrix();
        let tour = Tour::from_order(vec![0, 1, 2, 3]);
        assert!((tour.cost(&matrix) - 4.0).abs() < 1e-12);

        // Crossing the diagonals is strictly worse.
        let crossed = Tour::from_order(vec![0, 2, 1, 3]);
        assert!(crossed.cost(&matrix) > 4.0);
    }

    #[test]
    fn test_cost_two_cities_goes_and_returns() {
        let matrix =
            DistanceMatrix::from_rows(vec![vec![0.0, 3.5], vec![3.5, 0.0]]).unwrap();
        let tour = Tour::from_order(vec![0, 1]);
        assert!((tour.cost(&matrix) - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_random_is_permutation() {
        let mut rng = StdRng::seed_from_u64(9);
        for n in [2, 3, 17, 64] {
            let tour = Tour::random(n, &mut rng);
            assert_eq!(tour.len(), n);
            assert!(tour.is_permutation(), "random tour of {n} not a permutation");
        }
    }

    #[test]
    fn test_is_permutation_rejects_duplicates_and_gaps() {
        assert!(!Tour::from_order(vec![0, 1, 1]).is_permutation());
        assert!(!Tour::from_order(vec![0, 1, 3]).is_permutation());
        assert!(Tour::from_order(vec![2, 0, 1]).is_permutation());
    }
}
