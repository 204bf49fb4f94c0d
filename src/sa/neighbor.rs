//! Candidate move generation.
//!
//! Two move types, chosen with equal probability per iteration: a two-city
//! swap and a block relocation. Every proposal materializes a fresh owned
//! tour; the caller's current solution is never aliased or mutated.

use rand::Rng;

use crate::tour::Tour;

/// Proposes one neighbor of `tour`.
///
/// Tours with fewer than three cities cannot supply three distinct cut
/// points, so they always get a swap.
pub(crate) fn propose<R: Rng>(tour: &Tour, rng: &mut R) -> Tour {
    if tour.len() < 3 || rng.random_range(0.0..1.0) < 0.5 {
        swap(tour, rng)
    } else {
        block_relocation(tour, rng)
    }
}

/// Exchanges the cities at two distinct random positions.
pub(crate) fn swap<R: Rng>(tour: &Tour, rng: &mut R) -> Tour {
    let n = tour.len();
    let mut order = tour.order().to_vec();

    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n);
    while j == i {
        j = rng.random_range(0..n);
    }
    order.swap(i, j);

    Tour::from_order(order)
}

/// Relocates the block between the second and third cut points to sit
/// directly after the first.
///
/// With sorted cut points `p1 < p2 < p3` the candidate is the concatenation
///
/// ```text
/// [0..=p1] ++ [p2..=p3] ++ [p1+1..p2] ++ [p3+1..]
/// ```
///
/// The boundaries are exact: this move is a relocation, not a segment
/// reversal.
pub(crate) fn block_relocation<R: Rng>(tour: &Tour, rng: &mut R) -> Tour {
    let n = tour.len();
    let (p1, p2, p3) = distinct_sorted_triple(n, rng);

    let order = tour.order();
    let mut candidate = Vec::with_capacity(n);
    candidate.extend_from_slice(&order[..=p1]);
    candidate.extend_from_slice(&order[p2..=p3]);
    candidate.extend_from_slice(&order[p1 + 1..p2]);
    candidate.extend_from_slice(&order[p3 + 1..]);

    Tour::from_order(candidate)
}

/// Three distinct positions in `0..n`, ascending.
fn distinct_sorted_triple<R: Rng>(n: usize, rng: &mut R) -> (usize, usize, usize) {
    debug_assert!(n >= 3);

    let a = rng.random_range(0..n);
    let mut b = rng.random_range(0..n);
    while b == a {
        b = rng.random_range(0..n);
    }
    let mut c = rng.random_range(0..n);
    while c == a || c == b {
        c = rng.random_range(0..n);
    }

    let mut cuts = [a, b, c];
    cuts.sort_unstable();
    (cuts[0], cuts[1], cuts[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Drives `block_relocation` until the rng picks exactly the wanted
    /// cut points, then returns that candidate.
    fn relocate_at(order: Vec<usize>, want: (usize, usize, usize)) -> Tour {
        let tour = Tour::from_order(order);
        for seed in 0..10_000u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            if distinct_sorted_triple(tour.len(), &mut rng) == want {
                let mut rng = StdRng::seed_from_u64(seed);
                return block_relocation(&tour, &mut rng);
            }
        }
        panic!("no seed produced cut points {want:?}");
    }

    #[test]
    fn test_block_relocation_literal_case() {
        // [0,1,2,3,4,5] with cuts (1, 3, 4):
        // [0..=1] ++ [3..=4] ++ [2..3] ++ [5..] = [0,1] [3,4] [2] [5]
        let candidate = relocate_at(vec![0, 1, 2, 3, 4, 5], (1, 3, 4));
        assert_eq!(candidate.order(), &[0, 1, 3, 4, 2, 5]);
    }

    #[test]
    fn test_block_relocation_adjacent_cuts() {
        // p2 = p1 + 1 leaves the middle segment empty.
        let candidate = relocate_at(vec![0, 1, 2, 3, 4, 5], (0, 1, 3));
        assert_eq!(candidate.order(), &[0, 1, 2, 3, 4, 5]);

        // p3 at the last position leaves the tail empty.
        let candidate = relocate_at(vec![0, 1, 2, 3, 4, 5], (0, 2, 5));
        assert_eq!(candidate.order(), &[0, 2, 3, 4, 5, 1]);
    }

    #[test]
    fn test_swap_changes_exactly_two_positions() {
        let tour = Tour::from_order((0..20).collect());
        let mut rng = StdRng::seed_from_u64(3);
        let candidate = swap(&tour, &mut rng);

        let differing = tour
            .order()
            .iter()
            .zip(candidate.order())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(differing, 2);
        assert!(candidate.is_permutation());
    }

    #[test]
    fn test_propose_two_cities_always_swaps() {
        let tour = Tour::from_order(vec![0, 1]);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let candidate = propose(&tour, &mut rng);
            assert!(candidate.is_permutation());
            assert_eq!(candidate.order(), &[1, 0]);
        }
    }

    proptest! {
        #[test]
        fn prop_proposals_stay_permutations(n in 2usize..48, seed in 0u64..512) {
            let mut rng = StdRng::seed_from_u64(seed);
            let tour = Tour::random(n, &mut rng);
            let candidate = propose(&tour, &mut rng);

            prop_assert_eq!(candidate.len(), n);
            prop_assert!(candidate.is_permutation());
        }

        #[test]
        fn prop_relocation_keeps_prefix(seed in 0u64..512) {
            // Everything up to and including p1 stays in place.
            let mut rng = StdRng::seed_from_u64(seed);
            let tour = Tour::random(12, &mut rng);

            let mut cut_rng = StdRng::seed_from_u64(seed.wrapping_add(1));
            let (p1, _, _) = distinct_sorted_triple(12, &mut cut_rng);
            let mut move_rng = StdRng::seed_from_u64(seed.wrapping_add(1));
            let candidate = block_relocation(&tour, &mut move_rng);

            prop_assert_eq!(&candidate.order()[..=p1], &tour.order()[..=p1]);
        }
    }
}
