//! Annealing execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::SaConfig;
use super::neighbor;
use crate::error::Error;
use crate::instance::DistanceMatrix;
use crate::tour::Tour;

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// The best tour found.
    pub tour: Tour,

    /// Length of the best tour.
    pub distance: f64,

    /// Wall-clock time for the whole run.
    pub elapsed: Duration,

    /// Total number of candidate evaluations.
    pub iterations: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Best cost at the start of the run and after each temperature level.
    pub cost_history: Vec<f64>,
}

/// Executes the simulated annealing search.
///
/// The search state is one `current` tour, one `best` tour, and the
/// temperature; `best.cost <= current.cost` holds whenever the state is
/// observable. The distance matrix is borrowed for the duration of the run
/// and never modified. No I/O happens inside the loop.
pub struct Annealer;

impl Annealer {
    /// Runs the annealer on a distance matrix.
    ///
    /// Fails only on invalid input: fewer than two cities or an invalid
    /// configuration. A started run always returns a result.
    pub fn solve(matrix: &DistanceMatrix, config: &SaConfig) -> Result<RunResult, Error> {
        Self::solve_with_cancel(matrix, config, None)
    }

    /// Runs the annealer with an optional cancellation token.
    ///
    /// The flag is checked once per temperature level, so cancellation
    /// latency is one Markov chain. A cancelled run still returns the best
    /// tour found so far, with `cancelled` set.
    pub fn solve_with_cancel(
        matrix: &DistanceMatrix,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<RunResult, Error> {
        let n = matrix.len();
        if n < 2 {
            return Err(Error::TooFewCities { n });
        }
        config.validate()?;

        let start = Instant::now();

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        // Initialize
        let mut current = Tour::random(n, &mut rng);
        let mut current_cost = current.cost(matrix);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;

        let mut cost_history = Vec::new();
        cost_history.push(best_cost);

        while temperature >= config.final_temperature {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            for _ in 0..config.markov_length {
                let candidate = neighbor::propose(&current, &mut rng);
                let candidate_cost = candidate.cost(matrix);
                let delta = candidate_cost - current_cost;

                // Metropolis acceptance criterion
                let accept = if delta < 0.0 {
                    improving_moves += 1;
                    true
                } else {
                    rng.random_range(0.0..1.0) < (-delta / temperature).exp()
                };

                if accept {
                    current = candidate;
                    current_cost = candidate_cost;
                    accepted_moves += 1;

                    if current_cost < best_cost {
                        best = current.clone();
                        best_cost = current_cost;
                    }
                }

                iterations += 1;
            }

            cost_history.push(best_cost);

            // Cool down
            temperature *= config.cooling_rate;
        }

        Ok(RunResult {
            tour: best,
            distance: best_cost,
            elapsed: start.elapsed(),
            iterations,
            accepted_moves,
            improving_moves,
            final_temperature: temperature,
            cancelled,
            cost_history,
        })
    }
}
