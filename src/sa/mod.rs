//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases with temperature, allowing the search to escape local optima.
//!
//! The neighborhood has two moves, chosen with equal probability per
//! iteration: a two-city swap and a block relocation. Cooling is geometric
//! with a fixed Markov chain length per temperature level.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod neighbor;
mod runner;

pub use config::SaConfig;
pub use runner::{Annealer, RunResult};
