//! Simulated annealing solver for the symmetric Euclidean TSP.
//!
//! Given n city coordinates (or a precomputed pairwise distance matrix),
//! finds a cyclic visiting order of all cities that approximately minimizes
//! total travel distance. The search is a single-solution trajectory:
//! candidate tours come from two neighborhood moves (city swap and block
//! relocation), worsening candidates are accepted with the Metropolis
//! probability, and the temperature follows a geometric cooling schedule.
//!
//! # Architecture
//!
//! - [`instance`]: problem input, a validated [`instance::DistanceMatrix`]
//!   plus helpers for building instances from coordinates.
//! - [`tour`]: the solution representation and its cost evaluation.
//! - [`sa`]: the annealing engine: configuration, move generation, and the
//!   cooling/acceptance loop.
//! - [`report`]: side-by-side summaries for comparing runs against exact
//!   solvers executed elsewhere.
//!
//! # Example
//!
//! ```
//! use tsp_anneal::instance::DistanceMatrix;
//! use tsp_anneal::sa::{Annealer, SaConfig};
//!
//! let square = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
//! let matrix = DistanceMatrix::from_coordinates(&square);
//!
//! // A short schedule; the default one spends far longer searching.
//! let config = SaConfig::default()
//!     .with_cooling_rate(0.9)
//!     .with_markov_length(500)
//!     .with_seed(7);
//! let result = Annealer::solve(&matrix, &config).unwrap();
//!
//! assert!(result.tour.is_permutation());
//! assert!(result.distance >= 4.0); // unit square perimeter is optimal
//! ```

pub mod error;
pub mod instance;
pub mod report;
pub mod sa;
pub mod tour;

pub use error::Error;
