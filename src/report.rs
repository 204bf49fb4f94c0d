//! Side-by-side solver summaries.
//!
//! The annealer is routinely compared against exact MIP solvers run on the
//! same instance. Those solvers live elsewhere; this module only models what
//! they report. A solver that produced nothing within its time limit shows
//! up as `None`: absence is comparable, never an error here.

use std::time::Duration;

use crate::sa::RunResult;
use crate::tour::Tour;

/// What one solver reports for an instance.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Display name of the solver.
    pub label: String,

    /// The tour it found.
    pub tour: Tour,

    /// Length of that tour.
    pub distance: f64,

    /// Objective value reported by an exact solver, when it exposes one.
    pub objective: Option<f64>,

    /// Relative MIP gap, when the solver exposes one. Solvers that cannot
    /// compute a gap report `None`, not a failure.
    pub mip_gap: Option<f64>,

    /// Wall-clock solve time.
    pub elapsed: Duration,
}

impl Summary {
    /// Summary of an annealing run. Heuristic runs carry no bound, so
    /// `objective` and `mip_gap` stay empty.
    pub fn from_run(label: impl Into<String>, run: &RunResult) -> Self {
        Self {
            label: label.into(),
            tour: run.tour.clone(),
            distance: run.distance,
            objective: None,
            mip_gap: None,
            elapsed: run.elapsed,
        }
    }
}

/// Renders a comparison table over solver outcomes.
///
/// `None` entries are solvers that found no tour within their time limit;
/// they get placeholder cells instead of failing the comparison. When at least
/// two solvers produced tours, a winner line follows the table.
pub fn comparison_table(entries: &[(&str, Option<&Summary>)]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<16} {:>12} {:>12} {:>10} {:>10}\n",
        "solver", "distance", "objective", "gap", "time (s)"
    ));

    for &(label, summary) in entries {
        match summary {
            Some(s) => {
                let objective = s
                    .objective
                    .map_or_else(|| "--".to_string(), |v| format!("{v:.4}"));
                let gap = s
                    .mip_gap
                    .map_or_else(|| "--".to_string(), |v| format!("{:.4}%", v * 100.0));
                out.push_str(&format!(
                    "{:<16} {:>12.4} {:>12} {:>10} {:>10.2}\n",
                    label,
                    s.distance,
                    objective,
                    gap,
                    s.elapsed.as_secs_f64()
                ));
            }
            None => {
                out.push_str(&format!(
                    "{:<16} {:>12} {:>12} {:>10} {:>10}\n",
                    label, "--", "--", "--", "--"
                ));
            }
        }
    }

    let mut found: Vec<&Summary> = entries.iter().filter_map(|&(_, s)| s).collect();
    if found.len() >= 2 {
        found.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        let (best, runner_up) = (found[0], found[1]);
        if (best.distance - runner_up.distance).abs() < 1e-9 {
            out.push_str("shortest tours are identical in length\n");
        } else {
            out.push_str(&format!(
                "{} found the shorter tour ({:.4} vs {:.4})\n",
                best.label, best.distance, runner_up.distance
            ));
        }
    }

    out
}
