//! Annealer configuration.

use crate::error::Error;

/// Configuration for a simulated annealing run.
///
/// The defaults are a schedule that works well on instances of a few
/// hundred cities: start hot enough to accept most moves, spend a long
/// Markov chain at each level, cool slowly.
///
/// # Examples
///
/// ```
/// use tsp_anneal::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_cooling_rate(0.95)
///     .with_markov_length(2_000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Geometric cooling factor in (0, 1): `t ← cooling_rate · t` after each
    /// Markov chain. Higher = slower cooling.
    pub cooling_rate: f64,

    /// Starting temperature. Higher values accept more worsening moves early.
    pub initial_temperature: f64,

    /// The run stops once the temperature falls below this.
    pub final_temperature: f64,

    /// Markov chain length: candidate moves evaluated at each temperature
    /// level before cooling.
    pub markov_length: usize,

    /// Random seed for reproducibility. `None` draws a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            cooling_rate: 0.99,
            initial_temperature: 97.0,
            final_temperature: 3.0,
            markov_length: 10_000,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_final_temperature(mut self, t: f64) -> Self {
        self.final_temperature = t;
        self
    }

    pub fn with_markov_length(mut self, n: usize) -> Self {
        self.markov_length = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(Error::InvalidConfig(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        if self.initial_temperature <= 0.0 {
            return Err(Error::InvalidConfig(
                "initial_temperature must be positive".into(),
            ));
        }
        if self.final_temperature <= 0.0 {
            return Err(Error::InvalidConfig(
                "final_temperature must be positive".into(),
            ));
        }
        if self.final_temperature >= self.initial_temperature {
            return Err(Error::InvalidConfig(
                "final_temperature must be less than initial_temperature".into(),
            ));
        }
        if self.markov_length == 0 {
            return Err(Error::InvalidConfig("markov_length must be at least 1".into()));
        }
        Ok(())
    }
}
