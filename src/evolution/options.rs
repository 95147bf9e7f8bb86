//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the configuration of a run: the board
//! size, the population size, the mutation probability, the number of
//! generations (epochs), and a few knobs for selection, logging and
//! parallel evaluation. Options are fixed once built; the launcher only
//! reads them.
//!
//! ## Example
//!
//! ```rust
//! use nqueens_ga::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // The classic eight queens setup
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_board_size(), 8);
//! assert_eq!(default_options.get_num_generations(), 1000);
//!
//! // A custom setup
//! let options = EvolutionOptions::builder()
//!     .board_size(12)
//!     .population_size(200)
//!     .num_generations(5000)
//!     .log_level(LogLevel::Minimal)
//!     .seed(42)
//!     .build();
//! assert!(options.validate().is_ok());
//! ```
//!
//! ## Enums
//!
//! ### `LogLevel`
//!
//! - `Verbose`: Logs every epoch's metric and every candidate.
//! - `Minimal`: Logs every epoch's metric.
//! - `None`: Logs only the start and the end of a run.

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Verbose,
    Minimal,
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    board_size: usize,
    population_size: usize,
    mutation_probability: f64,
    num_generations: usize,
    tournament_size: usize,
    log_level: LogLevel,
    /// Minimum population size evaluated in parallel
    parallel_threshold: usize,
    seed: Option<u64>,
}

impl EvolutionOptions {
    pub fn new(
        board_size: usize,
        population_size: usize,
        mutation_probability: f64,
        num_generations: usize,
    ) -> Self {
        Self {
            board_size,
            population_size,
            mutation_probability,
            num_generations,
            ..Self::default()
        }
    }

    pub fn get_board_size(&self) -> usize {
        self.board_size
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_tournament_size(&self) -> usize {
        self.tournament_size
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Returns the minimum population size evaluated in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    /// Creates the random source for a run: seeded when a seed is configured,
    /// from system entropy otherwise.
    pub fn rng(&self) -> RandomNumberGenerator {
        match self.seed {
            Some(seed) => RandomNumberGenerator::from_seed(seed),
            None => RandomNumberGenerator::new(),
        }
    }

    /// Checks the options for values that would make a run degenerate.
    ///
    /// # Errors
    ///
    /// Returns a `GeneticError::Configuration` if:
    /// - the board size is zero
    /// - the population size is below 2
    /// - the tournament size is below 2
    /// - the mutation probability is not a finite value in `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        if self.board_size == 0 {
            return Err(GeneticError::Configuration(
                "Board size cannot be zero".to_string(),
            ));
        }

        if self.population_size < 2 {
            return Err(GeneticError::Configuration(format!(
                "Population size must be at least 2, got {}",
                self.population_size
            )));
        }

        if self.tournament_size < 2 {
            return Err(GeneticError::Configuration(format!(
                "Tournament size must be at least 2, got {}",
                self.tournament_size
            )));
        }

        if !self.mutation_probability.is_finite()
            || !(0.0..=1.0).contains(&self.mutation_probability)
        {
            return Err(GeneticError::Configuration(format!(
                "Mutation probability must be within [0, 1], got {}",
                self.mutation_probability
            )));
        }

        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nqueens_ga::evolution::options::{EvolutionOptions, LogLevel};
    ///
    /// let options = EvolutionOptions::builder()
    ///     .board_size(6)
    ///     .population_size(50)
    ///     .mutation_probability(0.5)
    ///     .num_generations(200)
    ///     .log_level(LogLevel::None)
    ///     .build();
    /// assert_eq!(options.get_board_size(), 6);
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            board_size: 8,
            population_size: 100,
            mutation_probability: 0.8,
            num_generations: 1000,
            tournament_size: 5,
            log_level: LogLevel::None,
            parallel_threshold: 1000,
            seed: None,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
/// Unset values fall back to `EvolutionOptions::default()`.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    board_size: Option<usize>,
    population_size: Option<usize>,
    mutation_probability: Option<f64>,
    num_generations: Option<usize>,
    tournament_size: Option<usize>,
    log_level: Option<LogLevel>,
    parallel_threshold: Option<usize>,
    seed: Option<u64>,
}

impl EvolutionOptionsBuilder {
    pub fn board_size(mut self, value: usize) -> Self {
        self.board_size = Some(value);
        self
    }

    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn mutation_probability(mut self, value: f64) -> Self {
        self.mutation_probability = Some(value);
        self
    }

    /// Sets the number of generations (epochs).
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    pub fn tournament_size(mut self, value: usize) -> Self {
        self.tournament_size = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let default = EvolutionOptions::default();
        EvolutionOptions {
            board_size: self.board_size.unwrap_or(default.board_size),
            population_size: self.population_size.unwrap_or(default.population_size),
            mutation_probability: self
                .mutation_probability
                .unwrap_or(default.mutation_probability),
            num_generations: self.num_generations.unwrap_or(default.num_generations),
            tournament_size: self.tournament_size.unwrap_or(default.tournament_size),
            log_level: self.log_level.unwrap_or(default.log_level),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(default.parallel_threshold),
            seed: self.seed.or(default.seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = EvolutionOptions::default();
        assert_eq!(options.get_board_size(), 8);
        assert_eq!(options.get_population_size(), 100);
        assert!((options.get_mutation_probability() - 0.8).abs() < 1e-12);
        assert_eq!(options.get_num_generations(), 1000);
        assert_eq!(options.get_tournament_size(), 5);
        assert_eq!(options.get_log_level(), LogLevel::None);
        assert_eq!(options.get_seed(), None);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builder_falls_back_to_defaults() {
        let options = EvolutionOptions::builder().board_size(5).build();
        assert_eq!(options.get_board_size(), 5);
        assert_eq!(options.get_population_size(), 100);
        assert_eq!(options.get_num_generations(), 1000);
    }

    #[test]
    fn test_new() {
        let options = EvolutionOptions::new(4, 10, 0.5, 0);
        assert_eq!(options.get_board_size(), 4);
        assert_eq!(options.get_population_size(), 10);
        assert_eq!(options.get_num_generations(), 0);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_board() {
        let options = EvolutionOptions::builder().board_size(0).build();
        match options.validate() {
            Err(GeneticError::Configuration(msg)) => assert!(msg.contains("Board size")),
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_small_population() {
        let options = EvolutionOptions::builder().population_size(1).build();
        assert!(options.validate().is_err());

        // Below the tournament size is allowed: sampling is with replacement.
        let options = EvolutionOptions::builder().population_size(2).build();
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_validate_tournament_size() {
        let options = EvolutionOptions::builder().tournament_size(1).build();
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_validate_mutation_probability() {
        for probability in [-0.01, 1.01, f64::NAN, f64::INFINITY] {
            let options = EvolutionOptions::builder()
                .mutation_probability(probability)
                .build();
            assert!(options.validate().is_err(), "{} accepted", probability);
        }
        for probability in [0.0, 1.0] {
            let options = EvolutionOptions::builder()
                .mutation_probability(probability)
                .build();
            assert!(options.validate().is_ok());
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let options = EvolutionOptions::builder().seed(7).build();
        let mut first = options.rng();
        let mut second = options.rng();
        assert_eq!(first.index(1000), second.index(1000));
    }
}
