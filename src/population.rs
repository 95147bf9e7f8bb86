//! # Population
//!
//! Creation of the starting generation and the population-wide metric the
//! launcher records once per epoch.

use rayon::prelude::*;

use crate::candidate::Candidate;
use crate::error::{GeneticError, Result};
use crate::evolution::Challenge;
use crate::rng::RandomNumberGenerator;

/// The candidates of one generation, in insertion order.
pub type Population = Vec<Candidate>;

/// Produces `population_size` independently shuffled placements of
/// `board_size` queens.
pub fn initialize(
    board_size: usize,
    population_size: usize,
    rng: &mut RandomNumberGenerator,
) -> Population {
    (0..population_size)
        .map(|_| Candidate::random(board_size, rng))
        .collect()
}

/// Average score over the whole population.
///
/// Scores are computed in parallel once the population has at least
/// `parallel_threshold` members.
pub fn mean_fitness<C: Challenge>(
    population: &[Candidate],
    challenge: &C,
    parallel_threshold: usize,
) -> Result<f64> {
    if population.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }

    let total: i64 = if population.len() >= parallel_threshold {
        population
            .par_iter()
            .map(|candidate| challenge.score(candidate))
            .sum()
    } else {
        population
            .iter()
            .map(|candidate| challenge.score(candidate))
            .sum()
    };

    Ok(total as f64 / population.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolution::QueensChallenge;

    #[test]
    fn test_initialize_size_and_validity() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let population = initialize(8, 100, &mut rng);

        assert_eq!(population.len(), 100);
        assert!(population
            .iter()
            .all(|candidate| candidate.len() == 8 && candidate.is_permutation()));
    }

    #[test]
    fn test_initialize_is_reproducible() {
        let first = initialize(6, 10, &mut RandomNumberGenerator::from_seed(9));
        let second = initialize(6, 10, &mut RandomNumberGenerator::from_seed(9));
        assert_eq!(first, second);
    }

    #[test]
    fn test_mean_fitness() {
        let population = vec![
            Candidate::identity(4),
            Candidate::from_genes(vec![1, 3, 0, 2]).unwrap(),
        ];
        let mean = mean_fitness(&population, &QueensChallenge, 1000).unwrap();
        assert!((mean - (-6.0)).abs() < 1e-12);
    }

    #[test]
    fn test_mean_fitness_parallel_matches_sequential() {
        let mut rng = RandomNumberGenerator::from_seed(17);
        let population = initialize(10, 64, &mut rng);

        let sequential = mean_fitness(&population, &QueensChallenge, usize::MAX).unwrap();
        let parallel = mean_fitness(&population, &QueensChallenge, 1).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_mean_fitness_empty_population() {
        let result = mean_fitness(&[], &QueensChallenge, 1000);
        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }
}
