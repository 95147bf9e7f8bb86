use std::fmt::Debug;

use crate::candidate::Candidate;
use crate::error::Result;
use crate::evolution::{Challenge, EvolutionOptions};
use crate::rng::RandomNumberGenerator;

/// Trait for parent selection strategies.
///
/// A selection strategy picks the two parents of the next pair of offspring.
/// Parents are returned as copies; the population itself is left untouched.
///
/// # Examples
///
/// ```
/// use nqueens_ga::candidate::Candidate;
/// use nqueens_ga::evolution::QueensChallenge;
/// use nqueens_ga::rng::RandomNumberGenerator;
/// use nqueens_ga::selection::{SelectionStrategy, TournamentSelection};
/// use nqueens_ga::error::Result;
///
/// fn main() -> Result<()> {
///     let mut rng = RandomNumberGenerator::from_seed(1);
///     let population: Vec<Candidate> =
///         (0..10).map(|_| Candidate::random(8, &mut rng)).collect();
///
///     let selection = TournamentSelection::default();
///     let (first, second) = selection.select_parents(&population, &QueensChallenge, &mut rng)?;
///
///     assert!(first.is_permutation());
///     assert!(second.is_permutation());
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy: Debug + Clone + Send + Sync {
    /// Selects two parents from the population.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty.
    fn select_parents<C: Challenge>(
        &self,
        population: &[Candidate],
        challenge: &C,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Candidate, Candidate)>;

    /// Checks that the run options agree with this strategy's own settings.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the options ask for a different
    /// selection setup than the one this strategy was built with.
    fn check_options(&self, _options: &EvolutionOptions) -> Result<()> {
        Ok(())
    }
}
