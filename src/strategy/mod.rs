//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies responsible for
//! turning a pair of parents into a pair of offspring.
pub mod crossfill;

use std::fmt::Debug;

use crate::{
    candidate::Candidate, error::Result, evolution::EvolutionOptions, rng::RandomNumberGenerator,
};

/// # BreedStrategy
///
/// Produces two offspring from two parents. Implementations recombine and
/// mutate; the offspring must remain valid permutations of the parents' length.
pub trait BreedStrategy
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds two offspring from two parents.
    ///
    /// ## Errors
    ///
    /// This method can fail if the parents have different lengths.
    fn breed(
        &self,
        parents: (&Candidate, &Candidate),
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Candidate, Candidate)>;

    /// Checks that the run options agree with this strategy's own settings.
    ///
    /// ## Errors
    ///
    /// Fails with a configuration error when the options ask for different
    /// breeding parameters than the ones this strategy was built with.
    fn check_options(&self, _options: &EvolutionOptions) -> Result<()> {
        Ok(())
    }
}

pub use crossfill::{cut_and_crossfill, CrossfillStrategy};
