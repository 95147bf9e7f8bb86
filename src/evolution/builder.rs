use crate::{
    error::{GeneticError, Result},
    selection::SelectionStrategy,
    strategy::BreedStrategy,
};

use super::{Challenge, EvolutionLauncher};

/// Assembles an `EvolutionLauncher` from custom parts.
///
/// # Example
///
/// ```rust
/// use nqueens_ga::evolution::{EvolutionLauncherBuilder, QueensChallenge};
/// use nqueens_ga::selection::TournamentSelection;
/// use nqueens_ga::strategy::CrossfillStrategy;
///
/// let launcher = EvolutionLauncherBuilder::new()
///     .with_selection_strategy(TournamentSelection::new(3).unwrap())
///     .with_breed_strategy(CrossfillStrategy::new(0.5).unwrap())
///     .with_challenge(QueensChallenge)
///     .build();
/// assert!(launcher.is_ok());
/// ```
pub struct EvolutionLauncherBuilder<S, B, C>
where
    S: SelectionStrategy,
    B: BreedStrategy,
    C: Challenge,
{
    selection_strategy: Option<S>,
    breed_strategy: Option<B>,
    challenge: Option<C>,
}

impl<S, B, C> EvolutionLauncherBuilder<S, B, C>
where
    S: SelectionStrategy,
    B: BreedStrategy,
    C: Challenge,
{
    pub fn new() -> Self {
        Self {
            selection_strategy: None,
            breed_strategy: None,
            challenge: None,
        }
    }

    pub fn with_selection_strategy(mut self, selection_strategy: S) -> Self {
        self.selection_strategy = Some(selection_strategy);
        self
    }

    pub fn with_breed_strategy(mut self, breed_strategy: B) -> Self {
        self.breed_strategy = Some(breed_strategy);
        self
    }

    pub fn with_challenge(mut self, challenge: C) -> Self {
        self.challenge = Some(challenge);
        self
    }

    pub fn build(self) -> Result<EvolutionLauncher<S, B, C>> {
        let selection_strategy = self.selection_strategy.ok_or_else(|| {
            GeneticError::Configuration("Selection strategy not specified".to_string())
        })?;

        let breed_strategy = self.breed_strategy.ok_or_else(|| {
            GeneticError::Configuration("Breeding strategy not specified".to_string())
        })?;

        let challenge = self
            .challenge
            .ok_or_else(|| GeneticError::Configuration("Challenge not specified".to_string()))?;

        Ok(EvolutionLauncher::new(
            selection_strategy,
            breed_strategy,
            challenge,
        ))
    }
}

impl<S, B, C> Default for EvolutionLauncherBuilder<S, B, C>
where
    S: SelectionStrategy,
    B: BreedStrategy,
    C: Challenge,
{
    fn default() -> Self {
        Self::new()
    }
}
