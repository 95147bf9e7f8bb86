use crate::candidate::Candidate;
use crate::error::{GeneticError, Result};
use crate::evolution::{Challenge, EvolutionOptions};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// Tournament parent selection.
///
/// Each tournament draws `tournament_size` entrants uniformly from the
/// population **with replacement**, orders them by ascending score with a
/// stable sort, and returns the last two: the winner first, the runner-up
/// second. Among entrants with equal scores the one drawn later ranks higher.
///
/// Larger tournaments increase selection pressure. The default size is 5.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "TournamentSelectionRepr")
)]
#[derive(Debug, Clone)]
pub struct TournamentSelection {
    tournament_size: usize,
}

/// Unvalidated wire form; deserialization goes through `TournamentSelection::new`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TournamentSelectionRepr {
    tournament_size: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<TournamentSelectionRepr> for TournamentSelection {
    type Error = GeneticError;

    fn try_from(repr: TournamentSelectionRepr) -> Result<Self> {
        Self::new(repr.tournament_size)
    }
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified tournament size.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is below 2, since two parents
    /// have to come out of every tournament.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 2 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 2".to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Draws the entrants of one tournament and returns them in ascending
    /// score order.
    fn run_tournament<'a, C: Challenge>(
        &self,
        population: &'a [Candidate],
        challenge: &C,
        rng: &mut RandomNumberGenerator,
    ) -> Vec<&'a Candidate> {
        let mut entrants: Vec<&Candidate> = (0..self.tournament_size)
            .map(|_| &population[rng.index(population.len())])
            .collect();

        entrants.sort_by_cached_key(|candidate| challenge.score(candidate));
        entrants
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self { tournament_size: 5 }
    }
}

impl SelectionStrategy for TournamentSelection {
    fn select_parents<C: Challenge>(
        &self,
        population: &[Candidate],
        challenge: &C,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Candidate, Candidate)> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let entrants = self.run_tournament(population, challenge, rng);
        match entrants.as_slice() {
            [.., runner_up, winner] => Ok(((*winner).clone(), (*runner_up).clone())),
            _ => Err(GeneticError::Configuration(
                "Tournament produced fewer than two entrants".to_string(),
            )),
        }
    }

    fn check_options(&self, options: &EvolutionOptions) -> Result<()> {
        if options.get_tournament_size() != self.tournament_size {
            return Err(GeneticError::Configuration(format!(
                "Options ask for a tournament of {}, but the selection runs tournaments of {}",
                options.get_tournament_size(),
                self.tournament_size
            )));
        }
        Ok(())
    }
}
