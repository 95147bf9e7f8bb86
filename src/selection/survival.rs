use crate::candidate::Candidate;
use crate::error::{GeneticError, Result};
use crate::evolution::Challenge;
use crate::population::Population;

/// Replaces the two weakest candidates with the offspring.
///
/// The population is stably sorted by ascending score, so it leaves this
/// function worst-first. The first two slots are then overwritten with the
/// offspring in order. The population size never changes.
///
/// # Errors
///
/// Returns an error if the population has fewer than two members.
pub fn select_survivals<C: Challenge>(
    mut population: Population,
    offspring: (Candidate, Candidate),
    challenge: &C,
) -> Result<Population> {
    if population.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }
    if population.len() < 2 {
        return Err(GeneticError::Configuration(format!(
            "Survivor replacement needs at least 2 candidates, got {}",
            population.len()
        )));
    }

    population.sort_by_cached_key(|candidate| challenge.score(candidate));
    let (first, second) = offspring;
    population[0] = first;
    population[1] = second;

    Ok(population)
}
