use std::collections::HashSet;

use super::{
    challenge::{Challenge, QueensChallenge},
    options::{EvolutionOptions, LogLevel},
};
use crate::{
    candidate::Candidate,
    error::{GeneticError, Result},
    population::{self, Population},
    report::Reporter,
    rng::RandomNumberGenerator,
    selection::{select_survivals, SelectionStrategy, TournamentSelection},
    strategy::{BreedStrategy, CrossfillStrategy},
};

/// The outcome of a run: the final population and the mean fitness of every epoch.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    /// The population after the last epoch.
    pub population: Population,
    /// Mean population fitness after each epoch, oldest first.
    pub history: Vec<f64>,
}

impl EvolutionResult {
    /// The highest scoring candidate of the final population.
    pub fn best<C: Challenge>(&self, challenge: &C) -> Option<&Candidate> {
        self.population
            .iter()
            .max_by_key(|candidate| challenge.score(candidate))
    }

    /// Distinct zero-conflict candidates of the final population, in population order.
    pub fn solutions<C: Challenge>(&self, challenge: &C) -> Vec<&Candidate> {
        let mut seen = HashSet::new();
        self.population
            .iter()
            .filter(|candidate| challenge.score(candidate) == 0 && seen.insert(*candidate))
            .collect()
    }
}

/// Drives the generational loop with a selection strategy, a breed strategy and a challenge.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Selection, Strategy, Chall>
where
    Selection: SelectionStrategy,
    Strategy: BreedStrategy,
    Chall: Challenge,
{
    selection: Selection,
    strategy: Strategy,
    challenge: Chall,
}

impl EvolutionLauncher<TournamentSelection, CrossfillStrategy, QueensChallenge> {
    /// The standard N-Queens launcher: tournament selection, cut-and-crossfill
    /// breeding with the configured mutation probability, diagonal conflict scoring.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    pub fn for_options(options: &EvolutionOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::new(
            TournamentSelection::new(options.get_tournament_size())?,
            CrossfillStrategy::new(options.get_mutation_probability())?,
            QueensChallenge,
        ))
    }
}

impl<Selection, Strategy, Chall> EvolutionLauncher<Selection, Strategy, Chall>
where
    Selection: SelectionStrategy,
    Strategy: BreedStrategy,
    Chall: Challenge,
{
    /// Creates a new `EvolutionLauncher` from its three parts.
    pub fn new(selection: Selection, strategy: Strategy, challenge: Chall) -> Self {
        Self {
            selection,
            strategy,
            challenge,
        }
    }

    pub fn challenge(&self) -> &Chall {
        &self.challenge
    }

    /// Rejects options whose tournament size or mutation probability differ
    /// from the parts this launcher was built with.
    fn check_options(&self, options: &EvolutionOptions) -> Result<()> {
        self.selection.check_options(options)?;
        self.strategy.check_options(options)
    }

    /// Runs the configured number of epochs on a freshly initialized population.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options are invalid
    /// - The options disagree with the launcher's selection or breed strategy
    /// - The reporter fails
    pub fn evolve<R: Reporter>(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
        reporter: &mut R,
    ) -> Result<EvolutionResult> {
        options.validate()?;
        self.check_options(options)?;
        let population = population::initialize(
            options.get_board_size(),
            options.get_population_size(),
            rng,
        );
        self.evolve_from(options, population, rng, reporter)
    }

    /// Runs the configured number of epochs starting from `population`.
    ///
    /// Every epoch selects two parents, breeds two offspring, replaces the two
    /// weakest candidates with them, and records the mean fitness. With zero
    /// epochs the population is returned untouched.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options are invalid
    /// - The options disagree with the launcher's selection or breed strategy
    /// - The population size differs from the configured one
    /// - A candidate is not a permutation of the configured board size
    /// - The reporter fails
    pub fn evolve_from<R: Reporter>(
        &self,
        options: &EvolutionOptions,
        mut population: Population,
        rng: &mut RandomNumberGenerator,
        reporter: &mut R,
    ) -> Result<EvolutionResult> {
        options.validate()?;
        self.check_options(options)?;
        validate_population(options, &population)?;

        let num_generations = options.get_num_generations();
        if options.get_population_size() < options.get_tournament_size() {
            tracing::warn!(
                population_size = options.get_population_size(),
                tournament_size = options.get_tournament_size(),
                "population is smaller than the tournament, selection pressure is reduced"
            );
        }
        tracing::info!(
            board_size = options.get_board_size(),
            population_size = options.get_population_size(),
            num_generations,
            "starting evolution"
        );
        reporter.on_start(options)?;

        let mut history = Vec::with_capacity(num_generations);
        for epoch in 0..num_generations {
            let parents = self
                .selection
                .select_parents(&population, &self.challenge, rng)?;
            let offspring = self.strategy.breed((&parents.0, &parents.1), rng)?;
            population = select_survivals(population, offspring, &self.challenge)?;

            let metric = population::mean_fitness(
                &population,
                &self.challenge,
                options.get_parallel_threshold(),
            )?;
            history.push(metric);

            match options.get_log_level() {
                LogLevel::Minimal => tracing::info!(epoch, metric, "epoch completed"),
                LogLevel::Verbose => {
                    tracing::info!(epoch, metric, "epoch completed");
                    population.iter().for_each(|candidate| {
                        tracing::debug!(
                            epoch,
                            candidate = %candidate,
                            score = self.challenge.score(candidate),
                            "candidate"
                        );
                    });
                }
                LogLevel::None => {}
            }

            reporter.on_epoch(epoch, metric, &population)?;
        }

        let result = EvolutionResult {
            population,
            history,
        };
        if let Some(best) = result.best(&self.challenge) {
            tracing::info!(
                best = %best,
                best_score = self.challenge.score(best),
                solutions = result.solutions(&self.challenge).len(),
                "evolution finished"
            );
        }
        reporter.on_finish(&result)?;

        Ok(result)
    }
}

fn validate_population(options: &EvolutionOptions, population: &[Candidate]) -> Result<()> {
    if population.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }

    if population.len() != options.get_population_size() {
        return Err(GeneticError::Configuration(format!(
            "Population has {} candidates, expected {}",
            population.len(),
            options.get_population_size()
        )));
    }

    let board_size = options.get_board_size();
    if let Some(candidate) = population
        .iter()
        .find(|candidate| candidate.len() != board_size || !candidate.is_permutation())
    {
        return Err(GeneticError::InvalidCandidate(format!(
            "{} is not a permutation of 0..{}",
            candidate, board_size
        )));
    }

    Ok(())
}
