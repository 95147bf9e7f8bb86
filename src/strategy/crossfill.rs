//! # Cut-and-Crossfill Breeding
//!
//! Recombination keeps a head from one parent and fills the tail with the
//! missing columns in the other parent's cyclic order, so offspring of two
//! permutations are permutations again. Mutation then swaps two rows.

use crate::candidate::Candidate;
use crate::error::{GeneticError, Result};
use crate::evolution::EvolutionOptions;
use crate::rng::RandomNumberGenerator;
use crate::strategy::BreedStrategy;

/// Recombines two parents around a fixed cut point.
///
/// The first child starts with `first[..cut]` and the second with
/// `second[..cut]`. Walking both parents from offset `cut` and wrapping
/// around, every value of `second` missing from `first`'s head is appended to
/// the first child, and every value of `first` missing from `second`'s head is
/// appended to the second child. A cut at or beyond the parent length copies
/// the parents unchanged.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn cut_and_crossfill(
    first: &Candidate,
    second: &Candidate,
    cut: usize,
) -> (Candidate, Candidate) {
    let n = first.len();
    assert_eq!(n, second.len(), "parents must have equal length");
    let head = cut.min(n);
    let (first, second) = (first.genes(), second.genes());

    let mut in_first_head = vec![false; n];
    let mut in_second_head = vec![false; n];
    for (&a, &b) in first[..head].iter().zip(&second[..head]) {
        in_first_head[a] = true;
        in_second_head[b] = true;
    }

    let mut first_child = Vec::with_capacity(n);
    let mut second_child = Vec::with_capacity(n);
    first_child.extend_from_slice(&first[..head]);
    second_child.extend_from_slice(&second[..head]);

    for offset in 0..n {
        let idx = (cut + offset) % n;
        if !in_second_head[first[idx]] {
            second_child.push(first[idx]);
        }
        if !in_first_head[second[idx]] {
            first_child.push(second[idx]);
        }
    }

    (
        Candidate::from_genes_unchecked(first_child),
        Candidate::from_genes_unchecked(second_child),
    )
}

/// Cut-and-crossfill recombination followed by swap mutation.
///
/// The cut point is drawn uniformly from `0..=n + 1`. Each child is then
/// mutated independently: a draw `r` from `[0, 1)` greater than
/// `mutation_probability` leaves the child alone, otherwise two rows drawn
/// uniformly (possibly the same row) exchange their queens.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "CrossfillStrategyRepr")
)]
#[derive(Debug, Clone)]
pub struct CrossfillStrategy {
    mutation_probability: f64,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CrossfillStrategyRepr {
    mutation_probability: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<CrossfillStrategyRepr> for CrossfillStrategy {
    type Error = GeneticError;

    fn try_from(repr: CrossfillStrategyRepr) -> Result<Self> {
        Self::new(repr.mutation_probability)
    }
}

impl CrossfillStrategy {
    /// # Errors
    ///
    /// Returns an error if `mutation_probability` is not a finite value in `[0, 1]`.
    pub fn new(mutation_probability: f64) -> Result<Self> {
        if !mutation_probability.is_finite() || !(0.0..=1.0).contains(&mutation_probability) {
            return Err(GeneticError::Configuration(format!(
                "Mutation probability must be within [0, 1], got {}",
                mutation_probability
            )));
        }

        Ok(Self {
            mutation_probability,
        })
    }

    pub fn mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    /// Draws a cut point and recombines the parents around it.
    pub fn recombine(
        &self,
        first: &Candidate,
        second: &Candidate,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Candidate, Candidate)> {
        if first.len() != second.len() {
            return Err(GeneticError::InvalidCandidate(format!(
                "Parents differ in length: {} and {}",
                first.len(),
                second.len()
            )));
        }

        let cut = rng.index_inclusive(first.len() + 1);
        Ok(cut_and_crossfill(first, second, cut))
    }

    /// Applies swap mutation to each child independently.
    pub fn mutate(
        &self,
        children: (Candidate, Candidate),
        rng: &mut RandomNumberGenerator,
    ) -> (Candidate, Candidate) {
        let (mut first, mut second) = children;
        self.mutate_one(&mut first, rng);
        self.mutate_one(&mut second, rng);
        (first, second)
    }

    fn mutate_one(&self, child: &mut Candidate, rng: &mut RandomNumberGenerator) {
        if rng.unit() > self.mutation_probability || child.is_empty() {
            return;
        }
        let i = rng.index(child.len());
        let j = rng.index(child.len());
        child.swap(i, j);
    }
}

impl Default for CrossfillStrategy {
    fn default() -> Self {
        Self {
            mutation_probability: 0.8,
        }
    }
}

impl BreedStrategy for CrossfillStrategy {
    fn breed(
        &self,
        parents: (&Candidate, &Candidate),
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Candidate, Candidate)> {
        let children = self.recombine(parents.0, parents.1, rng)?;
        Ok(self.mutate(children, rng))
    }

    fn check_options(&self, options: &EvolutionOptions) -> Result<()> {
        if options.get_mutation_probability() != self.mutation_probability {
            return Err(GeneticError::Configuration(format!(
                "Options ask for mutation probability {}, but the strategy mutates with {}",
                options.get_mutation_probability(),
                self.mutation_probability
            )));
        }
        Ok(())
    }
}
