//! # Candidate
//!
//! A `Candidate` places one queen per row of an N×N board. It is encoded as a
//! permutation of the column indices `0..N`: the value at index `row` is the
//! column of that row's queen. Permutation encoding rules out row and column
//! attacks, leaving only diagonal conflicts to optimize away.
//!
//! ## Example
//!
//! ```rust
//! use nqueens_ga::candidate::Candidate;
//! use nqueens_ga::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let candidate = Candidate::random(8, &mut rng);
//!
//! assert_eq!(candidate.len(), 8);
//! assert!(candidate.is_permutation());
//! ```

use std::fmt;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// One queen per row, stored as the column of each row's queen.
///
/// Deserialized candidates are checked the same way as `from_genes`.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "CandidateRepr")
)]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Candidate {
    genes: Vec<usize>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CandidateRepr {
    genes: Vec<usize>,
}

#[cfg(feature = "serde")]
impl TryFrom<CandidateRepr> for Candidate {
    type Error = GeneticError;

    fn try_from(repr: CandidateRepr) -> Result<Self> {
        Self::from_genes(repr.genes)
    }
}

impl Candidate {
    /// The identity placement: the queen of row `i` sits in column `i`.
    pub fn identity(board_size: usize) -> Self {
        Self {
            genes: (0..board_size).collect(),
        }
    }

    /// A uniformly shuffled identity placement.
    pub fn random(board_size: usize, rng: &mut RandomNumberGenerator) -> Self {
        let mut candidate = Self::identity(board_size);
        rng.shuffle(&mut candidate.genes);
        candidate
    }

    /// Wraps externally supplied genes, rejecting anything that is not a
    /// permutation of `0..genes.len()`.
    pub fn from_genes(genes: Vec<usize>) -> Result<Self> {
        let candidate = Self { genes };
        if !candidate.is_permutation() {
            return Err(GeneticError::InvalidCandidate(format!(
                "{:?} is not a permutation of 0..{}",
                candidate.genes,
                candidate.genes.len()
            )));
        }
        Ok(candidate)
    }

    /// Builds a candidate from genes the caller knows to form a permutation.
    pub(crate) fn from_genes_unchecked(genes: Vec<usize>) -> Self {
        debug_assert!(Self { genes: genes.clone() }.is_permutation());
        Self { genes }
    }

    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Returns `true` when every value of `0..len` appears exactly once.
    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.genes.len()];
        for &gene in &self.genes {
            match seen.get_mut(gene) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }

    /// Exchanges the queens of two rows.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.genes.swap(i, j);
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.genes)
    }
}
