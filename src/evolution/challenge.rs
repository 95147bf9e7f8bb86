use crate::candidate::Candidate;

/// Scores a candidate. Higher is better.
pub trait Challenge: Send + Sync {
    fn score(&self, candidate: &Candidate) -> i64;
}

/// Penalizes every pair of queens sharing a diagonal.
///
/// Each attacking pair is visited once per ordering, so a single unordered
/// conflict costs 2. The score of an `n`-queen candidate lies in
/// `[-n * (n - 1), 0]` and is 0 exactly for solutions.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueensChallenge;

impl QueensChallenge {
    pub fn new() -> Self {
        Self
    }

    /// Number of unordered attacking pairs.
    pub fn conflicts(&self, candidate: &Candidate) -> usize {
        (-self.score(candidate) / 2) as usize
    }
}

impl Challenge for QueensChallenge {
    fn score(&self, candidate: &Candidate) -> i64 {
        let genes = candidate.genes();
        let mut penalty = 0i64;
        for (i, &xi) in genes.iter().enumerate() {
            for (j, &xj) in genes.iter().enumerate() {
                if i != j && i.abs_diff(j) == xi.abs_diff(xj) {
                    penalty += 1;
                }
            }
        }
        -penalty
    }
}
