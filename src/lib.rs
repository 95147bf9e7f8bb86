pub mod candidate;
pub mod error;
pub mod evolution;
pub mod population;
pub mod report;
pub mod rng;
pub mod selection;
pub mod strategy;

// Re-export commonly used types for convenience
pub use candidate::Candidate;
pub use error::{GeneticError, Result, ResultExt};
pub use evolution::{EvolutionLauncher, EvolutionOptions, EvolutionResult};
