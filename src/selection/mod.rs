pub mod selection_strategy;
pub mod survival;
pub mod tournament;

pub use selection_strategy::SelectionStrategy;
pub use survival::select_survivals;
pub use tournament::TournamentSelection;
