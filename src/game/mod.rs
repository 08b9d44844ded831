mod scoring;
mod state;

pub use scoring::ScoringWeights;
pub use state::{GameState, Guess, GuessOutcome, Verdict};
