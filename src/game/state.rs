use crate::domain::{GeoCoordinate, Landmark};
use crate::game::scoring::ScoringWeights;
use crate::geodesy::{self, DistanceKm};
use tracing::debug;

/// A click on a country marker.
#[derive(Clone, PartialEq, Debug)]
pub struct Guess {
    pub country: String,
    pub coordinate: GeoCoordinate,
}

#[derive(Clone, PartialEq, Debug)]
pub enum GuessOutcome {
    Correct {
        distance_km: DistanceKm,
        points: i64,
    },
    Wrong {
        distance_km: DistanceKm,
        points_lost: i64,
        wrong_guesses: u32,
    },
    /// All landmarks have been played; the guess changed nothing.
    Finished,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Verdict {
    Won,
    Lost,
}

/// The full state of one game, advanced immutably by [`GameState::apply_guess`].
#[derive(Clone, PartialEq, Debug)]
pub struct GameState {
    landmarks: Vec<Landmark>,
    current: usize,
    score: i64,
    wrong_guesses: u32,
}

impl GameState {
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        GameState {
            landmarks,
            current: 0,
            score: 0,
            wrong_guesses: 0,
        }
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// The landmark the player is currently asked to locate.
    pub fn current_landmark(&self) -> Option<&Landmark> {
        self.landmarks.get(self.current)
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.landmarks.len()
    }

    /// Scores a guess against the current landmark and returns the next state.
    ///
    /// A correct country advances the game and gains points proportional to the
    /// distance between the landmark and the clicked marker. A wrong country
    /// loses points by the same signal and leaves the landmark in play.
    pub fn apply_guess(mut self, guess: &Guess, weights: &ScoringWeights) -> (GameState, GuessOutcome) {
        if self.is_finished() {
            return (self, GuessOutcome::Finished);
        }

        let landmark = &self.landmarks[self.current];
        let distance_km = geodesy::distance_km(landmark.coordinate, guess.coordinate);

        if guess.country == landmark.country {
            let points = weights.points_gained(distance_km);
            debug!("🟢 Correct guess '{}', {} km away, +{} points", guess.country, distance_km, points);
            self.score += points;
            self.current += 1;
            self.wrong_guesses = 0;
            (self, GuessOutcome::Correct { distance_km, points })
        } else {
            let points_lost = weights.points_lost(distance_km);
            self.score -= points_lost;
            self.wrong_guesses += 1;
            let wrong_guesses = self.wrong_guesses;
            debug!("🔴 Wrong guess '{}', {} km away, -{} points", guess.country, distance_km, points_lost);
            (
                self,
                GuessOutcome::Wrong {
                    distance_km,
                    points_lost,
                    wrong_guesses,
                },
            )
        }
    }

    /// Compares the score against the winning threshold. Meaningful once the
    /// game is finished, but callable at any point.
    pub fn verdict(&self, win_threshold: i64) -> Verdict {
        if self.score > win_threshold { Verdict::Won } else { Verdict::Lost }
    }
}
