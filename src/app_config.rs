use crate::catalog::PopulationBand;
use crate::game::ScoringWeights;
use config::Config;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    game: Game,
    scoring: Scoring,
    catalog: Catalog,
}

impl AppConfig {
    pub fn load() -> Self {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn scoring(&self) -> &Scoring {
        &self.scoring
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[derive(Debug, Deserialize)]
pub struct Game {
    round_size: usize,
    win_threshold: i64,
}

impl Game {
    pub fn round_size(&self) -> usize {
        self.round_size
    }

    pub fn win_threshold(&self) -> i64 {
        self.win_threshold
    }
}

#[derive(Debug, Deserialize)]
pub struct Scoring {
    weight_correct: f64,
    weight_wrong: f64,
}

impl Scoring {
    pub fn weights(&self) -> ScoringWeights {
        ScoringWeights::new(self.weight_correct, self.weight_wrong)
    }
}

#[derive(Debug, Deserialize)]
pub struct Catalog {
    countries_file: String,
    landmarks_file: String,
    cities_file: String,
    city_population_min: u64,
    city_population_max: u64,
}

impl Catalog {
    pub fn countries_file(&self) -> &Path {
        Path::new(&self.countries_file)
    }

    pub fn landmarks_file(&self) -> &Path {
        Path::new(&self.landmarks_file)
    }

    pub fn cities_file(&self) -> &Path {
        Path::new(&self.cities_file)
    }

    pub fn population_band(&self) -> PopulationBand {
        PopulationBand {
            min: self.city_population_min,
            max: self.city_population_max,
        }
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                game: Game {
                    round_size: 7,
                    win_threshold: 25_000,
                },
                scoring: Scoring {
                    weight_correct: 20.0,
                    weight_wrong: 2.0,
                },
                catalog: Catalog {
                    countries_file: "data/countries.json".to_string(),
                    landmarks_file: "data/landmarks.json".to_string(),
                    cities_file: "data/cities.json".to_string(),
                    city_population_min: 20_000,
                    city_population_max: 60_000,
                },
            },
        }
    }

    pub fn scoring_weights(mut self, correct: f64, wrong: f64) -> Self {
        self.config.scoring.weight_correct = correct;
        self.config.scoring.weight_wrong = wrong;
        self
    }

    pub fn round_size(mut self, round_size: usize) -> Self {
        self.config.game.round_size = round_size;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
