use globeguess::app_config::AppConfig;
use globeguess::game::GameState;
use globeguess::{catalog, selection};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load();
    info!("✅  Loaded configuration");

    let countries = catalog::load_countries(config.catalog().countries_file())?;
    let landmarks = catalog::load_landmarks(config.catalog().landmarks_file())?;
    let cities = catalog::load_cities(config.catalog().cities_file())?;
    let cities = catalog::filter_cities(cities, config.catalog().population_band());
    info!("✅  Loaded {} countries, {} landmarks, {} cities", countries.len(), landmarks.len(), cities.len());

    let mut rng = rand::thread_rng();
    let round = selection::random_selection(config.game().round_size(), &landmarks, &mut rng);
    for (i, landmark) in round.iter().enumerate() {
        info!("🌍 Landmark {}: {} at {:?}", i + 1, landmark.country, landmark.coordinate);
    }

    let state = GameState::new(round);
    info!("✅  Round of {} landmarks ready, win threshold {}", config.game().round_size(), config.game().win_threshold());
    info!("🔥 {} is up and running with a starting score of {}", env!("CARGO_PKG_NAME"), state.score());

    Ok(())
}
