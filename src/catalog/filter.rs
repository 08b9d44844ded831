use crate::domain::City;
use tracing::info;

/// Exclusive population bounds for the cities that end up on the globe.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PopulationBand {
    pub min: u64,
    pub max: u64,
}

/// Keeps the cities whose population lies strictly inside the band.
pub fn filter_cities(cities: Vec<City>, band: PopulationBand) -> Vec<City> {
    let total = cities.len();
    let filtered: Vec<City> = cities
        .into_iter()
        .filter(|city| city.population > band.min && city.population < band.max)
        .collect();
    info!("🏙️ Kept {} of {} cities within population band {}..{}", filtered.len(), total, band.min, band.max);
    filtered
}
