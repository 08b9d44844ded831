mod filter;
mod loader;

pub use filter::{PopulationBand, filter_cities};
pub use loader::{CatalogError, load_cities, load_countries, load_landmarks};
