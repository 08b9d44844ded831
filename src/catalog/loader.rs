use crate::domain::{City, Country, Landmark};
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, instrument};

#[instrument]
pub fn load_countries(path: &Path) -> Result<Vec<Country>, CatalogError> {
    info!("📁 Loading countries...");
    let countries: Vec<Country> = load(path)?;
    info!("📁 Loading countries... OK, {} loaded", countries.len());
    Ok(countries)
}

#[instrument]
pub fn load_landmarks(path: &Path) -> Result<Vec<Landmark>, CatalogError> {
    info!("📁 Loading landmarks...");
    let landmarks: Vec<Landmark> = load(path)?;
    info!("📁 Loading landmarks... OK, {} loaded", landmarks.len());
    Ok(landmarks)
}

#[instrument]
pub fn load_cities(path: &Path) -> Result<Vec<City>, CatalogError> {
    info!("📁 Loading cities...");
    let cities: Vec<City> = load(path)?;
    info!("📁 Loading cities... OK, {} loaded", cities.len());
    Ok(cities)
}

fn load<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        source,
        path: path.to_path_buf(),
    })?;

    serde_json::from_str(&content).map_err(|source| CatalogError::Json {
        source,
        path: path.to_path_buf(),
    })
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("could not read '{}': {source}", path.display())]
    Io { source: io::Error, path: PathBuf },
    #[error("could not parse '{}': {source}", path.display())]
    Json { source: serde_json::Error, path: PathBuf },
}
