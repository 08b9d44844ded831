use crate::domain::GeoCoordinate;
use serde::Deserialize;

/// A country marker as found in the countries data set.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct Country {
    pub name: String,
    pub capital: String,
    #[serde(rename = "latlng")]
    pub coordinate: GeoCoordinate,
}

/// A remote place the player has to locate. One landmark is shown per round.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct Landmark {
    pub country: String,
    pub image: Option<String>,
    #[serde(rename = "latlng")]
    pub coordinate: GeoCoordinate,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct City {
    pub name: String,
    pub country: String,
    pub population: u64,
    #[serde(rename = "latlng")]
    pub coordinate: GeoCoordinate,
}
