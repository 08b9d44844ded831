mod geo_coordinate;
mod place;

pub use geo_coordinate::GeoCoordinate;
pub use place::{City, Country, Landmark};
