#[derive(Clone, Copy, Default, PartialEq, Debug)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoCoordinate { latitude, longitude }
    }
}

impl From<[f64; 2]> for GeoCoordinate {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        GeoCoordinate { latitude, longitude }
    }
}
