use crate::domain::GeoCoordinate;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// The data files encode a coordinate as a `[latitude, longitude]` pair in decimal degrees.
impl<'de> Deserialize<'de> for GeoCoordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [latitude, longitude] = <[f64; 2]>::deserialize(deserializer)?;
        if !(latitude >= -90.0 && latitude <= 90.0) {
            return Err(Error::custom(format!("invalid latitude: {}, must be between -90 and 90", latitude)));
        }

        if !(longitude >= -180.0 && longitude <= 180.0) {
            return Err(Error::custom(format!("invalid longitude: {}, must be between -180 and 180", longitude)));
        }

        Ok(GeoCoordinate { latitude, longitude })
    }
}
