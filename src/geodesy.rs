use crate::domain::GeoCoordinate;

/// Mean Earth radius in meters, the sphere model the whole game uses.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Whole kilometers, truncated toward zero.
pub type DistanceKm = u64;

/// Great-circle distance between two coordinates using the haversine formula.
///
/// Total over all real inputs: out-of-range or non-finite coordinates are taken
/// as given and a NaN input yields a NaN result.
pub fn distance_meters(a: GeoCoordinate, b: GeoCoordinate) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Great-circle distance floored to whole kilometers, the scoring signal.
///
/// The floor is applied once, on the meters value. A non-finite distance
/// saturates to 0 by the `as` conversion.
pub fn distance_km(a: GeoCoordinate, b: GeoCoordinate) -> DistanceKm {
    (distance_meters(a, b) / 1000.0).floor() as DistanceKm
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::one_degree_of_longitude_at_the_equator([0.0, 0.0], [0.0, 1.0], 111)]
    #[case::indian_ocean([5.857, 72.0], [4.0, 72.0], 206)]
    #[case::equator_to_north_pole([0.0, 0.0], [90.0, 0.0], 10007)]
    fn computes_known_distances(#[case] a: [f64; 2], #[case] b: [f64; 2], #[case] expected: DistanceKm) {
        assert_eq!(distance_km(a.into(), b.into()), expected);
    }

    #[test]
    fn antipodal_points_are_half_the_circumference_apart() {
        let km = distance_km(GeoCoordinate::new(0.0, 0.0), GeoCoordinate::new(0.0, 180.0));

        assert!((19_965..=20_065).contains(&km), "expected ~20015 km, got {}", km);
    }

    #[rstest]
    #[case::origin([0.0, 0.0])]
    #[case::southern_hemisphere([-27.0, 133.0])]
    #[case::out_of_range_tolerated([95.0, 200.0])]
    fn self_distance_is_zero(#[case] p: [f64; 2]) {
        assert_eq!(distance_km(p.into(), p.into()), 0);
    }

    #[rstest]
    #[case([6.2476, 75.5658], [-27.0, 133.0])]
    #[case([52.5, 5.75], [-54.8019, -68.303])]
    fn distance_is_symmetric(#[case] a: [f64; 2], #[case] b: [f64; 2]) {
        assert_eq!(distance_km(a.into(), b.into()), distance_km(b.into(), a.into()));
    }

    #[test]
    fn repeated_calls_return_identical_results() {
        let a = GeoCoordinate::new(5.857, 72.0);
        let b = GeoCoordinate::new(4.0, 72.0);

        let first = distance_meters(a, b);

        assert_eq!(first, distance_meters(a, b));
        assert_eq!(first, distance_meters(a, b));
    }

    #[test]
    fn nan_input_propagates_to_a_nan_distance() {
        let distance = distance_meters(GeoCoordinate::new(f64::NAN, 0.0), GeoCoordinate::new(0.0, 0.0));

        assert!(distance.is_nan());
    }
}
