use crate::geodesy::DistanceKm;
use serde::Deserialize;

/// Multipliers turning a distance in kilometers into points.
///
/// The pair is configuration on purpose: shipped builds of the game have used
/// both 20/2 and 10/0.1, so no single pair is authoritative.
#[derive(Clone, Copy, PartialEq, Debug, Deserialize)]
pub struct ScoringWeights {
    correct: f64,
    wrong: f64,
}

impl ScoringWeights {
    pub fn new(correct: f64, wrong: f64) -> Self {
        ScoringWeights { correct, wrong }
    }

    /// Points gained for guessing the right country, `floor(distance × weight)`.
    pub fn points_gained(&self, distance_km: DistanceKm) -> i64 {
        (distance_km as f64 * self.correct).floor() as i64
    }

    /// Points lost for guessing the wrong country, `floor(distance × weight)`.
    pub fn points_lost(&self, distance_km: DistanceKm) -> i64 {
        (distance_km as f64 * self.wrong).floor() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::default_weights(20.0, 2.0, 206, 4120, 412)]
    #[case::alternate_weights(10.0, 0.1, 206, 2060, 20)]
    #[case::zero_distance(20.0, 2.0, 0, 0, 0)]
    fn points_scale_with_the_distance(
        #[case] correct: f64,
        #[case] wrong: f64,
        #[case] distance_km: DistanceKm,
        #[case] gained: i64,
        #[case] lost: i64,
    ) {
        let weights = ScoringWeights::new(correct, wrong);

        assert_eq!(weights.points_gained(distance_km), gained);
        assert_eq!(weights.points_lost(distance_km), lost);
    }

    #[test]
    fn fractional_points_are_floored() {
        let weights = ScoringWeights::new(10.0, 0.1);

        // 17 × 0.1 = 1.7000000000000002 in f64, still floors to 1
        assert_eq!(weights.points_lost(17), 1);
    }

    #[test]
    fn deserializes_from_configuration() {
        let json = r#"{ "correct": 20.0, "wrong": 2.0 }"#;

        let weights = serde_json::from_str::<ScoringWeights>(json).unwrap();

        assert_eq!(weights, ScoringWeights::new(20.0, 2.0));
    }
}
