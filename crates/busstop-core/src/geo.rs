// crates/busstop-core/src/geo.rs

//! Great-circle and flat-plane distances between two coordinates.
//!
//! All inputs are decimal degrees, all outputs are metres.

use serde::{Deserialize, Serialize};

/// Earth radius used by [`haversine_distance`], in metres.
pub const EARTH_RADIUS_METERS: f64 = 6_378_100.0;

/// Metres per degree of latitude at the equator.
pub const METERS_PER_DEGREE_LAT: f64 = 110_574.0;

/// Metres per degree of longitude at the equator.
pub const METERS_PER_DEGREE_LON: f64 = 111_320.0;

/// Great-circle distance between `(lat1, lon1)` and `(lat2, lon2)`.
///
/// ```
/// use busstop_core::geo::haversine_distance;
///
/// let d = haversine_distance(1.3837, 103.75, 1.383764, 103.7583);
/// assert!((d - 923.7).abs() < 0.1);
/// ```
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = lat2_rad - lat1_rad;
    let delta_lon = lon2.to_radians() - lon1.to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_METERS * a.sqrt().asin()
}

/// Squared flat-plane distance, treating a degree as its length at the equator.
///
/// Only meaningful close to the equator; cheap enough for tight loops.
pub fn squared_equatorial_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = METERS_PER_DEGREE_LAT * (lat1 - lat2);
    let d_lon = METERS_PER_DEGREE_LON * (lon1 - lon2);
    d_lat * d_lat + d_lon * d_lon
}

/// Flat-plane distance, see [`squared_equatorial_distance`].
pub fn equatorial_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    squared_equatorial_distance(lat1, lon1, lat2, lon2).sqrt()
}

/// How `nearby` measures the distance from the query point to a stop.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceMetric {
    /// Great-circle distance on a sphere of radius [`EARTH_RADIUS_METERS`].
    #[default]
    Haversine,
    /// Flat-plane approximation with equatorial degree lengths.
    EquatorialPlane,
}

impl DistanceMetric {
    /// Distance in metres between two coordinates under this metric.
    #[inline]
    pub fn distance(self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
        match self {
            DistanceMetric::Haversine => haversine_distance(lat1, lon1, lat2, lon2),
            DistanceMetric::EquatorialPlane => equatorial_distance(lat1, lon1, lat2, lon2),
        }
    }
}

impl std::str::FromStr for DistanceMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "haversine" => Ok(DistanceMetric::Haversine),
            "equatorial" | "equatorial-plane" | "plane" => Ok(DistanceMetric::EquatorialPlane),
            other => Err(format!("unknown distance metric: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn haversine_is_zero_for_identical_points() {
        assert_eq!(haversine_distance(1.3, 103.8, 1.3, 103.8), 0.0);
    }

    #[test]
    fn haversine_is_symmetric() {
        let a = haversine_distance(1.383764, 103.7583, 1.29684825487647, 103.85253591654006);
        let b = haversine_distance(1.29684825487647, 103.85253591654006, 1.383764, 103.7583);
        assert_relative_eq!(a, b, max_relative = 1e-12);
    }

    #[test]
    fn haversine_matches_known_values() {
        assert_relative_eq!(
            haversine_distance(1.3837, 103.75, 1.383764, 103.7583),
            923.7044536,
            epsilon = 1e-3
        );
        assert_relative_eq!(
            haversine_distance(1.3422, 103.8023, 1.383764, 103.7583),
            6736.8327882,
            epsilon = 1e-3
        );
    }

    #[test]
    fn haversine_quarter_meridian() {
        // Equator to pole along a meridian is a quarter of the circumference.
        let d = haversine_distance(0.0, 0.0, 90.0, 0.0);
        assert_relative_eq!(d, std::f64::consts::PI * EARTH_RADIUS_METERS / 2.0, epsilon = 1e-6);
    }

    #[test]
    fn equatorial_matches_known_values() {
        assert_relative_eq!(
            equatorial_distance(1.3837, 103.75, 1.383764, 103.7583),
            923.9831005649131,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            equatorial_distance(1.3422, 103.8023, 1.383764, 103.7583),
            6716.655692096068,
            epsilon = 1e-9
        );
    }

    #[test]
    fn squared_equatorial_between_two_stops() {
        let d2 = squared_equatorial_distance(1.383764, 103.7583, 1.29684825487647, 103.85253591654006);
        assert_relative_eq!(d2, 2.024e8, max_relative = 0.01);
    }

    #[test]
    fn metric_dispatches_and_parses() {
        assert_eq!(DistanceMetric::default(), DistanceMetric::Haversine);
        assert_eq!("Haversine".parse::<DistanceMetric>(), Ok(DistanceMetric::Haversine));
        assert_eq!("equatorial".parse::<DistanceMetric>(), Ok(DistanceMetric::EquatorialPlane));
        assert!("manhattan".parse::<DistanceMetric>().is_err());

        let h = DistanceMetric::Haversine.distance(1.3837, 103.75, 1.383764, 103.7583);
        let e = DistanceMetric::EquatorialPlane.distance(1.3837, 103.75, 1.383764, 103.7583);
        assert!(h < e);
    }
}
