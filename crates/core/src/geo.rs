//! Random event locations around fixed Ankara district centers.

use rand::Rng;

/// Maximum offset in degrees applied to each axis of a district center.
pub const JITTER_DEGREES: f64 = 0.02;

/// Decimal places kept on generated coordinates.
pub const COORD_PRECISION: i32 = 6;

/// Spatial reference id of the generated geometry (WGS84).
pub const SRID: i32 = 4326;

/// A WGS84 latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Sampling anchors for generated events.
pub const DISTRICT_CENTERS: [GeoPoint; 8] = [
    GeoPoint { lat: 39.9180, lng: 32.8620 },
    GeoPoint { lat: 39.9686, lng: 32.8580 },
    GeoPoint { lat: 39.9520, lng: 32.7850 },
    GeoPoint { lat: 39.9180, lng: 32.9100 },
    GeoPoint { lat: 39.9180, lng: 32.6770 },
    GeoPoint { lat: 39.9680, lng: 32.5780 },
    GeoPoint { lat: 39.9450, lng: 32.8780 },
    GeoPoint { lat: 39.7890, lng: 32.8100 },
];

impl GeoPoint {
    /// Whether both axes lie within [`JITTER_DEGREES`] of the same district center.
    ///
    /// Allows for the half-unit error introduced by rounding to
    /// [`COORD_PRECISION`] places.
    pub fn within_jitter_of_district(&self) -> bool {
        let tolerance = JITTER_DEGREES + 0.5 * 10f64.powi(-COORD_PRECISION) + f64::EPSILON;
        DISTRICT_CENTERS.iter().any(|center| {
            (self.lat - center.lat).abs() <= tolerance && (self.lng - center.lng).abs() <= tolerance
        })
    }
}

/// Pick a district uniformly and jitter each axis independently.
pub fn random_point<R: Rng>(rng: &mut R) -> GeoPoint {
    let center = DISTRICT_CENTERS[rng.random_range(0..DISTRICT_CENTERS.len())];
    GeoPoint {
        lat: round_coord(center.lat + rng.random_range(-JITTER_DEGREES..=JITTER_DEGREES)),
        lng: round_coord(center.lng + rng.random_range(-JITTER_DEGREES..=JITTER_DEGREES)),
    }
}

fn round_coord(value: f64) -> f64 {
    let scale = 10f64.powi(COORD_PRECISION);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn points_stay_near_a_district() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..5_000 {
            let point = random_point(&mut rng);
            assert!(point.within_jitter_of_district(), "{point:?} is off the map");
        }
    }

    #[test]
    fn points_have_six_decimal_places() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let point = random_point(&mut rng);
            for value in [point.lat, point.lng] {
                let scaled = value * 1e6;
                assert!((scaled - scaled.round()).abs() < 1e-6, "{value} not rounded");
            }
        }
    }

    #[test]
    fn every_district_gets_sampled() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut hits = [0usize; 8];
        for _ in 0..4_000 {
            let point = random_point(&mut rng);
            let idx = DISTRICT_CENTERS
                .iter()
                .position(|c| (point.lat - c.lat).abs() <= 0.0201 && (point.lng - c.lng).abs() <= 0.0201)
                .expect("point must belong to a district");
            hits[idx] += 1;
        }
        assert!(hits.iter().all(|&n| n > 0), "unsampled district: {hits:?}");
    }

    #[test]
    fn far_point_is_rejected() {
        let point = GeoPoint { lat: 41.0082, lng: 28.9784 };
        assert!(!point.within_jitter_of_district());
    }

    #[test]
    fn center_itself_is_accepted() {
        assert!(DISTRICT_CENTERS.iter().all(GeoPoint::within_jitter_of_district));
    }
}
