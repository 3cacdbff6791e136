//! Geographic helpers.

/// Mean earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in meters between two WGS-84 coordinates.
pub fn haversine_m(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * a.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance_for_same_point() {
        assert_eq!(haversine_m(37.5665, 126.9780, 37.5665, 126.9780), 0.0);
    }

    #[test]
    fn test_seoul_to_busan_roughly_325_km() {
        // Seoul city hall to Busan city hall.
        let d = haversine_m(37.5665, 126.9780, 35.1796, 129.0756);
        assert!((300_000.0..350_000.0).contains(&d), "distance was {d}");
    }

    #[test]
    fn test_distance_is_symmetric() {
        let ab = haversine_m(37.0, 127.0, 35.0, 129.0);
        let ba = haversine_m(35.0, 129.0, 37.0, 127.0);
        assert!((ab - ba).abs() < 1e-6);
    }
}
