/// Mean Earth radius (meters) used for great-circle distances.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Geographic position in degrees, longitude first (GeoJSON axis order).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoPoint {
    pub lon_deg: f64,
    pub lat_deg: f64,
}

impl GeoPoint {
    pub fn new(lon_deg: f64, lat_deg: f64) -> Self {
        Self { lon_deg, lat_deg }
    }

    pub fn is_finite(&self) -> bool {
        self.lon_deg.is_finite() && self.lat_deg.is_finite()
    }
}

/// Great-circle distance between two points (haversine, meters).
pub fn haversine_m(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.lat_deg.to_radians();
    let lat_b = b.lat_deg.to_radians();
    let d_lat = (b.lat_deg - a.lat_deg).to_radians();
    let d_lon = (b.lon_deg - a.lon_deg).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Linear interpolation between two vertices in degree space.
///
/// `t` is clamped to [0, 1], so the result always lies on the segment.
/// Adequate for densely sampled trails; no geodesic densification is done.
pub fn lerp_point(a: GeoPoint, b: GeoPoint, t: f64) -> GeoPoint {
    let t = t.clamp(0.0, 1.0);
    GeoPoint::new(
        a.lon_deg + (b.lon_deg - a.lon_deg) * t,
        a.lat_deg + (b.lat_deg - a.lat_deg) * t,
    )
}

#[cfg(test)]
mod tests {
    use super::{GeoPoint, haversine_m, lerp_point};

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn haversine_zero_for_identical_points() {
        let p = GeoPoint::new(-107.5755, 37.7711);
        assert_close(haversine_m(p, p), 0.0, 1e-9);
    }

    #[test]
    fn haversine_one_degree_longitude_at_equator() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 0.0);
        // One degree of arc on a 6,371 km sphere.
        assert_close(haversine_m(a, b), 111_195.0, 10.0);
    }

    #[test]
    fn haversine_is_symmetric() {
        let a = GeoPoint::new(-107.5755, 37.7711);
        let b = GeoPoint::new(-107.5765, 37.7701);
        assert_close(haversine_m(a, b), haversine_m(b, a), 1e-9);
    }

    #[test]
    fn lerp_hits_endpoints_and_midpoint() {
        let a = GeoPoint::new(10.0, 20.0);
        let b = GeoPoint::new(12.0, 24.0);
        assert_eq!(lerp_point(a, b, 0.0), a);
        assert_eq!(lerp_point(a, b, 1.0), b);
        let mid = lerp_point(a, b, 0.5);
        assert_close(mid.lon_deg, 11.0, 1e-12);
        assert_close(mid.lat_deg, 22.0, 1e-12);
    }

    #[test]
    fn lerp_clamps_t() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 1.0);
        assert_eq!(lerp_point(a, b, -0.5), a);
        assert_eq!(lerp_point(a, b, 1.5), b);
    }
}
