use foundation::math::GeoPoint;

use crate::geometry::TrailGeometry;

/// Marker position tracking along a trail.
///
/// Keeps the last good position so a malformed interpolation result can be
/// skipped without disturbing the rendered marker; an update must never take
/// down the animation loop.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MarkerPositioner {
    last_position: Option<GeoPoint>,
}

impl MarkerPositioner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position at arc-distance `total × progress` along the trail.
    ///
    /// Returns `None` (keeping the previous position) if the computed point
    /// has a non-finite coordinate, which only happens on corrupt input data.
    pub fn update(&mut self, geometry: &TrailGeometry, progress: f64) -> Option<GeoPoint> {
        let p = progress.clamp(0.0, 1.0);
        let point = geometry.point_at_distance(geometry.total_length_m() * p);
        if !point.is_finite() {
            return None;
        }
        self.last_position = Some(point);
        Some(point)
    }

    /// Last successfully computed position; `None` before the first update,
    /// never a default coordinate.
    pub fn position(&self) -> Option<GeoPoint> {
        self.last_position
    }

    pub fn clear(&mut self) {
        self.last_position = None;
    }
}

#[cfg(test)]
mod tests {
    use super::MarkerPositioner;
    use crate::geometry::TrailGeometry;
    use foundation::math::GeoPoint;

    fn trail() -> TrailGeometry {
        TrailGeometry::from_points(vec![
            GeoPoint::new(-107.5755, 37.7711),
            GeoPoint::new(-107.5765, 37.7701),
        ])
        .unwrap()
    }

    #[test]
    fn no_position_before_first_update() {
        let marker = MarkerPositioner::new();
        assert_eq!(marker.position(), None);
    }

    #[test]
    fn progress_zero_is_first_vertex_and_one_is_last() {
        let geom = trail();
        let mut marker = MarkerPositioner::new();
        assert_eq!(marker.update(&geom, 0.0), Some(geom.points()[0]));
        assert_eq!(marker.update(&geom, 1.0), Some(*geom.points().last().unwrap()));
    }

    #[test]
    fn update_is_idempotent_for_unchanged_geometry() {
        let geom = trail();
        let mut marker = MarkerPositioner::new();
        let a = marker.update(&geom, 0.42);
        let b = marker.update(&geom, 0.42);
        assert_eq!(a, b);
        assert_eq!(marker.position(), a);
    }

    #[test]
    fn non_finite_result_keeps_previous_position() {
        let geom = trail();
        let bad = TrailGeometry::from_points(vec![
            GeoPoint::new(f64::NAN, 0.0),
            GeoPoint::new(1.0, 1.0),
        ])
        .unwrap();

        let mut marker = MarkerPositioner::new();
        let good = marker.update(&geom, 0.5);
        assert!(good.is_some());
        assert_eq!(marker.update(&bad, 0.1), None);
        assert_eq!(marker.position(), good);
    }

    #[test]
    fn clear_drops_the_position() {
        let geom = trail();
        let mut marker = MarkerPositioner::new();
        marker.update(&geom, 0.5);
        marker.clear();
        assert_eq!(marker.position(), None);
    }
}
