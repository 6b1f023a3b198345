use foundation::math::{GeoPoint, haversine_m, lerp_point};

#[derive(Debug)]
pub enum TrailError {
    /// A trail needs at least two vertices to have a length.
    InvalidGeometry { point_count: usize },
}

impl std::fmt::Display for TrailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrailError::InvalidGeometry { point_count } => {
                write!(f, "trail needs at least 2 points, got {point_count}")
            }
        }
    }
}

impl std::error::Error for TrailError {}

/// Lon/lat extent of a trail, for the external camera-fit call.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TrailBounds {
    pub min_lon_deg: f64,
    pub min_lat_deg: f64,
    pub max_lon_deg: f64,
    pub max_lat_deg: f64,
}

/// Ordered trail polyline with precomputed cumulative arc distances.
///
/// Immutable once constructed; a data reload builds a new value. Distances
/// are great-circle meters between consecutive vertices, so accuracy of
/// along-path queries is a property of how densely the trail is sampled.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailGeometry {
    points: Vec<GeoPoint>,
    cumulative_m: Vec<f64>,
    total_m: f64,
}

impl TrailGeometry {
    pub fn from_points(points: Vec<GeoPoint>) -> Result<Self, TrailError> {
        if points.len() < 2 {
            return Err(TrailError::InvalidGeometry {
                point_count: points.len(),
            });
        }

        let mut cumulative_m = Vec::with_capacity(points.len());
        cumulative_m.push(0.0);
        let mut total_m = 0.0;
        for pair in points.windows(2) {
            total_m += haversine_m(pair[0], pair[1]);
            cumulative_m.push(total_m);
        }

        Ok(Self {
            points,
            cumulative_m,
            total_m,
        })
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Total trail length in meters.
    pub fn total_length_m(&self) -> f64 {
        self.total_m
    }

    /// Point at arc-distance `d_m` along the trail.
    ///
    /// `d_m` is clamped to `[0, total]`; the result is a linear interpolation
    /// between the two bounding vertices and never extrapolates past either
    /// trail end.
    pub fn point_at_distance(&self, d_m: f64) -> GeoPoint {
        // min/max rather than clamp: tolerates a NaN total from corrupt
        // input without panicking in the tick path.
        let d = d_m.min(self.total_m).max(0.0);

        // First vertex whose cumulative distance reaches d.
        let i = self.cumulative_m.partition_point(|&c| c < d);
        if i == 0 {
            return self.points[0];
        }

        let seg_start = self.cumulative_m[i - 1];
        let seg_len = self.cumulative_m[i] - seg_start;
        if seg_len <= 0.0 {
            // Zero-length segment (duplicate vertex).
            return self.points[i];
        }
        lerp_point(self.points[i - 1], self.points[i], (d - seg_start) / seg_len)
    }

    pub fn bounds(&self) -> TrailBounds {
        let first = self.points[0];
        let mut bounds = TrailBounds {
            min_lon_deg: first.lon_deg,
            min_lat_deg: first.lat_deg,
            max_lon_deg: first.lon_deg,
            max_lat_deg: first.lat_deg,
        };
        for p in self.points.iter().skip(1) {
            bounds.min_lon_deg = bounds.min_lon_deg.min(p.lon_deg);
            bounds.min_lat_deg = bounds.min_lat_deg.min(p.lat_deg);
            bounds.max_lon_deg = bounds.max_lon_deg.max(p.lon_deg);
            bounds.max_lat_deg = bounds.max_lat_deg.max(p.lat_deg);
        }
        bounds
    }
}
