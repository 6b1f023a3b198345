use foundation::math::GeoPoint;

/// Named point of interest with its along-trail distance.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailPoi {
    pub name: Option<String>,
    pub position: GeoPoint,
    pub distance_from_start_m: f64,
}

/// Points of interest ordered by distance from the trail start.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TrailPois {
    pois: Vec<TrailPoi>,
}

impl TrailPois {
    pub fn new(mut pois: Vec<TrailPoi>) -> Self {
        pois.sort_by(|a, b| {
            a.distance_from_start_m
                .partial_cmp(&b.distance_from_start_m)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Self { pois }
    }

    pub fn is_empty(&self) -> bool {
        self.pois.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pois.len()
    }

    pub fn as_slice(&self) -> &[TrailPoi] {
        &self.pois
    }

    /// How many POIs the reveal front at `visible_m` has passed.
    pub fn revealed_count(&self, visible_m: f64) -> usize {
        self.pois
            .partition_point(|poi| poi.distance_from_start_m <= visible_m)
    }
}

#[cfg(test)]
mod tests {
    use super::{TrailPoi, TrailPois};
    use foundation::math::GeoPoint;

    fn poi(name: &str, distance_m: f64) -> TrailPoi {
        TrailPoi {
            name: Some(name.to_string()),
            position: GeoPoint::new(0.0, 0.0),
            distance_from_start_m: distance_m,
        }
    }

    #[test]
    fn sorts_by_distance_from_start() {
        let pois = TrailPois::new(vec![poi("far", 900.0), poi("near", 100.0)]);
        assert_eq!(pois.as_slice()[0].name.as_deref(), Some("near"));
        assert_eq!(pois.as_slice()[1].name.as_deref(), Some("far"));
    }

    #[test]
    fn revealed_count_tracks_the_front() {
        let pois = TrailPois::new(vec![
            poi("a", 0.0),
            poi("b", 500.0),
            poi("c", 1000.0),
        ]);
        assert_eq!(pois.revealed_count(0.0), 1);
        assert_eq!(pois.revealed_count(499.0), 1);
        assert_eq!(pois.revealed_count(500.0), 2);
        assert_eq!(pois.revealed_count(2000.0), 3);
    }

    #[test]
    fn empty_set_reveals_nothing() {
        let pois = TrailPois::default();
        assert!(pois.is_empty());
        assert_eq!(pois.revealed_count(1000.0), 0);
    }
}
