//! GeoJSON ingestion for trail and POI data.
//!
//! The trail contract is a FeatureCollection whose first LineString feature
//! carries the ordered trail coordinates (longitude first). POIs are a
//! Point FeatureCollection where each feature's properties carry a
//! `km_from_start` distance and an optional `name`.

use foundation::math::GeoPoint;
use serde_json::Value;

use crate::poi::TrailPoi;

#[derive(Debug)]
pub enum TrailDataError {
    NotAFeatureCollection,
    NoLineString,
    InvalidFeature { index: usize, reason: String },
}

impl std::fmt::Display for TrailDataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrailDataError::NotAFeatureCollection => {
                write!(f, "expected GeoJSON FeatureCollection")
            }
            TrailDataError::NoLineString => {
                write!(f, "FeatureCollection has no LineString feature")
            }
            TrailDataError::InvalidFeature { index, reason } => {
                write!(f, "invalid feature at index {index}: {reason}")
            }
        }
    }
}

impl std::error::Error for TrailDataError {}

/// Parses the first LineString feature into ordered trail points.
pub fn trail_points_from_geojson_str(payload: &str) -> Result<Vec<GeoPoint>, TrailDataError> {
    let value: Value =
        serde_json::from_str(payload).map_err(|e| TrailDataError::InvalidFeature {
            index: 0,
            reason: format!("JSON parse error: {e}"),
        })?;
    trail_points_from_geojson_value(&value)
}

pub fn trail_points_from_geojson_value(value: &Value) -> Result<Vec<GeoPoint>, TrailDataError> {
    let features = collection_features(value)?;

    for (index, feature) in features.iter().enumerate() {
        let geometry = feature_geometry(feature, index)?;
        let ty = geometry.get("type").and_then(|v| v.as_str()).ok_or(
            TrailDataError::InvalidFeature {
                index,
                reason: "geometry missing type".to_string(),
            },
        )?;
        if ty != "LineString" {
            continue;
        }

        let coords = geometry.get("coordinates").and_then(|v| v.as_array()).ok_or(
            TrailDataError::InvalidFeature {
                index,
                reason: "LineString missing coordinates".to_string(),
            },
        )?;
        let mut points = Vec::with_capacity(coords.len());
        for coord in coords {
            points.push(
                parse_position(coord)
                    .map_err(|reason| TrailDataError::InvalidFeature { index, reason })?,
            );
        }
        return Ok(points);
    }

    Err(TrailDataError::NoLineString)
}

/// Parses a Point FeatureCollection into POIs with along-trail distances.
pub fn pois_from_geojson_str(payload: &str) -> Result<Vec<TrailPoi>, TrailDataError> {
    let value: Value =
        serde_json::from_str(payload).map_err(|e| TrailDataError::InvalidFeature {
            index: 0,
            reason: format!("JSON parse error: {e}"),
        })?;
    pois_from_geojson_value(&value)
}

pub fn pois_from_geojson_value(value: &Value) -> Result<Vec<TrailPoi>, TrailDataError> {
    let features = collection_features(value)?;

    let mut pois = Vec::with_capacity(features.len());
    for (index, feature) in features.iter().enumerate() {
        let geometry = feature_geometry(feature, index)?;
        let ty = geometry.get("type").and_then(|v| v.as_str()).ok_or(
            TrailDataError::InvalidFeature {
                index,
                reason: "geometry missing type".to_string(),
            },
        )?;
        if ty != "Point" {
            return Err(TrailDataError::InvalidFeature {
                index,
                reason: format!("expected Point geometry, got {ty}"),
            });
        }

        let position = geometry
            .get("coordinates")
            .ok_or(TrailDataError::InvalidFeature {
                index,
                reason: "Point missing coordinates".to_string(),
            })
            .and_then(|coord| {
                parse_position(coord)
                    .map_err(|reason| TrailDataError::InvalidFeature { index, reason })
            })?;

        let properties = feature.get("properties").and_then(|v| v.as_object());
        let km_from_start = properties
            .and_then(|p| p.get("km_from_start"))
            .and_then(|v| v.as_f64())
            .ok_or(TrailDataError::InvalidFeature {
                index,
                reason: "POI missing km_from_start".to_string(),
            })?;
        let name = properties
            .and_then(|p| p.get("name"))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        pois.push(TrailPoi {
            name,
            position,
            distance_from_start_m: km_from_start * 1000.0,
        });
    }

    Ok(pois)
}

fn collection_features(value: &Value) -> Result<&Vec<Value>, TrailDataError> {
    let obj = value
        .as_object()
        .ok_or(TrailDataError::NotAFeatureCollection)?;
    let ty = obj
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or(TrailDataError::NotAFeatureCollection)?;
    if ty != "FeatureCollection" {
        return Err(TrailDataError::NotAFeatureCollection);
    }
    obj.get("features")
        .and_then(|v| v.as_array())
        .ok_or(TrailDataError::NotAFeatureCollection)
}

fn feature_geometry<'a>(
    feature: &'a Value,
    index: usize,
) -> Result<&'a Value, TrailDataError> {
    let obj = feature.as_object().ok_or(TrailDataError::InvalidFeature {
        index,
        reason: "feature must be an object".to_string(),
    })?;
    let ty = obj
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or(TrailDataError::InvalidFeature {
            index,
            reason: "feature missing type".to_string(),
        })?;
    if ty != "Feature" {
        return Err(TrailDataError::InvalidFeature {
            index,
            reason: format!("unexpected feature type: {ty}"),
        });
    }
    obj.get("geometry").ok_or(TrailDataError::InvalidFeature {
        index,
        reason: "feature missing geometry".to_string(),
    })
}

fn parse_position(coord: &Value) -> Result<GeoPoint, String> {
    let arr = coord
        .as_array()
        .ok_or("position must be an array".to_string())?;
    if arr.len() < 2 {
        return Err("position must have [lon, lat]".to_string());
    }
    let lon = arr[0].as_f64().ok_or("lon must be a number".to_string())?;
    let lat = arr[1].as_f64().ok_or("lat must be a number".to_string())?;
    Ok(GeoPoint::new(lon, lat))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{TrailDataError, pois_from_geojson_str, trail_points_from_geojson_str};
    use foundation::math::GeoPoint;

    #[test]
    fn parses_sample_trail_line() {
        let payload = include_str!("../../tools/assets/highland_mary_trail.json");
        let points = trail_points_from_geojson_str(payload).expect("parse trail");
        assert_eq!(points.len(), 28);
        assert_eq!(points[0], GeoPoint::new(-107.575507, 37.771122));
        // Loop trail: last vertex returns to the start.
        assert_eq!(points[27], points[0]);
    }

    #[test]
    fn parses_sample_pois_with_distances() {
        let payload = include_str!("../../tools/assets/highland_mary_pois.json");
        let pois = pois_from_geojson_str(payload).expect("parse pois");
        assert_eq!(pois.len(), 5);
        assert_eq!(pois[0].name.as_deref(), Some("Trailhead"));
        assert_eq!(pois[0].distance_from_start_m, 0.0);
        assert_eq!(pois[4].distance_from_start_m, 8500.0);
    }

    #[test]
    fn rejects_non_feature_collections() {
        let err = trail_points_from_geojson_str(r#"{"type":"LineString"}"#).unwrap_err();
        assert!(matches!(err, TrailDataError::NotAFeatureCollection));
    }

    #[test]
    fn rejects_collections_without_a_line() {
        let payload = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [0.0, 0.0] },
                "properties": {}
            }]
        }"#;
        let err = trail_points_from_geojson_str(payload).unwrap_err();
        assert!(matches!(err, TrailDataError::NoLineString));
    }

    #[test]
    fn rejects_pois_without_distance() {
        let payload = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [0.0, 0.0] },
                "properties": { "name": "nameless distance" }
            }]
        }"#;
        let err = pois_from_geojson_str(payload).unwrap_err();
        assert!(matches!(
            err,
            TrailDataError::InvalidFeature { index: 0, .. }
        ));
    }

    #[test]
    fn rejects_malformed_positions() {
        let payload = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": { "type": "LineString", "coordinates": [[1.0]] },
                "properties": {}
            }]
        }"#;
        assert!(trail_points_from_geojson_str(payload).is_err());
    }
}
