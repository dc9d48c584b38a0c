use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::cluster::PointRecord;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("not a GeoJSON feature collection")]
    NotFeatureCollection,
}

/// How a feature's property bag maps onto a point record.
#[derive(Debug, Clone, Default)]
pub struct DatasetOptions {
    /// Property holding the categorical tag (fuel type, provider, ...).
    pub category_property: Option<String>,
    /// Property holding the tag weight; each point weighs 1.0 when unset
    /// or absent.
    pub weight_property: Option<String>,
}

/// Read a GeoJSON feature collection of Point features into point records.
pub fn load_feature_collection(
    path: &Path,
    options: &DatasetOptions,
) -> Result<Vec<PointRecord>, DatasetError> {
    let content = std::fs::read_to_string(path)?;
    let json: Value = serde_json::from_str(&content)?;
    parse_feature_collection(&json, options)
}

/// Parse an in-memory feature collection. Features that are not points or
/// lack coordinates are skipped with a warning; one bad feature never
/// aborts the dataset.
pub fn parse_feature_collection(
    json: &Value,
    options: &DatasetOptions,
) -> Result<Vec<PointRecord>, DatasetError> {
    if json.get("type").and_then(Value::as_str) != Some("FeatureCollection") {
        return Err(DatasetError::NotFeatureCollection);
    }
    let features = json
        .get("features")
        .and_then(Value::as_array)
        .ok_or(DatasetError::NotFeatureCollection)?;

    let mut points = Vec::with_capacity(features.len());
    for (index, feature) in features.iter().enumerate() {
        match parse_feature(feature, options) {
            Some(point) => points.push(point),
            None => {
                log::warn!("skipping feature {}: not a usable point", index);
            }
        }
    }
    Ok(points)
}

fn parse_feature(feature: &Value, options: &DatasetOptions) -> Option<PointRecord> {
    let geometry = feature.get("geometry")?;
    if geometry.get("type").and_then(Value::as_str) != Some("Point") {
        return None;
    }
    let coords = geometry.get("coordinates")?.as_array()?;
    // GeoJSON orders coordinates lng-first.
    let lng = coords.first()?.as_f64()?;
    let lat = coords.get(1)?.as_f64()?;

    let empty = Value::Null;
    let props = feature.get("properties").unwrap_or(&empty);

    let mut payload = BTreeMap::new();
    if let Some(map) = props.as_object() {
        for (key, value) in map {
            if let Some(number) = value.as_f64() {
                payload.insert(key.clone(), number);
            }
        }
    }

    let category = options
        .category_property
        .as_ref()
        .and_then(|key| props.get(key))
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    let weight = options
        .weight_property
        .as_ref()
        .and_then(|key| props.get(key))
        .and_then(Value::as_f64)
        .unwrap_or(1.0);

    Some(PointRecord {
        lat,
        lng,
        payload,
        category,
        weight,
    })
}
