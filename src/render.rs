use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::classify::{band_of, categorize, display_altitude, Band, Category};
use crate::cluster::SpatialCluster;
use crate::elements::OrbitalElementRecord;
use crate::metrics::{derive_metrics, GeodeticPosition, OrbitalMetrics, Propagator};
use crate::viewport::Locate;

/// Everything the renderer needs for one satellite: metrics, tags, and the
/// sampled position when propagation succeeded. `position: None` is the
/// explicit unavailable sentinel; the metrics stand on their own.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SatelliteRecord {
    pub label: String,
    pub catalog_id: u64,
    pub category: Category,
    pub band: Band,
    pub metrics: OrbitalMetrics,
    pub position: Option<GeodeticPosition>,
}

impl SatelliteRecord {
    /// Flat marker for the rendering layer; `None` while the position is
    /// unavailable.
    pub fn marker(&self) -> Option<Marker> {
        self.position.map(|pos| Marker {
            lat: pos.lat_deg,
            lng: pos.lng_deg,
            altitude: display_altitude(self.band, pos.altitude_km),
            color_tag: self.category.to_string(),
            label: self.label.clone(),
        })
    }
}

/// Flat marker contract consumed by the external rendering layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub lat: f64,
    pub lng: f64,
    /// Display-scale altitude in globe radii; cosmetic only.
    pub altitude: f64,
    pub color_tag: String,
    pub label: String,
}

impl Locate for Marker {
    fn location(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

/// Flat cluster contract consumed by the external rendering layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterMarker {
    pub lat: f64,
    pub lng: f64,
    pub member_count: usize,
    pub aggregate_payload: BTreeMap<String, f64>,
    pub color_tag: Option<String>,
}

impl From<&SpatialCluster> for ClusterMarker {
    fn from(cluster: &SpatialCluster) -> Self {
        Self {
            lat: cluster.lat,
            lng: cluster.lng,
            member_count: cluster.member_count,
            aggregate_payload: cluster.payload.clone(),
            color_tag: cluster.dominant_category.clone(),
        }
    }
}

impl Locate for ClusterMarker {
    fn location(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

/// Derive the full per-satellite record set for one instant. Degenerate
/// element records are skipped with a warning; propagation failures only
/// cost the record its position.
pub fn build_satellite_records(
    records: &[OrbitalElementRecord],
    instant: DateTime<Utc>,
) -> Vec<SatelliteRecord> {
    let mut out = Vec::with_capacity(records.len());

    for record in records {
        let metrics = match derive_metrics(record) {
            Ok(metrics) => metrics,
            Err(e) => {
                log::warn!("skipping '{}': {}", record.object_name, e);
                continue;
            }
        };

        let position = Propagator::new(record)
            .and_then(|p| p.geodetic_at(instant))
            .map_err(|e| {
                log::warn!("position unavailable for '{}': {}", record.object_name, e);
                e
            })
            .ok();

        out.push(SatelliteRecord {
            label: record.object_name.clone(),
            catalog_id: record.catalog_id,
            category: categorize(&record.object_name),
            band: band_of(record.mean_motion, record.eccentricity),
            metrics,
            position,
        });
    }

    out
}
