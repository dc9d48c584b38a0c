use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One raw geographic point with its domain payload. Immutable input to
/// clustering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointRecord {
    pub lat: f64,
    pub lng: f64,
    /// Numeric payload fields; summed per cluster.
    #[serde(default)]
    pub payload: BTreeMap<String, f64>,
    /// Categorical tag competing for cluster dominance.
    #[serde(default)]
    pub category: String,
    /// Weight the tag contributes; 1.0 for plain counting.
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl PointRecord {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            payload: BTreeMap::new(),
            category: String::new(),
            weight: 1.0,
        }
    }
}

/// Aggregate of all points sharing one grid cell. Never mutated after the
/// clustering pass that creates it.
#[derive(Debug, Clone, Serialize)]
pub struct SpatialCluster {
    /// Arithmetic mean of member latitudes.
    pub lat: f64,
    /// Arithmetic mean of member longitudes.
    pub lng: f64,
    pub member_count: usize,
    /// Per-field sums over members.
    pub payload: BTreeMap<String, f64>,
    /// Aggregate weight per categorical tag.
    pub category_weights: BTreeMap<String, f64>,
    /// Tag with the largest aggregate weight; ties go to the lexically
    /// smallest tag.
    pub dominant_category: Option<String>,
}
