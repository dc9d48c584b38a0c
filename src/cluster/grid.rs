use std::collections::BTreeMap;
use std::collections::HashMap;

use crate::cluster::types::{PointRecord, SpatialCluster};

struct CellAccum {
    lat_sum: f64,
    lng_sum: f64,
    count: usize,
    payload: BTreeMap<String, f64>,
    category_weights: BTreeMap<String, f64>,
}

/// Fold a point set into one cluster per occupied grid cell of
/// `cell_deg` degrees. Linear in the input; points with non-finite
/// coordinates are dropped. Output order is sorted by cell key, so the
/// same input always yields the same cluster list.
pub fn cluster_points(points: &[PointRecord], cell_deg: f64) -> Vec<SpatialCluster> {
    if !cell_deg.is_finite() || cell_deg <= 0.0 {
        return Vec::new();
    }

    let mut cells: HashMap<(i64, i64), CellAccum> = HashMap::new();

    for point in points {
        if !point.lat.is_finite() || !point.lng.is_finite() {
            continue;
        }

        let key = (
            (point.lat / cell_deg).floor() as i64,
            (point.lng / cell_deg).floor() as i64,
        );

        let cell = cells.entry(key).or_insert_with(|| CellAccum {
            lat_sum: 0.0,
            lng_sum: 0.0,
            count: 0,
            payload: BTreeMap::new(),
            category_weights: BTreeMap::new(),
        });

        cell.lat_sum += point.lat;
        cell.lng_sum += point.lng;
        cell.count += 1;

        for (field, value) in &point.payload {
            if value.is_finite() {
                *cell.payload.entry(field.clone()).or_insert(0.0) += value;
            }
        }

        if !point.category.is_empty() && point.weight.is_finite() {
            *cell
                .category_weights
                .entry(point.category.clone())
                .or_insert(0.0) += point.weight;
        }
    }

    let mut keyed: Vec<_> = cells.into_iter().collect();
    keyed.sort_by_key(|(key, _)| *key);

    keyed
        .into_iter()
        .map(|(_, cell)| {
            let dominant_category = dominant(&cell.category_weights);
            SpatialCluster {
                lat: cell.lat_sum / cell.count as f64,
                lng: cell.lng_sum / cell.count as f64,
                member_count: cell.count,
                payload: cell.payload,
                category_weights: cell.category_weights,
                dominant_category,
            }
        })
        .collect()
}

// Resolved once after the fold; strict comparison over the sorted map
// leaves ties with the lexically smallest tag.
fn dominant(weights: &BTreeMap<String, f64>) -> Option<String> {
    let mut best: Option<(&String, f64)> = None;
    for (tag, weight) in weights {
        match best {
            Some((_, w)) if *weight <= w => {}
            _ => best = Some((tag, *weight)),
        }
    }
    best.map(|(tag, _)| tag.clone())
}
