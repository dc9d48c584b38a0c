use serde::Serialize;
use strum_macros::Display;

use crate::cluster::grid::cluster_points;
use crate::cluster::types::{PointRecord, SpatialCluster};

pub const COARSE_CELL_DEG: f64 = 10.0;
pub const MEDIUM_CELL_DEG: f64 = 4.0;
pub const FINE_CELL_DEG: f64 = 1.5;

// Camera-altitude cuts for tier selection; fixed, not data-dependent.
const COARSE_ABOVE_KM: f64 = 15_000.0;
const MEDIUM_ABOVE_KM: f64 = 4_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LodTier {
    Coarse,
    Medium,
    Fine,
}

/// Three fixed-resolution aggregations of one raw point set. Each tier is
/// folded directly from the raw points, never from a coarser tier, so
/// rounding never compounds.
#[derive(Debug, Clone, Serialize)]
pub struct LodPyramid {
    pub coarse: Vec<SpatialCluster>,
    pub medium: Vec<SpatialCluster>,
    pub fine: Vec<SpatialCluster>,
}

impl LodPyramid {
    pub fn build(points: &[PointRecord]) -> Self {
        Self {
            coarse: cluster_points(points, COARSE_CELL_DEG),
            medium: cluster_points(points, MEDIUM_CELL_DEG),
            fine: cluster_points(points, FINE_CELL_DEG),
        }
    }

    pub fn tier(&self, tier: LodTier) -> &[SpatialCluster] {
        match tier {
            LodTier::Coarse => &self.coarse,
            LodTier::Medium => &self.medium,
            LodTier::Fine => &self.fine,
        }
    }
}

/// Tier for a camera altitude (zoom proxy); pure threshold lookup.
pub fn select_tier(camera_altitude_km: f64) -> LodTier {
    if camera_altitude_km > COARSE_ABOVE_KM {
        LodTier::Coarse
    } else if camera_altitude_km > MEDIUM_ABOVE_KM {
        LodTier::Medium
    } else {
        LodTier::Fine
    }
}
