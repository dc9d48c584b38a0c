mod grid;
mod pyramid;
mod store;
mod types;

pub use grid::cluster_points;
pub use pyramid::{select_tier, LodPyramid, LodTier};
pub use pyramid::{COARSE_CELL_DEG, FINE_CELL_DEG, MEDIUM_CELL_DEG};
pub use store::OverlayStore;
pub use types::{PointRecord, SpatialCluster};
