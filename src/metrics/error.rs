use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("degenerate mean motion {mean_motion} for catalog {catalog_id}")]
    DegenerateMeanMotion { catalog_id: u64, mean_motion: f64 },
    #[error("orbit below the reference sphere (a = {semi_major_axis_km:.1} km) for catalog {catalog_id}")]
    SubsurfaceOrbit {
        catalog_id: u64,
        semi_major_axis_km: f64,
    },
}

#[derive(Debug, Error)]
pub enum PositionError {
    #[error("invalid tle: {0}")]
    InvalidTle(#[from] sgp4::TleError),
    #[error("elements error: {0}")]
    Elements(#[from] sgp4::ElementsError),
    #[error("propagation error: {0}")]
    Propagation(String),
}

impl From<sgp4::Error> for PositionError {
    fn from(err: sgp4::Error) -> Self {
        PositionError::Propagation(err.to_string())
    }
}
