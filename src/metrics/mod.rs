mod derive;
mod error;
mod position;

pub use derive::{derive_metrics, radiation_at_altitude, OrbitalMetrics, RadiationLevel};
pub use derive::{EARTH_MU_KM3_S2, EARTH_RADIUS_KM};
pub use error::{MetricsError, PositionError};
pub use position::{GeodeticPosition, Propagator};
