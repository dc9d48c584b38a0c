use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// Camera look-at point and altitude (zoom proxy). Always replaced as a
/// whole value, never updated field-by-field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub lat_deg: f64,
    pub lng_deg: f64,
    pub altitude_km: f64,
}

/// Narrowest visible cone, rad.
pub const MIN_VISIBLE_ANGLE_RAD: f64 = 0.35;
// Linear growth rate of the visible cap with camera altitude; reaches the
// full hemisphere near geostationary viewing distance.
const VISIBLE_ANGLE_PER_KM: f64 = 4.4e-5;

/// Angular radius of the visible spherical cap for a camera altitude.
/// Linear in altitude, floored at the minimum cone and capped at a full
/// hemisphere.
pub fn max_visible_angle(altitude_km: f64) -> f64 {
    (altitude_km * VISIBLE_ANGLE_PER_KM).clamp(MIN_VISIBLE_ANGLE_RAD, FRAC_PI_2)
}

/// Great-circle angular distance between two lat/lng points, rad.
pub fn angular_distance_rad(lat1_deg: f64, lng1_deg: f64, lat2_deg: f64, lng2_deg: f64) -> f64 {
    let dlat = (lat2_deg - lat1_deg).to_radians();
    let dlng = (lng2_deg - lng1_deg).to_radians();
    let a = (dlat / 2.0).sin().powi(2)
        + lat1_deg.to_radians().cos() * lat2_deg.to_radians().cos() * (dlng / 2.0).sin().powi(2);
    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Anything with a point on the sphere that the culler can test.
pub trait Locate {
    fn location(&self) -> (f64, f64);
}

impl Locate for crate::cluster::SpatialCluster {
    fn location(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

impl Locate for crate::cluster::PointRecord {
    fn location(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

/// Keep only candidates inside the camera's visible cap. Pure filter: the
/// result is a subset of the input in the input's order; nothing is
/// mutated. A camera with non-finite coordinates sees nothing.
pub fn visible<'a, T: Locate>(candidates: &'a [T], camera: &CameraState) -> Vec<&'a T> {
    let max_angle = max_visible_angle(camera.altitude_km);
    candidates
        .iter()
        .filter(|candidate| {
            let (lat, lng) = candidate.location();
            angular_distance_rad(camera.lat_deg, camera.lng_deg, lat, lng) <= max_angle
        })
        .collect()
}
