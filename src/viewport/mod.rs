mod cull;
mod throttle;

pub use cull::{angular_distance_rad, max_visible_angle, visible, CameraState, Locate};
pub use cull::MIN_VISIBLE_ANGLE_RAD;
pub use throttle::{MonotonicTime, RecomputeThrottle, TimeSource};
pub use throttle::{DEFAULT_QUIET_MS, DEFAULT_WINDOW_MS};
