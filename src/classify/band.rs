use serde::Serialize;
use strum_macros::Display;

/// Eccentricity above this is highly elliptical regardless of mean motion.
pub const HEO_ECCENTRICITY: f64 = 0.25;
/// Mean motion (rev/day) above this is low Earth orbit.
pub const LEO_MEAN_MOTION: f64 = 11.3;
/// Mean motion above this (and below the LEO cut) is medium Earth orbit.
pub const MEO_MEAN_MOTION: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Band {
    Leo,
    Meo,
    Geo,
    Heo,
}

/// Band from eccentricity and mean motion alone; independent of category.
/// Comparisons are strict, so a value sitting exactly on a threshold falls
/// to the lower branch.
pub fn band_of(mean_motion: f64, eccentricity: f64) -> Band {
    if eccentricity > HEO_ECCENTRICITY {
        Band::Heo
    } else if mean_motion > LEO_MEAN_MOTION {
        Band::Leo
    } else if mean_motion > MEO_MEAN_MOTION {
        Band::Meo
    } else {
        Band::Geo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typical_regimes() {
        assert_eq!(band_of(15.5, 0.0006), Band::Leo);
        assert_eq!(band_of(2.0, 0.01), Band::Meo);
        assert_eq!(band_of(1.0027, 0.0002), Band::Geo);
        assert_eq!(band_of(2.0, 0.74), Band::Heo);
    }

    #[test]
    fn leo_boundary_falls_to_lower_branch() {
        assert_eq!(band_of(11.3, 0.0), Band::Meo);
        assert_eq!(band_of(11.3 + 1e-9, 0.0), Band::Leo);
    }

    #[test]
    fn meo_boundary_falls_to_lower_branch() {
        assert_eq!(band_of(1.5, 0.0), Band::Geo);
        assert_eq!(band_of(1.5 + 1e-9, 0.0), Band::Meo);
    }

    #[test]
    fn heo_boundary_falls_to_lower_branch() {
        assert_eq!(band_of(15.5, 0.25), Band::Leo);
        assert_eq!(band_of(15.5, 0.25 + 1e-9), Band::Heo);
    }

    #[test]
    fn eccentricity_dominates_mean_motion() {
        // Molniya-style orbit: LEO-like perigee but still HEO.
        assert_eq!(band_of(12.0, 0.7), Band::Heo);
        assert_eq!(band_of(0.5, 0.6), Band::Heo);
    }
}
