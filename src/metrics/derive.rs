use serde::Serialize;
use std::f64::consts::PI;
use strum_macros::Display;

use crate::elements::OrbitalElementRecord;
use crate::metrics::error::MetricsError;

/// Earth gravitational parameter, km^3/s^2.
pub const EARTH_MU_KM3_S2: f64 = 398600.4418;
/// Reference sphere radius, km.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

const SECONDS_PER_DAY: f64 = 86400.0;
const MINUTES_PER_DAY: f64 = 1440.0;
const SPEED_OF_LIGHT_KM_MS: f64 = 299.792458;
const SOLAR_CONSTANT_W_M2: f64 = 1361.0;
const PANEL_EFFICIENCY: f64 = 0.3;

// Eccentricity is clamped below 1 before use; a parabolic or hyperbolic
// value would break the semi-major-axis inversion.
const MAX_ECCENTRICITY: f64 = 0.999999;

/// Altitude-banded approximation of the trapped-particle belts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RadiationLevel {
    Low,
    Moderate,
    High,
    Extreme,
}

/// Physical metrics derived from an element record alone; no propagation
/// is required, so these stay available even when position sampling fails.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitalMetrics {
    pub period_minutes: f64,
    pub apogee_km: f64,
    pub perigee_km: f64,
    pub average_altitude_km: f64,
    pub eclipse_fraction: f64,
    pub radiation: RadiationLevel,
    /// Line-of-sight round trip, ms.
    pub latency_ms: f64,
    pub power_density_w_m2: f64,
}

/// Radiation band lookup keyed on altitude above the reference sphere.
pub fn radiation_at_altitude(altitude_km: f64) -> RadiationLevel {
    if altitude_km < 1000.0 {
        RadiationLevel::Low
    } else if altitude_km < 6000.0 {
        // inner belt
        RadiationLevel::High
    } else if altitude_km < 13000.0 {
        RadiationLevel::Moderate
    } else if altitude_km < 40000.0 {
        // outer belt
        RadiationLevel::Extreme
    } else {
        RadiationLevel::Moderate
    }
}

/// Derive physical metrics from one element record.
///
/// The eclipse fraction is a fixed-umbra geometric approximation: the
/// half-angle subtended by the Earth at the average orbit altitude, over a
/// full revolution. It ignores season and beta angle on purpose.
pub fn derive_metrics(record: &OrbitalElementRecord) -> Result<OrbitalMetrics, MetricsError> {
    let mean_motion = record.mean_motion;
    if !mean_motion.is_finite() || mean_motion <= 0.0 {
        return Err(MetricsError::DegenerateMeanMotion {
            catalog_id: record.catalog_id,
            mean_motion,
        });
    }

    let eccentricity = record.eccentricity.clamp(0.0, MAX_ECCENTRICITY);

    let period_minutes = MINUTES_PER_DAY / mean_motion;

    let n_rad_s = mean_motion * 2.0 * PI / SECONDS_PER_DAY;
    let semi_major_axis_km = (EARTH_MU_KM3_S2 / (n_rad_s * n_rad_s)).cbrt();

    // Above ~17.07 rev/day the implied orbit sits at or below the surface;
    // the eclipse asin would leave [-1, 1], so treat it as degenerate.
    if semi_major_axis_km <= EARTH_RADIUS_KM {
        return Err(MetricsError::SubsurfaceOrbit {
            catalog_id: record.catalog_id,
            semi_major_axis_km,
        });
    }

    let apogee_km = semi_major_axis_km * (1.0 + eccentricity) - EARTH_RADIUS_KM;
    let perigee_km = semi_major_axis_km * (1.0 - eccentricity) - EARTH_RADIUS_KM;
    let average_altitude_km = (apogee_km + perigee_km) / 2.0;

    let eclipse_fraction =
        (EARTH_RADIUS_KM / (EARTH_RADIUS_KM + average_altitude_km)).asin() / PI;

    let latency_ms = average_altitude_km * 2.0 / SPEED_OF_LIGHT_KM_MS;

    let power_density_w_m2 =
        SOLAR_CONSTANT_W_M2 * PANEL_EFFICIENCY * (1.0 - eclipse_fraction);

    Ok(OrbitalMetrics {
        period_minutes,
        apogee_km,
        perigee_km,
        average_altitude_km,
        eclipse_fraction,
        radiation: radiation_at_altitude(average_altitude_km),
        latency_ms,
        power_density_w_m2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::TleLines;
    use approx::assert_relative_eq;
    use chrono::Utc;

    fn record(mean_motion: f64, eccentricity: f64, inclination_deg: f64) -> OrbitalElementRecord {
        OrbitalElementRecord {
            object_name: "TEST SAT".to_string(),
            catalog_id: 1,
            epoch: Utc::now(),
            mean_motion,
            eccentricity,
            inclination_deg,
            raan_deg: 0.0,
            arg_perigee_deg: 0.0,
            mean_anomaly_deg: 0.0,
            tle: TleLines {
                line1: String::new(),
                line2: String::new(),
            },
        }
    }

    #[test]
    fn reference_low_orbit_scenario() {
        let metrics = derive_metrics(&record(15.5, 0.0006, 51.6)).unwrap();
        assert_relative_eq!(metrics.period_minutes, 92.9, max_relative = 0.001);
        assert!(
            (metrics.average_altitude_km - 400.0).abs() < 50.0,
            "average altitude {} out of range",
            metrics.average_altitude_km
        );
        assert_eq!(metrics.radiation, RadiationLevel::Low);
        assert!(metrics.eclipse_fraction > 0.3 && metrics.eclipse_fraction < 0.4);
    }

    #[test]
    fn apogee_never_below_perigee() {
        for &(mm, e) in &[
            (15.5, 0.0006),
            (2.0, 0.7),
            (1.0026, 0.0001),
            (12.0, 0.25),
            (11.3, 0.0),
        ] {
            let metrics = derive_metrics(&record(mm, e, 0.0)).unwrap();
            assert!(metrics.apogee_km >= metrics.perigee_km, "mm={} e={}", mm, e);
            assert!(metrics.eclipse_fraction >= 0.0 && metrics.eclipse_fraction <= 1.0);
        }
    }

    #[test]
    fn derivation_is_idempotent() {
        let rec = record(14.2, 0.01, 98.0);
        let a = derive_metrics(&rec).unwrap();
        let b = derive_metrics(&rec).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn degenerate_mean_motion_is_rejected() {
        assert!(derive_metrics(&record(0.0, 0.0, 0.0)).is_err());
        assert!(derive_metrics(&record(-1.0, 0.0, 0.0)).is_err());
        assert!(derive_metrics(&record(f64::NAN, 0.0, 0.0)).is_err());
        assert!(derive_metrics(&record(f64::INFINITY, 0.0, 0.0)).is_err());
    }

    #[test]
    fn suborbital_mean_motion_is_rejected_not_nan() {
        // Past ~17.07 rev/day the semi-major axis dips under the reference
        // sphere; these must come back as errors, never NaN metrics.
        for mm in [17.1, 18.0, 20.0] {
            match derive_metrics(&record(mm, 0.0, 0.0)) {
                Err(MetricsError::SubsurfaceOrbit { .. }) => {}
                other => panic!("mm={}: expected subsurface error, got {:?}", mm, other),
            }
        }
    }

    #[test]
    fn fastest_valid_orbits_keep_metrics_in_range() {
        // Just below the subsurface cutoff everything must stay finite.
        for mm in [16.0, 16.5, 17.0] {
            let metrics = derive_metrics(&record(mm, 0.0006, 51.6)).unwrap();
            assert!(
                metrics.eclipse_fraction >= 0.0 && metrics.eclipse_fraction <= 1.0,
                "mm={}: eclipse fraction {}",
                mm,
                metrics.eclipse_fraction
            );
            assert!(metrics.latency_ms >= 0.0, "mm={}", mm);
            assert!(metrics.power_density_w_m2.is_finite(), "mm={}", mm);
        }
    }

    #[test]
    fn eccentricity_is_clamped_before_use() {
        let metrics = derive_metrics(&record(2.0, 1.5, 0.0)).unwrap();
        assert!(metrics.perigee_km.is_finite());
        assert!(metrics.apogee_km >= metrics.perigee_km);
    }

    #[test]
    fn geostationary_regime_sits_in_outer_belt() {
        let metrics = derive_metrics(&record(1.0027, 0.0002, 0.1)).unwrap();
        assert!((metrics.average_altitude_km - 35786.0).abs() < 200.0);
        assert_eq!(metrics.radiation, RadiationLevel::Extreme);
    }

    #[test]
    fn radiation_band_edges() {
        assert_eq!(radiation_at_altitude(999.0), RadiationLevel::Low);
        assert_eq!(radiation_at_altitude(1000.0), RadiationLevel::High);
        assert_eq!(radiation_at_altitude(6000.0), RadiationLevel::Moderate);
        assert_eq!(radiation_at_altitude(13000.0), RadiationLevel::Extreme);
        assert_eq!(radiation_at_altitude(40000.0), RadiationLevel::Moderate);
    }

    #[test]
    fn power_density_tracks_eclipse_fraction() {
        let low = derive_metrics(&record(15.5, 0.0006, 51.6)).unwrap();
        let geo = derive_metrics(&record(1.0027, 0.0002, 0.1)).unwrap();
        // Less shadow time at GEO means more harvestable power.
        assert!(geo.eclipse_fraction < low.eclipse_fraction);
        assert!(geo.power_density_w_m2 > low.power_density_w_m2);
    }
}
