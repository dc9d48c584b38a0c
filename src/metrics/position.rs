use chrono::{DateTime, Utc};
use serde::Serialize;
use sgp4::{Constants, Elements};

use crate::elements::OrbitalElementRecord;
use crate::metrics::derive::EARTH_RADIUS_KM;
use crate::metrics::error::PositionError;

/// Instantaneous position above the reference sphere, per (record, instant).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeodeticPosition {
    pub lat_deg: f64,
    pub lng_deg: f64,
    pub altitude_km: f64,
    pub speed_km_s: f64,
}

/// Cached propagator state for one element record. Construction re-parses
/// the retained raw lines, so a record that round-tripped through the feed
/// still reaches sgp4 byte-for-byte.
pub struct Propagator {
    elements: Elements,
    constants: Constants,
}

impl Propagator {
    pub fn new(record: &OrbitalElementRecord) -> Result<Self, PositionError> {
        let elements = Elements::from_tle(
            Some(record.object_name.clone()),
            record.tle.line1.as_bytes(),
            record.tle.line2.as_bytes(),
        )?;
        let constants = Constants::from_elements(&elements)?;
        Ok(Self {
            elements,
            constants,
        })
    }

    /// Sample the geodetic position at one instant. Any failure is an
    /// explicit error, never a NaN-bearing position.
    pub fn geodetic_at(&self, instant: DateTime<Utc>) -> Result<GeodeticPosition, PositionError> {
        let minutes = self
            .elements
            .datetime_to_minutes_since_epoch(&instant.naive_utc())
            .map_err(|e| PositionError::Propagation(e.to_string()))?;

        let prediction = self.constants.propagate(minutes)?;

        let sidereal = sgp4::iau_epoch_to_sidereal_time(sgp4::julian_years_since_j2000(
            &instant.naive_utc(),
        ));

        let pos = teme_to_ecef(prediction.position, sidereal);
        let radius = (pos[0] * pos[0] + pos[1] * pos[1] + pos[2] * pos[2]).sqrt();
        if !radius.is_finite() || radius <= 0.0 {
            return Err(PositionError::Propagation(format!(
                "divergent state for catalog {}",
                self.elements.norad_id
            )));
        }

        let vel = prediction.velocity;
        let speed_km_s = (vel[0] * vel[0] + vel[1] * vel[1] + vel[2] * vel[2]).sqrt();
        if !speed_km_s.is_finite() {
            return Err(PositionError::Propagation(format!(
                "divergent velocity for catalog {}",
                self.elements.norad_id
            )));
        }

        Ok(GeodeticPosition {
            lat_deg: (pos[2] / radius).asin().to_degrees(),
            lng_deg: pos[1].atan2(pos[0]).to_degrees(),
            altitude_km: radius - EARTH_RADIUS_KM,
            speed_km_s,
        })
    }
}

fn teme_to_ecef(pos_teme: [f64; 3], gmst: f64) -> [f64; 3] {
    let cos_gmst = gmst.cos();
    let sin_gmst = gmst.sin();
    [
        pos_teme[0] * cos_gmst + pos_teme[1] * sin_gmst,
        -pos_teme[0] * sin_gmst + pos_teme[1] * cos_gmst,
        pos_teme[2],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::parse_catalog;
    use chrono::TimeZone;

    const ISS_TLE: &str = "\
ISS (ZARYA)
1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927
2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

    #[test]
    fn samples_finite_low_orbit_position() {
        let records = parse_catalog(ISS_TLE);
        let propagator = Propagator::new(&records[0]).unwrap();
        let instant = Utc.with_ymd_and_hms(2008, 9, 21, 0, 0, 0).unwrap();

        let pos = propagator.geodetic_at(instant).unwrap();
        assert!(pos.lat_deg.abs() <= 52.0, "lat bounded by inclination");
        assert!(pos.lng_deg >= -180.0 && pos.lng_deg <= 180.0);
        assert!(pos.altitude_km > 200.0 && pos.altitude_km < 500.0);
        assert!(pos.speed_km_s > 6.0 && pos.speed_km_s < 9.0);
    }
}
