use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::elements::error::ElementsError;

/// Raw TLE line pair, carried through untouched for the external propagator.
#[derive(Debug, Clone, Serialize)]
pub struct TleLines {
    pub line1: String,
    pub line2: String,
}

/// One ingested orbital element set. Immutable after ingestion; the feed
/// replaces whole record sets, never individual fields.
#[derive(Debug, Clone, Serialize)]
pub struct OrbitalElementRecord {
    pub object_name: String,
    pub catalog_id: u64,
    pub epoch: DateTime<Utc>,
    /// Revolutions per day.
    pub mean_motion: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub raan_deg: f64,
    pub arg_perigee_deg: f64,
    pub mean_anomaly_deg: f64,
    #[serde(skip)]
    pub tle: TleLines,
}

impl OrbitalElementRecord {
    pub fn from_tle(
        name: Option<String>,
        line1: &str,
        line2: &str,
    ) -> Result<Self, ElementsError> {
        let elements = sgp4::Elements::from_tle(name, line1.as_bytes(), line2.as_bytes())?;

        let object_name = elements
            .object_name
            .clone()
            .unwrap_or_else(|| format!("NORAD {}", elements.norad_id));

        Ok(Self {
            object_name,
            catalog_id: elements.norad_id,
            epoch: elements.datetime.and_utc(),
            mean_motion: elements.mean_motion,
            eccentricity: elements.eccentricity,
            inclination_deg: elements.inclination,
            raan_deg: elements.right_ascension,
            arg_perigee_deg: elements.argument_of_perigee,
            mean_anomaly_deg: elements.mean_anomaly,
            tle: TleLines {
                line1: line1.to_string(),
                line2: line2.to_string(),
            },
        })
    }
}
