use crate::classify::band::Band;

// Display-scale slices per band, in globe radii above the surface. The
// slices are disjoint so regimes never visually interleave.
const LEO_SPAN: (f64, f64) = (0.05, 0.16);
const MEO_SPAN: (f64, f64) = (0.18, 0.28);
const GEO_SPAN: (f64, f64) = (0.30, 0.36);
const HEO_SPAN: (f64, f64) = (0.38, 0.48);

// True-altitude windows mapped onto each slice, km.
const LEO_RANGE: (f64, f64) = (0.0, 2000.0);
const MEO_RANGE: (f64, f64) = (2000.0, 20000.0);
const GEO_RANGE: (f64, f64) = (20000.0, 40000.0);
const HEO_RANGE: (f64, f64) = (0.0, 60000.0);

/// Compress true altitude onto a bounded display scale with a disjoint
/// slice per orbital regime. Monotonic within a band; rendering only,
/// carries no physical meaning.
pub fn display_altitude(band: Band, altitude_km: f64) -> f64 {
    let (range, span) = match band {
        Band::Leo => (LEO_RANGE, LEO_SPAN),
        Band::Meo => (MEO_RANGE, MEO_SPAN),
        Band::Geo => (GEO_RANGE, GEO_SPAN),
        Band::Heo => (HEO_RANGE, HEO_SPAN),
    };
    let t = ((altitude_km - range.0) / (range.1 - range.0)).clamp(0.0, 1.0);
    span.0 + t * (span.1 - span.0)
}
