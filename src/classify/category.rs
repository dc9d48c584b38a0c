use serde::Serialize;
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    Station,
    Weather,
    Comms,
    EarthObs,
    Navigation,
    Science,
    Other,
}

// Ordered rules, evaluated top to bottom against the display name; first
// match wins. Extending coverage means adding a row, not touching the
// matcher.
const CATEGORY_RULES: &[(&str, Category)] = &[
    ("ISS", Category::Station),
    ("ZARYA", Category::Station),
    ("TIANGONG", Category::Station),
    ("CSS (", Category::Station),
    ("NOAA", Category::Weather),
    ("GOES", Category::Weather),
    ("METEOSAT", Category::Weather),
    ("HIMAWARI", Category::Weather),
    ("METOP", Category::Weather),
    ("FENGYUN", Category::Weather),
    ("DMSP", Category::Weather),
    ("STARLINK", Category::Comms),
    ("ONEWEB", Category::Comms),
    ("KUIPER", Category::Comms),
    ("IRIDIUM", Category::Comms),
    ("INTELSAT", Category::Comms),
    ("EUTELSAT", Category::Comms),
    ("GLOBALSTAR", Category::Comms),
    ("ORBCOMM", Category::Comms),
    ("TDRS", Category::Comms),
    ("LANDSAT", Category::EarthObs),
    ("SENTINEL", Category::EarthObs),
    ("WORLDVIEW", Category::EarthObs),
    ("SKYSAT", Category::EarthObs),
    ("SPOT", Category::EarthObs),
    ("TERRA", Category::EarthObs),
    ("AQUA", Category::EarthObs),
    ("GPS", Category::Navigation),
    ("NAVSTAR", Category::Navigation),
    ("GLONASS", Category::Navigation),
    ("GALILEO", Category::Navigation),
    ("BEIDOU", Category::Navigation),
    ("QZS", Category::Navigation),
    ("NAVIC", Category::Navigation),
    ("HUBBLE", Category::Science),
    ("CHANDRA", Category::Science),
    ("FERMI", Category::Science),
    ("SWIFT", Category::Science),
    ("TESS", Category::Science),
    ("XMM", Category::Science),
];

/// Category from the object's display name; defaults to `Other`.
pub fn categorize(name: &str) -> Category {
    let upper = name.to_uppercase();
    CATEGORY_RULES
        .iter()
        .find(|(pattern, _)| upper.contains(pattern))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_match_wins_in_rule_order() {
        // "ISS" outranks any later pattern the name might also contain.
        assert_eq!(categorize("ISS (ZARYA)"), Category::Station);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(categorize("Starlink-3042"), Category::Comms);
        assert_eq!(categorize("noaa 19"), Category::Weather);
    }

    #[test]
    fn one_rule_per_family() {
        assert_eq!(categorize("GOES 18"), Category::Weather);
        assert_eq!(categorize("SENTINEL-2B"), Category::EarthObs);
        assert_eq!(categorize("GPS BIIR-2  (PRN 13)"), Category::Navigation);
        assert_eq!(categorize("HUBBLE SPACE TELESCOPE"), Category::Science);
        assert_eq!(categorize("TIANGONG"), Category::Station);
    }

    #[test]
    fn unmatched_names_default_to_other() {
        assert_eq!(categorize("COSMOS 2251 DEB"), Category::Other);
        assert_eq!(categorize(""), Category::Other);
    }
}
