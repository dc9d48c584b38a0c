use crate::elements::record::OrbitalElementRecord;

/// Split raw catalog text into (name, line1, line2) tuples. Handles both
/// 2-line and 3-line entries mixed in one body.
pub fn parse_tle_pairs(content: &str) -> Vec<(Option<String>, String, String)> {
    let lines: Vec<&str> = content
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();

    let mut result = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if lines[i].starts_with("1 ") && i + 1 < lines.len() && lines[i + 1].starts_with("2 ") {
            result.push((None, lines[i].to_string(), lines[i + 1].to_string()));
            i += 2;
        } else if i + 2 < lines.len()
            && lines[i + 1].starts_with("1 ")
            && lines[i + 2].starts_with("2 ")
        {
            result.push((
                Some(lines[i].to_string()),
                lines[i + 1].to_string(),
                lines[i + 2].to_string(),
            ));
            i += 3;
        } else {
            i += 1; // skip unrecognized line
        }
    }

    result
}

/// Parse a whole catalog body into element records. Malformed entries are
/// skipped with a warning; one bad record never aborts the batch.
pub fn parse_catalog(content: &str) -> Vec<OrbitalElementRecord> {
    let mut records = Vec::new();

    for (name, line1, line2) in parse_tle_pairs(content) {
        match OrbitalElementRecord::from_tle(name, &line1, &line2) {
            Ok(record) => records.push(record),
            Err(e) => {
                log::warn!("skipping malformed element entry: {}", e);
            }
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISS_TLE: &str = "\
ISS (ZARYA)
1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927
2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

    #[test]
    fn parses_named_three_line_entry() {
        let records = parse_catalog(ISS_TLE);
        assert_eq!(records.len(), 1);
        let rec = &records[0];
        assert_eq!(rec.object_name, "ISS (ZARYA)");
        assert_eq!(rec.catalog_id, 25544);
        assert!((rec.mean_motion - 15.72125391).abs() < 1e-6);
        assert!((rec.eccentricity - 0.0006703).abs() < 1e-9);
        assert!((rec.inclination_deg - 51.6416).abs() < 1e-6);
    }

    #[test]
    fn parses_bare_two_line_entry() {
        let body: String = ISS_TLE.lines().skip(1).collect::<Vec<_>>().join("\n");
        let records = parse_catalog(&body);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].object_name, "NORAD 25544");
    }

    #[test]
    fn retains_raw_lines_for_propagator() {
        let records = parse_catalog(ISS_TLE);
        assert!(records[0].tle.line1.starts_with("1 25544U"));
        assert!(records[0].tle.line2.starts_with("2 25544"));
    }

    #[test]
    fn malformed_entry_does_not_abort_batch() {
        let body = format!("{}\nGARBAGE\n1 not-a-line\n2 also-not", ISS_TLE);
        let records = parse_catalog(&body);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn empty_input_yields_empty_batch() {
        assert!(parse_catalog("").is_empty());
    }
}
