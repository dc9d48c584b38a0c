mod error;
mod parsing;
mod record;

pub use error::ElementsError;
pub use parsing::{parse_catalog, parse_tle_pairs};
pub use record::{OrbitalElementRecord, TleLines};
