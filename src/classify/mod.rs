mod band;
mod category;
mod visual;

pub use band::{band_of, Band};
pub use category::{categorize, Category};
pub use visual::display_altitude;
