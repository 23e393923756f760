mod form;
mod standings;
pub mod zones;

pub use form::*;
pub use standings::*;
pub use zones::{TableZone, ZoneThresholds};
