mod generator;
mod round_robin;

pub use generator::*;
pub use round_robin::*;
