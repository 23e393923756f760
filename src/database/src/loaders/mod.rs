mod league;

pub use league::*;
