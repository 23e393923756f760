mod error;
mod fixture;
mod league;
pub mod schedule;
pub mod table;
mod team;

pub use error::*;
pub use fixture::*;
pub use league::*;
pub use schedule::*;
pub use table::*;
pub use team::*;
