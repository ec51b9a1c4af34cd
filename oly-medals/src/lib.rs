//! Core types and CSV loading for Olympic medal data.
//!
//! A medal dataset is a flat table with one row per awarded medal. Only four
//! columns matter to the charts: `Year`, `Country`, `City` and `Medal`.
//! Everything else in the file (athlete, sport, event...) is ignored.

pub mod error;
pub mod loader;
pub mod medal;
pub mod record;

pub use error::{MedalError, Result};
pub use loader::load_records;
pub use medal::MedalType;
pub use record::MedalRecord;
