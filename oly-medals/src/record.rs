use crate::medal::MedalType;
use serde::{Deserialize, Serialize};

/// One awarded medal.
///
/// `medal` is `None` when the source row carries a medal value we don't
/// recognise. Such rows still count towards the years and cities that exist
/// in the dataset, but never towards a medal total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedalRecord {
    pub year: i32,
    pub country: String,
    pub city: String,
    pub medal: Option<MedalType>,
}

impl MedalRecord {
    pub fn new(year: i32, country: &str, city: &str, medal: Option<MedalType>) -> Self {
        Self {
            year,
            country: country.to_string(),
            city: city.to_string(),
            medal,
        }
    }

    /// True if this row is a medal of the given type.
    pub fn is(&self, medal: MedalType) -> bool {
        self.medal == Some(medal)
    }
}
