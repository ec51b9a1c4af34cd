use serde::{Deserialize, Serialize};
use std::fmt;

/// The three medal columns a chart can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MedalType {
    Gold,
    Silver,
    Bronze,
}

impl MedalType {
    pub const ALL: [MedalType; 3] = [MedalType::Gold, MedalType::Silver, MedalType::Bronze];

    /// Parse the `Medal` column. Matching is exact apart from surrounding
    /// whitespace; anything else is not a medal we chart.
    pub fn parse(s: &str) -> Option<MedalType> {
        match s.trim() {
            "Gold" => Some(MedalType::Gold),
            "Silver" => Some(MedalType::Silver),
            "Bronze" => Some(MedalType::Bronze),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MedalType::Gold => "Gold",
            MedalType::Silver => "Silver",
            MedalType::Bronze => "Bronze",
        }
    }
}

impl fmt::Display for MedalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_medals() {
        for medal in MedalType::ALL {
            assert_eq!(MedalType::parse(medal.as_str()), Some(medal));
        }
        assert_eq!(MedalType::parse(" Gold "), Some(MedalType::Gold));
    }

    #[test]
    fn parse_unknown_is_none() {
        assert_eq!(MedalType::parse("gold"), None);
        assert_eq!(MedalType::parse(""), None);
        assert_eq!(MedalType::parse("Platinum"), None);
    }
}
