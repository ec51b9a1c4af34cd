//! Per-variant chart configuration.
//!
//! The four medal charts only differ in the medal column they count and in
//! their presentation details, so each app picks one of these presets.

use oly_medals::MedalType;
use serde::Serialize;

/// Colours of the three lenses.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Palette {
    pub total: String,
    pub country: String,
    pub reference: String,
}

impl Palette {
    pub fn new(total: &str, country: &str, reference: &str) -> Self {
        Self {
            total: total.to_string(),
            country: country.to_string(),
            reference: reference.to_string(),
        }
    }
}

/// What hovering a point of the total line shows.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TooltipMode {
    /// "Year: 1996 / Venue: Atlanta"
    Venue,
    /// "Year: 1996 / Gold Medals: 2"
    Count,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChartConfig {
    /// Medal column the chart counts.
    pub medal: MedalType,
    pub title: Option<String>,
    pub y_axis_label: String,
    pub palette: Palette,
    /// Show the total lens counts permanently above each point.
    pub total_labels: bool,
    pub total_tooltip: TooltipMode,
    pub legend: bool,
    /// Explanatory paragraphs shown under the chart.
    pub notes: Vec<String>,
}

const WWII_NOTE: &str = "Note that there were no Olympics held in 1940 and 1944 due to WWII and hence the jump from 1936 to 1948";

impl ChartConfig {
    fn titled(medal: MedalType, title: &str, y_axis_label: &str) -> Self {
        Self {
            medal,
            title: Some(title.to_string()),
            y_axis_label: y_axis_label.to_string(),
            palette: Palette::new("gray", "indianred", "steelblue"),
            total_labels: true,
            total_tooltip: TooltipMode::Venue,
            legend: true,
            notes: vec![WWII_NOTE.to_string()],
        }
    }

    pub fn gold() -> Self {
        Self::titled(
            MedalType::Gold,
            "Gold Medals in the Summer Olympics Over the Years",
            "Number of Medals Awarded",
        )
    }

    pub fn silver() -> Self {
        Self::titled(
            MedalType::Silver,
            "Silver Medals in the Olympics Over the Years",
            "Number of Medals",
        )
    }

    pub fn bronze() -> Self {
        Self::titled(
            MedalType::Bronze,
            "Bronze Medals in the Summer Olympics Over the Years",
            "Number of Medals Awarded",
        )
    }

    /// Bare chart: no title, legend or permanent labels, and a count tooltip
    /// on the total line.
    pub fn generic(medal: MedalType) -> Self {
        Self {
            medal,
            title: None,
            y_axis_label: "Number of Medals".to_string(),
            palette: Palette::new("gray", "steelblue", "red"),
            total_labels: false,
            total_tooltip: TooltipMode::Count,
            legend: false,
            notes: Vec::new(),
        }
    }

    /// Label for a count of this chart's medal, e.g. "Gold Medals".
    pub fn count_label(&self) -> String {
        format!("{} Medals", self.medal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_count_their_own_medal() {
        assert_eq!(ChartConfig::gold().medal, MedalType::Gold);
        assert_eq!(ChartConfig::silver().medal, MedalType::Silver);
        assert_eq!(ChartConfig::bronze().medal, MedalType::Bronze);
        assert_eq!(ChartConfig::generic(MedalType::Gold).medal, MedalType::Gold);
    }

    #[test]
    fn generic_has_no_decorations() {
        let config = ChartConfig::generic(MedalType::Gold);
        assert!(config.title.is_none());
        assert!(!config.total_labels);
        assert!(!config.legend);
        assert_eq!(config.total_tooltip, TooltipMode::Count);
        assert_eq!(config.palette.reference, "red");
        assert_eq!(config.count_label(), "Gold Medals");
    }

    #[test]
    fn titled_presets_share_palette() {
        for config in [ChartConfig::gold(), ChartConfig::silver(), ChartConfig::bronze()] {
            assert_eq!(config.palette, Palette::new("gray", "indianred", "steelblue"));
            assert_eq!(config.total_tooltip, TooltipMode::Venue);
            assert_eq!(config.notes.len(), 1);
        }
    }
}
