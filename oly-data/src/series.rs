//! Per-year series produced by the aggregation lenses.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON.

use serde::Serialize;

/// One point of a lens: the number of matching medals in a given year.
///
/// `venue` is only filled in by the total lens, where it lists the host
/// cities seen for that year.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct YearSeriesPoint {
    pub year: i32,
    pub count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
}

impl YearSeriesPoint {
    pub fn new(year: i32, count: u32) -> Self {
        Self {
            year,
            count,
            venue: None,
        }
    }

    pub fn with_venue(year: i32, count: u32, venue: &str) -> Self {
        Self {
            year,
            count,
            venue: Some(venue.to_string()),
        }
    }
}

/// Points ordered by strictly ascending year.
///
/// The only ways to build a `Series` are the aggregations (which emit years
/// from an ordered map) and [`Series::from_points`], which sorts and rejects
/// duplicate years, so the ordering holds for every value of this type.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Series(Vec<YearSeriesPoint>);

impl Series {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Build a series from points in any order. When a year appears more
    /// than once, the last point for it wins.
    pub fn from_points(mut points: Vec<YearSeriesPoint>) -> Self {
        points.reverse();
        points.sort_by_key(|p| p.year);
        points.dedup_by_key(|p| p.year);
        Self(points)
    }

    /// Wrap points already known to be in strictly ascending year order.
    pub(crate) fn from_sorted(points: Vec<YearSeriesPoint>) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0].year < w[1].year));
        Self(points)
    }

    pub fn points(&self) -> &[YearSeriesPoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.0.iter().map(|p| u64::from(p.count)).sum()
    }

    /// Largest count, or 0 for an empty series.
    pub fn max_count(&self) -> u32 {
        self.0.iter().map(|p| p.count).max().unwrap_or(0)
    }

    pub fn years(&self) -> Vec<i32> {
        self.0.iter().map(|p| p.year).collect()
    }

    pub fn get(&self, year: i32) -> Option<&YearSeriesPoint> {
        self.0
            .binary_search_by_key(&year, |p| p.year)
            .ok()
            .map(|i| &self.0[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_sorts_and_dedups() {
        let series = Series::from_points(vec![
            YearSeriesPoint::new(2000, 1),
            YearSeriesPoint::new(1996, 2),
            YearSeriesPoint::new(2000, 7),
        ]);
        assert_eq!(series.years(), vec![1996, 2000]);
        assert_eq!(series.get(2000).map(|p| p.count), Some(7));
    }

    #[test]
    fn totals_and_max() {
        let series = Series::from_points(vec![
            YearSeriesPoint::new(1996, 2),
            YearSeriesPoint::new(2000, 5),
        ]);
        assert_eq!(series.total(), 7);
        assert_eq!(series.max_count(), 5);
        assert_eq!(Series::empty().max_count(), 0);
        assert!(series.get(1998).is_none());
    }

    #[test]
    fn serializes_as_plain_array() {
        let series = Series::from_points(vec![
            YearSeriesPoint::with_venue(1996, 2, "Atlanta"),
            YearSeriesPoint::new(2000, 1),
        ]);
        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(
            json,
            r#"[{"year":1996,"count":2,"venue":"Atlanta"},{"year":2000,"count":1}]"#
        );
    }
}
