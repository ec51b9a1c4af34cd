//! Keyed diff between what a layer currently shows and what it should show.
//!
//! Points are identified by year. The connecting line is always redrawn from
//! the full series; markers and labels follow the patch.

use crate::series::{Series, YearSeriesPoint};
use serde::Serialize;

/// Changes that turn a rendered layer into the next one.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct LayerPatch {
    /// Points whose year is not rendered yet.
    pub enter: Vec<YearSeriesPoint>,
    /// Points whose year is rendered with a different count or venue.
    pub update: Vec<YearSeriesPoint>,
    /// Rendered years that are gone from the next series.
    pub exit: Vec<i32>,
}

impl LayerPatch {
    pub fn is_noop(&self) -> bool {
        self.enter.is_empty() && self.update.is_empty() && self.exit.is_empty()
    }

    /// Apply the patch to `rendered`, producing the series it was computed for.
    pub fn apply(&self, rendered: &Series) -> Series {
        let mut points: Vec<YearSeriesPoint> = rendered
            .points()
            .iter()
            .filter(|p| !self.exit.contains(&p.year))
            .cloned()
            .collect();
        points.extend(self.enter.iter().cloned());
        points.extend(self.update.iter().cloned());
        Series::from_points(points)
    }
}

/// Diff two series by year.
///
/// Both inputs are ordered by year, so this is a single merge pass.
pub fn reconcile(rendered: &Series, next: &Series) -> LayerPatch {
    let mut patch = LayerPatch::default();
    let mut old = rendered.points().iter().peekable();
    let mut new = next.points().iter().peekable();

    loop {
        match (old.peek(), new.peek()) {
            (Some(o), Some(n)) if o.year < n.year => {
                patch.exit.push(o.year);
                old.next();
            }
            (Some(o), Some(n)) if o.year > n.year => {
                patch.enter.push((*n).clone());
                new.next();
            }
            (Some(o), Some(n)) => {
                if o != n {
                    patch.update.push((*n).clone());
                }
                old.next();
                new.next();
            }
            (Some(o), None) => {
                patch.exit.push(o.year);
                old.next();
            }
            (None, Some(n)) => {
                patch.enter.push((*n).clone());
                new.next();
            }
            (None, None) => break,
        }
    }

    patch
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(points: &[(i32, u32)]) -> Series {
        Series::from_points(
            points
                .iter()
                .map(|&(year, count)| YearSeriesPoint::new(year, count))
                .collect(),
        )
    }

    #[test]
    fn identical_series_is_noop() {
        let s = series(&[(1996, 2), (2000, 1)]);
        assert!(reconcile(&s, &s).is_noop());
    }

    #[test]
    fn from_empty_enters_everything() {
        let next = series(&[(1996, 2), (2000, 1)]);
        let patch = reconcile(&Series::empty(), &next);
        assert_eq!(patch.enter, next.points().to_vec());
        assert!(patch.update.is_empty());
        assert!(patch.exit.is_empty());
    }

    #[test]
    fn to_empty_exits_everything() {
        let old = series(&[(1996, 2), (2000, 1)]);
        let patch = reconcile(&old, &Series::empty());
        assert_eq!(patch.exit, vec![1996, 2000]);
        assert!(patch.enter.is_empty());
    }

    #[test]
    fn mixed_diff() {
        let old = series(&[(1992, 4), (1996, 2), (2000, 1)]);
        let next = series(&[(1996, 3), (2000, 1), (2004, 5)]);
        let patch = reconcile(&old, &next);
        assert_eq!(patch.exit, vec![1992]);
        assert_eq!(patch.update, vec![YearSeriesPoint::new(1996, 3)]);
        assert_eq!(patch.enter, vec![YearSeriesPoint::new(2004, 5)]);
        assert_eq!(patch.apply(&old), next);
    }

    #[test]
    fn venue_change_is_an_update() {
        let old = Series::from_points(vec![YearSeriesPoint::with_venue(1956, 2, "Melbourne")]);
        let next = Series::from_points(vec![YearSeriesPoint::with_venue(
            1956,
            2,
            "Melbourne, Stockholm",
        )]);
        let patch = reconcile(&old, &next);
        assert_eq!(patch.update.len(), 1);
        assert_eq!(patch.apply(&old), next);
    }
}
