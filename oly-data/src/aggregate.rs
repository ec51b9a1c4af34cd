//! Per-year medal counting.
//!
//! Every lens groups its input rows by year and counts the rows of the
//! chart's medal type. A year is present in the output as soon as any row
//! for it is present in the input, even if none of those rows match the
//! medal type (it then has `count == 0`). Years without any input row are
//! absent, never zero-filled.

use crate::series::{Series, YearSeriesPoint};
use oly_medals::{MedalRecord, MedalType};
use std::collections::BTreeMap;

/// Count `medal` rows per year.
///
/// Accepts any iterator of record references, so a filtered subset can be
/// aggregated without copying it. An empty input yields an empty series.
pub fn aggregate_by_year<'a, I>(records: I, medal: MedalType) -> Series
where
    I: IntoIterator<Item = &'a MedalRecord>,
{
    let mut per_year: BTreeMap<i32, u32> = BTreeMap::new();
    for record in records {
        let count = per_year.entry(record.year).or_insert(0);
        if record.is(medal) {
            *count += 1;
        }
    }

    Series::from_sorted(
        per_year
            .into_iter()
            .map(|(year, count)| YearSeriesPoint::new(year, count))
            .collect(),
    )
}

/// Count `medal` rows per year and host city, then sum the cities back up.
///
/// The counts are the same as [`aggregate_by_year`]; the second grouping
/// level only exists to recover the venue. Each point's `venue` joins the
/// cities seen for that year with `", "`, in the order they first appear.
pub fn aggregate_total_by_year<'a, I>(records: I, medal: MedalType) -> Series
where
    I: IntoIterator<Item = &'a MedalRecord>,
{
    // A games year has one host city in practice, so a short vec per year
    // is enough to keep first-seen order.
    let mut per_year: BTreeMap<i32, Vec<(&'a str, u32)>> = BTreeMap::new();
    for record in records {
        let cities = per_year.entry(record.year).or_default();
        let idx = match cities.iter().position(|(city, _)| *city == record.city) {
            Some(idx) => idx,
            None => {
                cities.push((record.city.as_str(), 0));
                cities.len() - 1
            }
        };
        if record.is(medal) {
            cities[idx].1 += 1;
        }
    }

    Series::from_sorted(
        per_year
            .into_iter()
            .map(|(year, cities)| {
                let count = cities.iter().map(|(_, n)| n).sum();
                let venue = cities
                    .iter()
                    .map(|(city, _)| *city)
                    .collect::<Vec<_>>()
                    .join(", ");
                YearSeriesPoint {
                    year,
                    count,
                    venue: Some(venue),
                }
            })
            .collect(),
    )
}

/// Rows belonging to `country`, in source order.
pub fn filter_by_country<'a>(records: &'a [MedalRecord], country: &str) -> Vec<&'a MedalRecord> {
    records.iter().filter(|r| r.country == country).collect()
}

/// Distinct countries in the order they first appear in the data.
pub fn distinct_countries(records: &[MedalRecord]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert(r.country.as_str()))
        .map(|r| r.country.clone())
        .collect()
}
