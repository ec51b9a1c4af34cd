//! CSV loading for medal records.
//!
//! # CSV Format
//!
//! Header row required. Columns are matched by name, so their order and any
//! extra columns don't matter:
//!
//! ```text
//! Year,City,Sport,Discipline,Athlete,Country,Gender,Event,Medal
//! 1996,Atlanta,Aquatics,Swimming,PHELPS,USA,Men,100M Freestyle,Gold
//! ```

use crate::error::{MedalError, Result};
use crate::medal::MedalType;
use crate::record::MedalRecord;

const YEAR_COLUMN: &str = "Year";
const COUNTRY_COLUMN: &str = "Country";
const CITY_COLUMN: &str = "City";
const MEDAL_COLUMN: &str = "Medal";

/// Positions of the columns we read, resolved from the header row.
struct Columns {
    year: usize,
    country: usize,
    city: usize,
    medal: usize,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| MedalError::MissingColumn(name.to_string()))
        };
        Ok(Self {
            year: find(YEAR_COLUMN)?,
            country: find(COUNTRY_COLUMN)?,
            city: find(CITY_COLUMN)?,
            medal: find(MEDAL_COLUMN)?,
        })
    }
}

/// Parse medal records from a CSV string.
///
/// Fails on the first row whose `Year` is not an integer: a bad year is a
/// data error, and the aggregations downstream assume every record has one.
/// Unknown medal values are kept with `medal: None`.
///
/// Records are returned in file order.
pub fn load_records(csv_data: &str) -> Result<Vec<MedalRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let columns = Columns::from_headers(rdr.headers()?)?;

    let mut records = Vec::new();
    let mut unknown_medals = 0u32;
    for result in rdr.records() {
        let r = result?;
        let year_str = r.get(columns.year).unwrap_or("").trim();
        let year: i32 = year_str.parse().map_err(|_| MedalError::InvalidYear {
            line: r.position().map(|p| p.line()).unwrap_or(0),
            value: year_str.to_string(),
        })?;

        let medal = MedalType::parse(r.get(columns.medal).unwrap_or(""));
        if medal.is_none() {
            unknown_medals += 1;
        }

        records.push(MedalRecord {
            year,
            country: r.get(columns.country).unwrap_or("").trim().to_string(),
            city: r.get(columns.city).unwrap_or("").trim().to_string(),
            medal,
        });
    }

    log::info!(
        "loader: Loaded {} medal records ({} with unknown medal type)",
        records.len(),
        unknown_medals
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Year,City,Sport,Athlete,Country,Medal
1996,Atlanta,Aquatics,A,USA,Gold
1996,Atlanta,Aquatics,B,USA,Silver
1996,Atlanta,Athletics,C,FRA,Gold
2000,Sydney,Athletics,D,USA,Gold
";

    #[test]
    fn loads_rows_in_file_order() {
        let records = load_records(SAMPLE).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(
            records[0],
            MedalRecord::new(1996, "USA", "Atlanta", Some(MedalType::Gold))
        );
        assert_eq!(records[2].country, "FRA");
        assert_eq!(records[3].year, 2000);
        assert_eq!(records[3].city, "Sydney");
    }

    #[test]
    fn column_order_does_not_matter() {
        let csv = "Medal,Country,Year,City\nBronze,GER,1936,Berlin\n";
        let records = load_records(csv).unwrap();
        assert_eq!(
            records,
            vec![MedalRecord::new(1936, "GER", "Berlin", Some(MedalType::Bronze))]
        );
    }

    #[test]
    fn trims_fields() {
        let csv = "Year,Country,City,Medal\n 1948 , GBR , London , Silver \n";
        let records = load_records(csv).unwrap();
        assert_eq!(
            records[0],
            MedalRecord::new(1948, "GBR", "London", Some(MedalType::Silver))
        );
    }

    #[test]
    fn unknown_medal_is_kept_as_none() {
        let csv = "Year,Country,City,Medal\n1900,FRA,Paris,Participation\n1900,FRA,Paris,\n";
        let records = load_records(csv).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.medal.is_none()));
    }

    #[test]
    fn non_numeric_year_fails_fast() {
        let csv = "Year,Country,City,Medal\n1996,USA,Atlanta,Gold\nnineteen,USA,Atlanta,Gold\n";
        match load_records(csv) {
            Err(MedalError::InvalidYear { line, value }) => {
                assert_eq!(line, 3);
                assert_eq!(value, "nineteen");
            }
            other => panic!("expected InvalidYear, got {:?}", other),
        }
    }

    #[test]
    fn missing_column_is_reported() {
        let csv = "Year,Country,Medal\n1996,USA,Gold\n";
        match load_records(csv) {
            Err(MedalError::MissingColumn(name)) => assert_eq!(name, "City"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn header_only_is_empty() {
        let records = load_records("Year,Country,City,Medal\n").unwrap();
        assert!(records.is_empty());
    }
}
