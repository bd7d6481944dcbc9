use crate::error::{ReportError, Result};
use crate::prompt::MonthChoice;
use crate::types::{DailyRow, DailyTable, RawRow, CONFIRMED_COLUMN, DEATHS_COLUMN, REGION_COLUMN};
use crate::util::{ifr, parse_count_safe, CountError};
use csv::{ReaderBuilder, StringRecord};
use std::path::Path;

/// Days probed for every month. Files for days the month does not have
/// simply never exist, so no calendar is consulted.
pub const DAYS_PROBED: std::ops::RangeInclusive<u32> = 1..=31;

pub fn day_file_name(month_code: &str, day: u32, year: &str) -> String {
    format!("{}-{:02}-{}.csv", month_code, day, year)
}

fn count_cell(
    path: &Path,
    line: u64,
    column: &'static str,
    value: Option<&str>,
) -> Result<Option<u64>> {
    parse_count_safe(value).map_err(|CountError::Invalid(value)| ReportError::InvalidCount {
        path: path.to_path_buf(),
        line,
        column,
        value,
    })
}

/// Load one daily report and derive the per-row IFR.
///
/// The file must carry the region, confirmed and deaths columns under their
/// exact names. Blank counts become nulls; any other unreadable count fails
/// the whole file.
pub fn load_day(path: &Path, day: u32) -> Result<DailyTable> {
    let csv_err = |source: csv::Error| ReportError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut rdr = ReaderBuilder::new().from_path(path).map_err(csv_err)?;
    let header_record: StringRecord = rdr.headers().map_err(csv_err)?.clone();
    let headers: Vec<String> = header_record.iter().map(|h| h.to_string()).collect();

    for column in [REGION_COLUMN, CONFIRMED_COLUMN, DEATHS_COLUMN] {
        if !headers.iter().any(|h| h == column) {
            return Err(ReportError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(csv_err)?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let raw: RawRow = record.deserialize(Some(&header_record)).map_err(csv_err)?;

        let confirmed = count_cell(path, line, CONFIRMED_COLUMN, raw.confirmed.as_deref())?;
        let deaths = count_cell(path, line, DEATHS_COLUMN, raw.deaths.as_deref())?;
        let region = raw.province_state.unwrap_or_default().trim().to_string();

        rows.push(DailyRow {
            region,
            confirmed,
            deaths,
            ifr: ifr(deaths, confirmed),
        });
    }

    Ok(DailyTable {
        path: path.to_path_buf(),
        day,
        headers,
        rows,
    })
}

/// Load every daily report present for `month`/`year`, in day order.
///
/// Missing days are skipped; the first file that fails to load aborts.
pub fn load_month(data_dir: &Path, month: &MonthChoice, year: &str) -> Result<Vec<DailyTable>> {
    let code = month.code();
    let mut tables = Vec::new();
    for day in DAYS_PROBED {
        let path = data_dir.join(day_file_name(&code, day, year));
        if !path.is_file() {
            log::debug!("no report at {}", path.display());
            continue;
        }
        let table = load_day(&path, day)?;
        log::info!(
            "day {:02}: loaded {} ({} rows)",
            table.day,
            path.display(),
            table.rows.len()
        );
        tables.push(table);
    }
    log::info!(
        "{} daily reports found for {} {}",
        tables.len(),
        month.label(),
        year
    );
    Ok(tables)
}


#[cfg(test)]
mod tests {
    use super::test_support::ScratchDir;
    use super::*;
    use crate::prompt::parse_month;
    use approx::assert_relative_eq;

    const HEADER: &str = "Province_State,Country_Region,Confirmed,Deaths\n";

    #[test]
    fn file_names_are_zero_padded() {
        assert_eq!(day_file_name("01", 1, "2021"), "01-01-2021.csv");
        assert_eq!(day_file_name("11", 23, "2020"), "11-23-2020.csv");
    }

    #[test]
    fn load_day_computes_ifr_with_null_propagation() {
        let dir = ScratchDir::new("load_day");
        let path = dir.write(
            "01-01-2021.csv",
            &format!(
                "{}California,US,100,5\nGuam,US,0,0\nTexas,US,,3\nOhio,US,50,\n",
                HEADER
            ),
        );
        let table = load_day(&path, 1).unwrap();
        assert_eq!(table.rows.len(), 4);
        assert_eq!(table.headers.len(), 4);
        assert_relative_eq!(table.rows[0].ifr.unwrap(), 5.0);
        assert_eq!(table.rows[1].ifr, None);
        assert_eq!(table.rows[2].confirmed, None);
        assert_eq!(table.rows[2].ifr, None);
        assert_eq!(table.rows[3].deaths, None);
        assert_eq!(table.rows[3].ifr, None);
    }

    #[test]
    fn load_day_requires_exact_column_names() {
        let dir = ScratchDir::new("columns");
        let path = dir.write("01-01-2021.csv", "Province_State,confirmed,Deaths\nOhio,1,0\n");
        match load_day(&path, 1) {
            Err(ReportError::MissingColumn { column, .. }) => assert_eq!(column, "Confirmed"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn load_day_rejects_unreadable_counts_with_location() {
        let dir = ScratchDir::new("bad_count");
        let path = dir.write(
            "01-02-2021.csv",
            &format!("{}Ohio,US,10,1\nIowa,US,lots,2\n", HEADER),
        );
        let err = load_day(&path, 2).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("01-02-2021.csv"), "{}", msg);
        assert!(msg.contains("line 3"), "{}", msg);
        assert!(msg.contains("lots"), "{}", msg);
    }

    #[test]
    fn load_month_skips_missing_days_and_keeps_day_order() {
        let dir = ScratchDir::new("month");
        dir.write("04-15-2021.csv", &format!("{}Ohio,US,10,1\n", HEADER));
        dir.write("04-02-2021.csv", &format!("{}Ohio,US,20,1\n", HEADER));
        // Other months and years are ignored.
        dir.write("05-01-2021.csv", &format!("{}Ohio,US,20,1\n", HEADER));
        dir.write("04-01-2020.csv", &format!("{}Ohio,US,20,1\n", HEADER));

        let april = parse_month("apr").unwrap();
        let tables = load_month(&dir.0, &april, "2021").unwrap();
        let days: Vec<u32> = tables.iter().map(|t| t.day).collect();
        assert_eq!(days, vec![2, 15]);
    }

    #[test]
    fn load_month_with_no_files_is_empty_not_an_error() {
        let dir = ScratchDir::new("empty");
        let jan = parse_month("jan").unwrap();
        assert!(load_month(&dir.0, &jan, "not-a-year").unwrap().is_empty());
    }

    #[test]
    fn load_month_fails_on_a_broken_file() {
        let dir = ScratchDir::new("broken");
        dir.write("01-01-2021.csv", &format!("{}Ohio,US,10,1\n", HEADER));
        dir.write("01-03-2021.csv", "Province_State,Deaths\nOhio,1\n");
        let jan = parse_month("jan").unwrap();
        let err = load_month(&dir.0, &jan, "2021").unwrap_err();
        assert!(err.to_string().contains("01-03-2021.csv"));
    }
}
