use crate::error::{ReportError, Result};
use crate::types::{DailyTable, MonthlyAggregate, CONFIRMED_COLUMN, DEATHS_COLUMN};
use crate::util::ifr;
use std::cmp::Ordering;
use std::collections::HashMap;

pub const DEFAULT_TOP_N: usize = 10;

/// Result of folding a month of daily tables.
#[derive(Debug, Clone, PartialEq)]
pub enum MonthlyOutcome {
    /// No daily file existed for the requested month.
    NoData,
    /// One aggregate per region, in first-seen order.
    Regions(Vec<MonthlyAggregate>),
}

fn add_count(total: u64, value: Option<u64>, region: &str, column: &'static str) -> Result<u64> {
    total
        .checked_add(value.unwrap_or(0))
        .ok_or_else(|| ReportError::CountOverflow {
            region: region.to_string(),
            column,
        })
}

/// Union all daily tables and sum deaths/confirmed per region.
///
/// Null counts contribute zero to the sums. The aggregate IFR is derived
/// from the summed totals, not from the daily ratios.
pub fn aggregate_month(tables: &[DailyTable]) -> Result<MonthlyOutcome> {
    let Some(first) = tables.first() else {
        return Ok(MonthlyOutcome::NoData);
    };
    for table in &tables[1..] {
        if table.headers != first.headers {
            return Err(ReportError::SchemaMismatch {
                path: table.path.clone(),
                expected: first.headers.clone(),
                found: table.headers.clone(),
            });
        }
    }

    let undefined = tables
        .iter()
        .flat_map(|t| t.rows.iter())
        .filter(|r| r.ifr.is_none())
        .count();
    log::debug!("{} daily rows have an undefined IFR", undefined);

    #[derive(Default)]
    struct Acc {
        deaths: u64,
        confirmed: u64,
    }

    let mut order: Vec<String> = Vec::new();
    let mut map: HashMap<String, Acc> = HashMap::new();
    for row in tables.iter().flat_map(|t| t.rows.iter()) {
        let e = map.entry(row.region.clone()).or_insert_with(|| {
            order.push(row.region.clone());
            Acc::default()
        });
        e.deaths = add_count(e.deaths, row.deaths, &row.region, DEATHS_COLUMN)?;
        e.confirmed = add_count(e.confirmed, row.confirmed, &row.region, CONFIRMED_COLUMN)?;
    }

    let regions: Vec<MonthlyAggregate> = order
        .into_iter()
        .map(|region| {
            let acc = map.remove(&region).unwrap_or_default();
            MonthlyAggregate {
                ifr: ifr(Some(acc.deaths), Some(acc.confirmed)),
                region,
                total_deaths: acc.deaths,
                total_confirmed: acc.confirmed,
            }
        })
        .collect();
    log::info!(
        "aggregated {} daily reports into {} regions",
        tables.len(),
        regions.len()
    );
    Ok(MonthlyOutcome::Regions(regions))
}

/// Descending by IFR with undefined values last.
fn by_ifr_desc(a: &MonthlyAggregate, b: &MonthlyAggregate) -> Ordering {
    match (a.ifr, b.ifr) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Top `n` regions by IFR. Ties keep their aggregation order.
pub fn rank_top(mut regions: Vec<MonthlyAggregate>, n: usize) -> Vec<MonthlyAggregate> {
    // `sort_by` is stable, which keeps equal IFRs in input order.
    regions.sort_by(by_ifr_desc);
    regions.truncate(n);
    regions
}
