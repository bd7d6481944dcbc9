use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tabled::Tabled;

use crate::util::{format_int, format_ifr};

/// Column names agreed with the daily report source. Matched exactly.
pub const REGION_COLUMN: &str = "Province_State";
pub const CONFIRMED_COLUMN: &str = "Confirmed";
pub const DEATHS_COLUMN: &str = "Deaths";

/// One CSV row as read from disk. Extra columns are ignored; counts stay
/// textual until validated by the loader.
#[derive(Debug, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Province_State")]
    pub province_state: Option<String>,
    #[serde(rename = "Confirmed")]
    pub confirmed: Option<String>,
    #[serde(rename = "Deaths")]
    pub deaths: Option<String>,
}

/// A single region's figures for one day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRow {
    pub region: String,
    pub confirmed: Option<u64>,
    pub deaths: Option<u64>,
    pub ifr: Option<f64>,
}

/// Everything loaded from one `MM-DD-YYYY.csv` file.
#[derive(Debug, Clone)]
pub struct DailyTable {
    pub path: PathBuf,
    pub day: u32,
    pub headers: Vec<String>,
    pub rows: Vec<DailyRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyAggregate {
    pub region: String,
    pub total_deaths: u64,
    pub total_confirmed: u64,
    pub ifr: Option<f64>,
}

/// Display/export form of a ranked aggregate.
#[derive(Debug, Serialize, Tabled, Clone)]
pub struct RankedRow {
    #[serde(rename = "Province_State")]
    #[tabled(rename = "Province_State")]
    pub province_state: String,
    #[serde(rename = "Total_Deaths")]
    #[tabled(rename = "Total_Deaths")]
    pub total_deaths: String,
    #[serde(rename = "Total_Confirmed")]
    #[tabled(rename = "Total_Confirmed")]
    pub total_confirmed: String,
    #[serde(rename = "IFR")]
    #[tabled(rename = "IFR")]
    pub ifr: String,
}

impl From<&MonthlyAggregate> for RankedRow {
    fn from(agg: &MonthlyAggregate) -> Self {
        RankedRow {
            province_state: agg.region.clone(),
            total_deaths: format_int(agg.total_deaths),
            total_confirmed: format_int(agg.total_confirmed),
            ifr: format_ifr(agg.ifr),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionVisual {
    pub region: String,
    pub code: &'static str,
    pub intensity: f64,
}
