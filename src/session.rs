// A report session: owns the run configuration for the lifetime of one run
// and logs its release on every exit path through `Drop`.
use std::io::Write;
use std::time::Instant;

use crate::config::Config;
use crate::error::Result;
use crate::highlight::region_visuals;
use crate::loader::load_month;
use crate::output::{table_preview, write_csv};
use crate::prompt::MonthChoice;
use crate::render::{MapBackend, MAP_TITLE};
use crate::reports::{aggregate_month, rank_top, MonthlyOutcome};
use crate::types::{MonthlyAggregate, RankedRow, RegionVisual};

/// What a finished run produced. Both lists are empty when the month had no
/// data.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunSummary {
    pub ranked: Vec<MonthlyAggregate>,
    pub visuals: Vec<RegionVisual>,
}

pub struct Session {
    config: Config,
    opened: Instant,
}

impl Session {
    pub fn open(config: Config) -> Self {
        log::info!("session opened (data dir {})", config.data_dir.display());
        Session {
            config,
            opened: Instant::now(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load, aggregate, rank and highlight one month, writing the console
    /// report to `out`.
    pub fn run_month<W: Write>(
        &self,
        month: &MonthChoice,
        year: &str,
        backend: &mut dyn MapBackend,
        out: &mut W,
    ) -> Result<RunSummary> {
        let label = format!("{} {}", month.label(), year);
        let tables = load_month(&self.config.data_dir, month, year)?;

        let regions = match aggregate_month(&tables)? {
            MonthlyOutcome::NoData => {
                writeln!(out, "No data available for {}.", label)?;
                return Ok(RunSummary::default());
            }
            MonthlyOutcome::Regions(regions) => regions,
        };

        let ranked = rank_top(regions, self.config.top_n);
        let rows: Vec<RankedRow> = ranked.iter().map(RankedRow::from).collect();
        writeln!(
            out,
            "Top {} States with Highest Infection Fatality Ratio (IFR) in {}:",
            self.config.top_n, label
        )?;
        writeln!(out, "{}\n", table_preview(&rows, self.config.top_n))?;

        write_csv(&self.config.export_csv, &rows)?;
        writeln!(out, "(Full table exported to {})\n", self.config.export_csv.display())?;

        let names: Vec<&str> = ranked.iter().map(|a| a.region.as_str()).collect();
        writeln!(out, "States to color: {:?}", names)?;

        let visuals = region_visuals(&ranked);
        backend.render(MAP_TITLE, &visuals)?;
        writeln!(
            out,
            "Map with {} highlighted states written to {}",
            visuals.len(),
            backend.destination()
        )?;

        Ok(RunSummary { ranked, visuals })
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        log::info!(
            "session closed after {:.2}s",
            self.opened.elapsed().as_secs_f64()
        );
    }
}
