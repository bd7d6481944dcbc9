// Entry point and high-level CLI flow.
//
// Asks for a month and year, folds that month's daily reports into a per-state
// IFR ranking, prints the top of the ranking and renders the highlighted
// states to an HTML map.
mod config;
mod error;
mod highlight;
mod loader;
mod output;
mod prompt;
mod render;
mod reports;
mod session;
mod types;
mod util;

use anyhow::Context;
use std::io;

use config::Config;
use render::PlotlyHtml;
use session::Session;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from_env();
    log::debug!("configuration: {:?}", config);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    let month = prompt::read_month(&mut input, &mut stdout).context("reading month")?;
    let year = prompt::read_year(&mut input, &mut stdout).context("reading year")?;

    let session = Session::open(config);
    let mut backend = PlotlyHtml::new(session.config().map_output.clone());
    let summary = session
        .run_month(&month, &year, &mut backend, &mut stdout)
        .with_context(|| format!("building the IFR report for {} {}", month.label(), year))?;
    log::info!(
        "{} regions ranked, {} highlighted",
        summary.ranked.len(),
        summary.visuals.len()
    );
    Ok(())
}
