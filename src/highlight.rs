// Maps ranked regions to US state codes and assigns display intensities.
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::types::{MonthlyAggregate, RegionVisual};

pub const INITIAL_INTENSITY: f64 = 1.0;
pub const INTENSITY_STEP: f64 = 0.1;
pub const MIN_INTENSITY: f64 = 0.1;

static STATES: [(&str, &str); 50] = [
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
];

static STATE_CODES: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| STATES.iter().copied().collect());

/// Two-letter code for a full state name. Territories, DC and pseudo-regions
/// have none.
pub fn state_code(region: &str) -> Option<&'static str> {
    STATE_CODES.get(region).copied()
}

/// Linear per-rank fade, floored so deep ranks stay a valid alpha.
pub fn intensity_for_rank(index: usize) -> f64 {
    (INITIAL_INTENSITY - INTENSITY_STEP * index as f64).max(MIN_INTENSITY)
}

/// One visual per ranked region that has a state code, in rank order.
/// Regions without a code are dropped without notice.
pub fn region_visuals(ranked: &[MonthlyAggregate]) -> Vec<RegionVisual> {
    ranked
        .iter()
        .filter_map(|agg| state_code(&agg.region).map(|code| (agg, code)))
        .enumerate()
        .map(|(idx, (agg, code))| RegionVisual {
            region: agg.region.clone(),
            code,
            intensity: intensity_for_rank(idx),
        })
        .collect()
}
