//! Pipeline orchestration
//!
//! This module provides the top-level API for nutricore: compose the target
//! calculator, intake aggregator, and report encoder into single calls, plus
//! JSON-string conveniences for embedders and the CLI.

use crate::error::NutritionError;
use crate::intake::IntakeAggregator;
use crate::report::{DailyReport, ReportEncoder};
use crate::types::{FoodEntry, UserProfile};
use chrono::NaiveDate;

/// Compute one profile's daily report for a date.
///
/// Filters `entries` to the profile and calendar day, sums the totals,
/// derives targets, and encodes progress rows and alerts.
///
/// # Example
/// ```ignore
/// let report = daily_report(&profile, &entries, date);
/// for row in &report.nutrients {
///     println!("{}: {:.0}%", row.label, row.ratio_pct);
/// }
/// ```
pub fn daily_report(profile: &UserProfile, entries: &[FoodEntry], date: NaiveDate) -> DailyReport {
    let intake = IntakeAggregator::daily_intake(profile, entries, date);
    ReportEncoder::new().encode(&intake)
}

/// JSON-in/JSON-out variant of [`daily_report`].
///
/// `profile_json` is a single profile document; `entries_ndjson` is
/// newline-delimited entry documents (blank lines skipped).
pub fn daily_report_from_json(
    profile_json: &str,
    entries_ndjson: &str,
    date: NaiveDate,
) -> Result<String, NutritionError> {
    let profile: UserProfile = serde_json::from_str(profile_json)?;
    let entries = parse_entries_ndjson(entries_ndjson)?;

    let intake = IntakeAggregator::daily_intake(&profile, &entries, date);
    ReportEncoder::new().encode_to_json(&intake)
}

/// Compute a profile's daily targets from its JSON document
pub fn targets_from_profile_json(profile_json: &str) -> Result<String, NutritionError> {
    let profile: UserProfile = serde_json::from_str(profile_json)?;
    let targets = crate::targets::TargetCalculator::nutrient_targets(&profile);
    serde_json::to_string_pretty(&targets).map_err(NutritionError::JsonError)
}

/// Parse newline-delimited entry documents, skipping blank lines
pub fn parse_entries_ndjson(ndjson: &str) -> Result<Vec<FoodEntry>, NutritionError> {
    ndjson
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| serde_json::from_str(line).map_err(NutritionError::JsonError))
        .collect()
}
